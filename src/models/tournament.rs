//! Tournament, TournamentState and TournamentError.

use crate::models::report::TournamentReport;
use crate::models::team::{Group, Team, TeamEntry, TeamId};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Errors that can occur during tournament operations.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TournamentError {
    /// A match was requested with a missing team reference.
    InvalidInput { detail: String },
    /// A group's data is not a list of teams; the group is skipped.
    MalformedGroup { group: String },
    /// Not enough teams for seeding (8 qualifiers) or for the bracket (2 per pot).
    InsufficientTeams { needed: usize, found: usize },
    /// The dataset as a whole could not be read.
    MalformedDataset { detail: String },
    /// A group with this label already exists.
    DuplicateGroup { group: String },
    /// Two teams in the same group share a name (case-insensitive).
    DuplicateTeamName { group: String, name: String },
    /// Tournament is not in a state that allows this action.
    InvalidState,
}

impl std::fmt::Display for TournamentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TournamentError::InvalidInput { detail } => write!(f, "Invalid match input: {}", detail),
            TournamentError::MalformedGroup { group } => {
                write!(f, "Group {} is not a list of teams", group)
            }
            TournamentError::InsufficientTeams { needed, found } => {
                write!(f, "Not enough teams: need {}, found {}", needed, found)
            }
            TournamentError::MalformedDataset { detail } => write!(f, "Malformed dataset: {}", detail),
            TournamentError::DuplicateGroup { group } => write!(f, "Group {} already exists", group),
            TournamentError::DuplicateTeamName { group, name } => {
                write!(f, "Team {} appears twice in group {}", name, group)
            }
            TournamentError::InvalidState => write!(f, "Invalid state for this action"),
        }
    }
}

impl std::error::Error for TournamentError {}

/// Unique identifier for a tournament.
pub type TournamentId = Uuid;

/// Current phase of the tournament.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TournamentState {
    /// Groups loaded; not simulated yet.
    #[default]
    Setup,
    /// Every stage ran; medals are decided.
    Completed,
    /// A stage stopped the pipeline (see the report's `halted_at`).
    Halted,
}

/// Full tournament: the team arena, groups referencing it, and the last run.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Tournament {
    pub id: TournamentId,
    /// Every team, indexed by `TeamId`.
    pub teams: Vec<Team>,
    /// Groups in load order.
    pub groups: Vec<Group>,
    pub state: TournamentState,
    /// Report of the most recent simulation.
    pub last_report: Option<TournamentReport>,
}

impl Default for Tournament {
    fn default() -> Self {
        Self::new()
    }
}

impl Tournament {
    /// Create an empty tournament in Setup state.
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            teams: Vec::new(),
            groups: Vec::new(),
            state: TournamentState::Setup,
            last_report: None,
        }
    }

    pub fn team(&self, id: TeamId) -> Option<&Team> {
        self.teams.get(id.0)
    }

    pub fn team_mut(&mut self, id: TeamId) -> Option<&mut Team> {
        self.teams.get_mut(id.0)
    }

    /// Display name of a team, or `"?"` for an unknown id.
    pub fn team_name(&self, id: TeamId) -> &str {
        self.team(id).map(|t| t.name.as_str()).unwrap_or("?")
    }

    pub fn group(&self, name: &str) -> Option<&Group> {
        self.groups.iter().find(|g| g.name == name)
    }

    /// Add a group of teams (only valid in Setup). Team names must be unique within the
    /// group (case-insensitive); the same name may appear in another group.
    pub fn add_group(
        &mut self,
        name: impl Into<String>,
        entries: Vec<TeamEntry>,
    ) -> Result<(), TournamentError> {
        if self.state != TournamentState::Setup {
            return Err(TournamentError::InvalidState);
        }
        let name = name.into();
        let name = name.trim();
        if name.is_empty() {
            return Err(TournamentError::MalformedGroup {
                group: name.to_string(),
            });
        }
        if self.group(name).is_some() {
            return Err(TournamentError::DuplicateGroup {
                group: name.to_string(),
            });
        }
        for (i, entry) in entries.iter().enumerate() {
            let is_duplicate = entries[..i]
                .iter()
                .any(|other| other.name.trim().eq_ignore_ascii_case(entry.name.trim()));
            if is_duplicate {
                return Err(TournamentError::DuplicateTeamName {
                    group: name.to_string(),
                    name: entry.name.trim().to_string(),
                });
            }
        }

        let mut members = Vec::with_capacity(entries.len());
        for entry in entries {
            let id = TeamId(self.teams.len());
            self.teams.push(Team::new(id, entry.name.trim(), name, entry.ranking));
            members.push(id);
        }
        self.groups.push(Group {
            name: name.to_string(),
            members,
        });
        Ok(())
    }

    /// Back to Setup: clears every team record and the last report. Groups keep their teams.
    pub fn restart(&mut self) {
        for team in &mut self.teams {
            team.reset_record();
        }
        self.state = TournamentState::Setup;
        self.last_report = None;
    }
}
