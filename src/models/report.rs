//! Structured results of a tournament run, consumed by the reporting side.

use crate::models::game::{GroupResults, MatchResult};
use crate::models::pot::Pots;
use crate::models::team::{Team, TeamId, TeamRecord};
use crate::models::tournament::TournamentError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Pipeline stage, used to say where an issue happened or where a run stopped.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    Dataset,
    GroupStage,
    Seeding,
    Knockout,
}

/// A recovered or fatal failure, attributed to the stage that hit it.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct StageIssue {
    pub stage: Stage,
    pub error: TournamentError,
}

/// Snapshot of one team's standing at report time.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct TeamStanding {
    pub id: TeamId,
    pub name: String,
    pub ranking: i32,
    pub record: TeamRecord,
}

impl From<&Team> for TeamStanding {
    fn from(t: &Team) -> Self {
        Self {
            id: t.id,
            name: t.name.clone(),
            ranking: t.ranking,
            record: t.record.clone(),
        }
    }
}

/// Final standings of one group, best first.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct GroupStandings {
    pub group: String,
    pub teams: Vec<TeamStanding>,
}

/// All knockout matches, in bracket-slot order. Empty when the bracket could not be built.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct KnockoutResults {
    pub quarter_finals: Vec<MatchResult>,
    pub semi_finals: Vec<MatchResult>,
    pub bronze_match: Vec<MatchResult>,
    pub final_match: Vec<MatchResult>,
}

impl KnockoutResults {
    pub fn is_empty(&self) -> bool {
        self.quarter_finals.is_empty()
            && self.semi_finals.is_empty()
            && self.bronze_match.is_empty()
            && self.final_match.is_empty()
    }
}

/// Medal table.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Medals {
    pub gold: TeamId,
    pub silver: TeamId,
    pub bronze: TeamId,
}

/// Everything one run produced. Partial when `halted_at` is set.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TournamentReport {
    pub group_results: Vec<GroupResults>,
    pub standings: Vec<GroupStandings>,
    pub pots: Option<Pots>,
    pub knockout: KnockoutResults,
    pub medals: Option<Medals>,
    pub issues: Vec<StageIssue>,
    /// Stage that stopped the pipeline, if any.
    pub halted_at: Option<Stage>,
    pub simulated_at: DateTime<Utc>,
}

impl TournamentReport {
    pub fn new() -> Self {
        Self {
            group_results: Vec::new(),
            standings: Vec::new(),
            pots: None,
            knockout: KnockoutResults::default(),
            medals: None,
            issues: Vec::new(),
            halted_at: None,
            simulated_at: Utc::now(),
        }
    }
}

impl Default for TournamentReport {
    fn default() -> Self {
        Self::new()
    }
}
