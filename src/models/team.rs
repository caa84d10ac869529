//! Team, TeamRecord and Group data structures.

use serde::{Deserialize, Serialize};

/// Stable handle to a team: its index in the tournament's team arena.
///
/// Groups, pots and bracket matches hold `TeamId`s instead of names, so two teams
/// sharing a display name in different groups never get confused.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TeamId(pub usize);

/// Group-stage record of a team. Reset at the start of every group stage.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct TeamRecord {
    /// Tournament points (2 per win, 1 per loss).
    pub points: u32,
    pub wins: u32,
    pub losses: u32,
    pub points_for: i32,
    pub points_against: i32,
    /// Always `points_for - points_against`, saturating at the `i32` bounds.
    pub point_difference: i32,
}

impl TeamRecord {
    /// Apply one played match from this team's point of view.
    ///
    /// `own` and `opponent` are the tournament points awarded to each side (2/1, or 0/0 for a
    /// degenerate match, which counts neither as a win nor a loss).
    pub fn record_match(&mut self, scored: i32, conceded: i32, own: u32, opponent: u32) {
        self.points_for = self.points_for.saturating_add(scored);
        self.points_against = self.points_against.saturating_add(conceded);
        self.point_difference = self.points_for.saturating_sub(self.points_against);
        self.points = self.points.saturating_add(own);
        if own == 2 {
            self.wins += 1;
        }
        if opponent == 2 {
            self.losses += 1;
        }
    }
}

/// A national team taking part in the tournament.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub id: TeamId,
    pub name: String,
    /// Label of the group the team was loaded into.
    pub group: String,
    /// FIBA world ranking; lower is stronger.
    pub ranking: i32,
    pub record: TeamRecord,
}

impl Team {
    pub fn new(id: TeamId, name: impl Into<String>, group: impl Into<String>, ranking: i32) -> Self {
        Self {
            id,
            name: name.into(),
            group: group.into(),
            ranking,
            record: TeamRecord::default(),
        }
    }

    pub fn reset_record(&mut self) {
        self.record = TeamRecord::default();
    }
}

/// Input descriptor of a team as it appears in a dataset.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct TeamEntry {
    #[serde(rename = "Team")]
    pub name: String,
    #[serde(rename = "FIBARanking")]
    pub ranking: i32,
}

impl TeamEntry {
    pub fn new(name: impl Into<String>, ranking: i32) -> Self {
        Self {
            name: name.into(),
            ranking,
        }
    }
}

/// A named group. Member order is the load order until the group stage sorts it.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Group {
    pub name: String,
    pub members: Vec<TeamId>,
}
