//! Simulated matches: MatchResult, the group-stage MatchRecord, and RoundType.

use crate::models::team::TeamId;
use serde::{Deserialize, Serialize};

/// Display name used for a side whose team reference was missing.
pub const UNDEFINED_TEAM: &str = "Undefined";

/// Phase of the tournament a match belongs to.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundType {
    GroupPlay,
    QuarterFinals,
    SemiFinals,
    BronzeMatch,
    Final,
}

/// Outcome of one simulated match.
///
/// `points` is the tournament-point allocation `[team_a, team_b]`: `[2, 1]` when team A
/// scored strictly more, `[1, 2]` otherwise (a tied score goes to team B). A degenerate
/// match, produced when a team reference is missing, carries `[0, 0]` and zero scores.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub round: RoundType,
    pub team_a: Option<TeamId>,
    pub team_b: Option<TeamId>,
    pub team_a_name: String,
    pub team_b_name: String,
    pub score_a: i32,
    pub score_b: i32,
    pub points: [u32; 2],
}

impl MatchResult {
    /// True for the zero-score fallback produced when a team reference was absent.
    pub fn is_degenerate(&self) -> bool {
        self.team_a.is_none() || self.team_b.is_none()
    }

    /// Winner by raw score comparison; team B takes the tie.
    pub fn winner(&self) -> Option<TeamId> {
        if self.score_a > self.score_b {
            self.team_a
        } else {
            self.team_b
        }
    }

    /// Loser by raw score comparison; team A loses a tie.
    pub fn loser(&self) -> Option<TeamId> {
        if self.score_a > self.score_b {
            self.team_b
        } else {
            self.team_a
        }
    }

    /// Score as `"a:b"`.
    pub fn score_line(&self) -> String {
        format!("{}:{}", self.score_a, self.score_b)
    }
}

/// One group-stage match as it is recorded in the group results.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct MatchRecord {
    pub team_a: Option<TeamId>,
    pub team_b: Option<TeamId>,
    pub team_a_name: String,
    pub team_b_name: String,
    pub score: String,
    pub points: [u32; 2],
}

impl From<&MatchResult> for MatchRecord {
    fn from(m: &MatchResult) -> Self {
        Self {
            team_a: m.team_a,
            team_b: m.team_b,
            team_a_name: m.team_a_name.clone(),
            team_b_name: m.team_b_name.clone(),
            score: m.score_line(),
            points: m.points,
        }
    }
}

/// Matches played in one group, in pair order.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct GroupResults {
    pub group: String,
    pub matches: Vec<MatchRecord>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(score_a: i32, score_b: i32) -> MatchResult {
        MatchResult {
            round: RoundType::QuarterFinals,
            team_a: Some(TeamId(0)),
            team_b: Some(TeamId(1)),
            team_a_name: "A".into(),
            team_b_name: "B".into(),
            score_a,
            score_b,
            points: if score_a > score_b { [2, 1] } else { [1, 2] },
        }
    }

    #[test]
    fn winner_is_decided_by_raw_score() {
        let m = result(91, 88);
        assert_eq!(m.winner(), Some(TeamId(0)));
        assert_eq!(m.loser(), Some(TeamId(1)));
        assert_eq!(m.score_line(), "91:88");
    }

    #[test]
    fn tie_goes_to_team_b() {
        let m = result(85, 85);
        assert_eq!(m.winner(), Some(TeamId(1)));
        assert_eq!(m.loser(), Some(TeamId(0)));
    }
}
