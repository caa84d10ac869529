//! Data structures for the tournament: teams, groups, matches, pots, reports.

mod game;
mod pot;
mod report;
mod team;
mod tournament;

pub use game::{GroupResults, MatchRecord, MatchResult, RoundType, UNDEFINED_TEAM};
pub use pot::{PotId, Pots, POT_SIZE};
pub use report::{
    GroupStandings, KnockoutResults, Medals, Stage, StageIssue, TeamStanding, TournamentReport,
};
pub use team::{Group, Team, TeamEntry, TeamId, TeamRecord};
pub use tournament::{Tournament, TournamentError, TournamentId, TournamentState};
