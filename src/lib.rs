//! Basketball tournament simulator: library with models and business logic.

pub mod logic;
pub mod models;

pub use logic::{
    build_pots, default_tournament, load_groups_csv, load_groups_json, load_groups_value, medals,
    render_text, run_group_stage, run_knockout_stage, score_source, simulate_tournament,
    standings, MatchSimulator, RandomScores, ScoreSource,
};
pub use models::{
    Group, GroupResults, GroupStandings, KnockoutResults, MatchRecord, MatchResult, Medals, PotId,
    Pots, RoundType, Stage, StageIssue, Team, TeamEntry, TeamId, TeamRecord, TeamStanding,
    Tournament, TournamentError, TournamentId, TournamentReport, TournamentState,
};
