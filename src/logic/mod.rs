//! Tournament business logic: simulation, group stage, seeding, knockout, full runs.

mod dataset;
mod group_play;
mod knockout;
mod orchestrator;
mod report;
mod seeding;
mod simulator;

pub use dataset::{
    default_tournament, load_groups_csv, load_groups_json, load_groups_value, DEFAULT_GROUPS_JSON,
};
pub use group_play::{
    compare_standing, run_group_stage, sort_standings, standings, standings_snapshot,
};
pub use knockout::{medals, run_knockout_stage, QUARTER_FINAL_DRAW};
pub use orchestrator::{score_source, simulate_tournament};
pub use report::render_text;
pub use seeding::{build_pots, collect_teams, compare_seed, QUALIFIERS};
pub use simulator::{
    degenerate_result, MatchSimulator, RandomScores, ScoreSource, BASE_SCORE, DRAW_RANGE,
    LOSS_POINTS, WIN_POINTS,
};
