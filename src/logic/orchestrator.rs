//! Full run: group stage, seeding, knockout stage, medals.

use crate::logic::group_play::{run_group_stage, standings_snapshot};
use crate::logic::knockout::{medals, run_knockout_stage};
use crate::logic::seeding::build_pots;
use crate::logic::simulator::{MatchSimulator, RandomScores, ScoreSource};
use crate::models::{
    Pots, Stage, StageIssue, Tournament, TournamentError, TournamentReport, TournamentState,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Score source for a run: reproducible with a seed, entropy-seeded otherwise.
pub fn score_source(seed: Option<u64>) -> RandomScores<ChaCha8Rng> {
    let rng = match seed {
        Some(s) => ChaCha8Rng::seed_from_u64(s),
        None => ChaCha8Rng::from_entropy(),
    };
    RandomScores::new(rng)
}

/// Simulate the whole tournament (only valid in Setup).
///
/// A stage that cannot run stops the pipeline: the report keeps everything produced so
/// far, records the issue and sets `halted_at`, and the tournament moves to `Halted`.
/// Otherwise it moves to `Completed` with medals decided. The report is also stored as
/// `last_report`.
pub fn simulate_tournament<S: ScoreSource>(
    tournament: &mut Tournament,
    source: S,
) -> Result<TournamentReport, TournamentError> {
    if tournament.state != TournamentState::Setup {
        return Err(TournamentError::InvalidState);
    }
    let mut simulator = MatchSimulator::new(source);
    let mut report = TournamentReport::new();

    let (group_results, issues) = run_group_stage(tournament, &mut simulator);
    report.group_results = group_results;
    report.issues.extend(issues);
    report.standings = standings_snapshot(tournament);

    let pots = match build_pots(tournament, &report.group_results) {
        Ok(pots) => pots,
        Err(error) => return Ok(halt(tournament, report, Stage::Seeding, error)),
    };
    Ok(play_knockout(tournament, report, pots, &mut simulator))
}

/// Knockout part of a run: plays the bracket from `pots` and finishes the report.
fn play_knockout<S: ScoreSource>(
    tournament: &mut Tournament,
    mut report: TournamentReport,
    pots: Pots,
    simulator: &mut MatchSimulator<S>,
) -> TournamentReport {
    let knockout = run_knockout_stage(tournament, &pots, simulator);
    report.pots = Some(pots);
    match knockout {
        Ok((knockout, issues)) => {
            report.issues.extend(issues);
            report.medals = medals(&knockout);
            report.knockout = knockout;
        }
        Err(error) => return halt(tournament, report, Stage::Knockout, error),
    }

    tournament.state = TournamentState::Completed;
    tournament.last_report = Some(report.clone());
    report
}

/// Stop the run at `stage`: record the issue and keep the partial report.
fn halt(
    tournament: &mut Tournament,
    mut report: TournamentReport,
    stage: Stage,
    error: TournamentError,
) -> TournamentReport {
    log::warn!("Tournament stopped at {:?}: {}", stage, error);
    report.issues.push(StageIssue { stage, error });
    report.halted_at = Some(stage);
    tournament.state = TournamentState::Halted;
    tournament.last_report = Some(report.clone());
    report
}
