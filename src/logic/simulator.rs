//! Match simulation: score model and the pluggable randomness source.

use crate::models::{MatchResult, RoundType, Team, TournamentError, UNDEFINED_TEAM};
use rand::Rng;

/// Score every side starts from before the random draw and the ranking adjustment.
pub const BASE_SCORE: i32 = 80;
/// Exclusive upper bound of the per-side random draw, i.e. draws fall in `[0, 19]`.
pub const DRAW_RANGE: i32 = 20;
/// Tournament points for the winner and loser of a match.
pub const WIN_POINTS: u32 = 2;
pub const LOSS_POINTS: u32 = 1;

/// Source of the random component of a score. Called twice per match, once per side.
pub trait ScoreSource {
    /// A value in `[0, DRAW_RANGE)`.
    fn draw(&mut self) -> i32;
}

/// Closures act as scripted sources, which keeps tests deterministic.
impl<F: FnMut() -> i32> ScoreSource for F {
    fn draw(&mut self) -> i32 {
        self()
    }
}

/// Uniform draws from any `rand` generator.
#[derive(Clone, Debug)]
pub struct RandomScores<R> {
    rng: R,
}

impl<R: Rng> RandomScores<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> ScoreSource for RandomScores<R> {
    fn draw(&mut self) -> i32 {
        self.rng.gen_range(0..DRAW_RANGE)
    }
}

/// Simulates single matches from two team descriptors.
#[derive(Clone, Debug)]
pub struct MatchSimulator<S> {
    source: S,
}

impl<S: ScoreSource> MatchSimulator<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Simulate a match, failing with `InvalidInput` if either team is missing.
    ///
    /// `score_a = 80 + draw + (b.ranking - a.ranking)`, `score_b = 80 + draw - (b.ranking - a.ranking)`
    /// with independent draws, computed in `i64` and clamped to the `i32` range. Team A gets
    /// 2 points only on a strictly higher score; a tie gives team B the 2 points.
    pub fn try_simulate(
        &mut self,
        round: RoundType,
        team_a: Option<&Team>,
        team_b: Option<&Team>,
    ) -> Result<MatchResult, TournamentError> {
        let (a, b) = match (team_a, team_b) {
            (Some(a), Some(b)) => (a, b),
            _ => {
                return Err(TournamentError::InvalidInput {
                    detail: format!(
                        "{} vs {}: one or both teams are undefined",
                        side_name(team_a),
                        side_name(team_b)
                    ),
                })
            }
        };

        let rank_delta = i64::from(b.ranking) - i64::from(a.ranking);
        let score_a = clamp_score(i64::from(BASE_SCORE) + i64::from(self.source.draw()) + rank_delta);
        let score_b = clamp_score(i64::from(BASE_SCORE) + i64::from(self.source.draw()) - rank_delta);
        let points = if score_a > score_b {
            [WIN_POINTS, LOSS_POINTS]
        } else {
            [LOSS_POINTS, WIN_POINTS]
        };

        Ok(MatchResult {
            round,
            team_a: Some(a.id),
            team_b: Some(b.id),
            team_a_name: a.name.clone(),
            team_b_name: b.name.clone(),
            score_a,
            score_b,
            points,
        })
    }

    /// Like [`try_simulate`](Self::try_simulate), but a missing team degrades to a zero-score
    /// result with `[0, 0]` points instead of an error.
    pub fn simulate(
        &mut self,
        round: RoundType,
        team_a: Option<&Team>,
        team_b: Option<&Team>,
    ) -> MatchResult {
        self.try_simulate(round, team_a, team_b).unwrap_or_else(|e| {
            log::error!("{}", e);
            degenerate_result(round, team_a, team_b)
        })
    }
}

fn clamp_score(score: i64) -> i32 {
    score.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

fn side_name(team: Option<&Team>) -> &str {
    team.map(|t| t.name.as_str()).unwrap_or(UNDEFINED_TEAM)
}

/// Zero-score result for a match with a missing side.
pub fn degenerate_result(round: RoundType, team_a: Option<&Team>, team_b: Option<&Team>) -> MatchResult {
    MatchResult {
        round,
        team_a: team_a.map(|t| t.id),
        team_b: team_b.map(|t| t.id),
        team_a_name: side_name(team_a).to_string(),
        team_b_name: side_name(team_b).to_string(),
        score_a: 0,
        score_b: 0,
        points: [0, 0],
    }
}
