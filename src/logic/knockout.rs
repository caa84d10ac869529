//! Knockout stage: quarter-finals, semi-finals, bronze match and final.

use crate::logic::simulator::{degenerate_result, MatchSimulator, ScoreSource};
use crate::models::{
    KnockoutResults, MatchResult, Medals, PotId, Pots, RoundType, Stage, StageIssue, TeamId,
    Tournament, TournamentError, POT_SIZE,
};

/// Quarter-final draw as `(pot, index)` pairs, in bracket-slot order.
///
/// Slots 0 and 1 meet in semi-final 1, slots 2 and 3 in semi-final 2.
pub const QUARTER_FINAL_DRAW: [((PotId, usize), (PotId, usize)); 4] = [
    ((PotId::E, 0), (PotId::F, 1)),
    ((PotId::D, 0), (PotId::G, 1)),
    ((PotId::D, 1), (PotId::G, 0)),
    ((PotId::E, 1), (PotId::F, 0)),
];

/// Check every pot can fill its bracket slots.
fn check_pots(pots: &Pots) -> Result<(), TournamentError> {
    for pot in PotId::ALL {
        let found = pots.get(pot).len();
        if found < POT_SIZE {
            log::error!("Pot {} has {} team(s), the bracket needs {}", pot, found, POT_SIZE);
            return Err(TournamentError::InsufficientTeams {
                needed: POT_SIZE,
                found,
            });
        }
    }
    Ok(())
}

/// Play one bracket match and return it with its (winner, loser).
///
/// A missing side degrades to a zero-score match, reported as an issue; the handles that
/// `winner()`/`loser()` give for it move on to the next round.
fn play<S: ScoreSource>(
    tournament: &Tournament,
    simulator: &mut MatchSimulator<S>,
    issues: &mut Vec<StageIssue>,
    round: RoundType,
    a: Option<TeamId>,
    b: Option<TeamId>,
) -> (MatchResult, Option<TeamId>, Option<TeamId>) {
    let team_a = a.and_then(|id| tournament.team(id));
    let team_b = b.and_then(|id| tournament.team(id));
    let result = match simulator.try_simulate(round, team_a, team_b) {
        Ok(result) => result,
        Err(error) => {
            log::error!("{:?}: {}", round, error);
            issues.push(StageIssue {
                stage: Stage::Knockout,
                error,
            });
            degenerate_result(round, team_a, team_b)
        }
    };
    let (winner, loser) = (result.winner(), result.loser());
    log::debug!("{:?} {} - {} ({})", round, result.team_a_name, result.team_b_name, result.score_line());
    (result, winner, loser)
}

/// Play the bracket from the pots.
///
/// Winners and losers are carried forward as team ids taken from each match result,
/// never looked up again by name. Fails with `InsufficientTeams` if a pot has fewer than
/// two teams; the caller then keeps an empty `KnockoutResults`. Matches with a missing
/// team are played as zero-score matches and listed in the returned issues.
pub fn run_knockout_stage<S: ScoreSource>(
    tournament: &Tournament,
    pots: &Pots,
    simulator: &mut MatchSimulator<S>,
) -> Result<(KnockoutResults, Vec<StageIssue>), TournamentError> {
    check_pots(pots)?;
    let mut results = KnockoutResults::default();
    let mut issues = Vec::new();

    let mut qf_winners = Vec::with_capacity(QUARTER_FINAL_DRAW.len());
    for ((pot_a, i), (pot_b, j)) in QUARTER_FINAL_DRAW {
        let (m, winner, _) = play(
            tournament,
            simulator,
            &mut issues,
            RoundType::QuarterFinals,
            Some(pots.get(pot_a)[i]),
            Some(pots.get(pot_b)[j]),
        );
        results.quarter_finals.push(m);
        qf_winners.push(winner);
    }

    let mut sf_winners = Vec::with_capacity(2);
    let mut sf_losers = Vec::with_capacity(2);
    for pair in qf_winners.chunks_exact(2) {
        let (m, winner, loser) =
            play(tournament, simulator, &mut issues, RoundType::SemiFinals, pair[0], pair[1]);
        results.semi_finals.push(m);
        sf_winners.push(winner);
        sf_losers.push(loser);
    }

    let (bronze, _, _) = play(
        tournament,
        simulator,
        &mut issues,
        RoundType::BronzeMatch,
        sf_losers[0],
        sf_losers[1],
    );
    results.bronze_match.push(bronze);
    let (final_match, _, _) = play(
        tournament,
        simulator,
        &mut issues,
        RoundType::Final,
        sf_winners[0],
        sf_winners[1],
    );
    results.final_match.push(final_match);

    log::info!("Knockout stage finished with {} issue(s)", issues.len());
    Ok((results, issues))
}

/// Medal table from the final and bronze match, by raw score (team B takes a tie).
/// `None` when a medal would go to a missing team.
pub fn medals(results: &KnockoutResults) -> Option<Medals> {
    let final_match = results.final_match.first()?;
    let bronze_match = results.bronze_match.first()?;
    Some(Medals {
        gold: final_match.winner()?,
        silver: final_match.loser()?,
        bronze: bronze_match.winner()?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draw_uses_every_pot_slot_once() {
        let mut slots: Vec<_> = QUARTER_FINAL_DRAW
            .iter()
            .flat_map(|(a, b)| [*a, *b])
            .collect();
        slots.sort();
        slots.dedup();
        assert_eq!(slots.len(), 8);
    }

    #[test]
    fn short_pot_fails_before_any_match() {
        let t = Tournament::new();
        let mut pots = Pots::default();
        for pot in PotId::ALL {
            pots.insert(pot, vec![TeamId(0), TeamId(1)]);
        }
        pots.insert(PotId::F, vec![TeamId(0)]);
        let mut sim = MatchSimulator::new(|| 0);
        assert_eq!(
            run_knockout_stage(&t, &pots, &mut sim),
            Err(TournamentError::InsufficientTeams { needed: 2, found: 1 })
        );
    }

    #[test]
    fn missing_team_keeps_the_bracket_going() {
        let mut t = Tournament::new();
        let entries = (0..7)
            .map(|i| crate::models::TeamEntry::new(format!("E{i}"), i as i32 + 1))
            .collect();
        t.add_group("A", entries).unwrap();
        let mut pots = Pots::default();
        for (k, pot) in PotId::ALL.iter().enumerate() {
            pots.insert(*pot, vec![TeamId(2 * k), TeamId(2 * k + 1)]);
        }
        let mut sim = MatchSimulator::new(|| 0);
        let (k, issues) = run_knockout_stage(&t, &pots, &mut sim).unwrap();

        assert_eq!(k.quarter_finals.len(), 4);
        assert_eq!(k.semi_finals.len(), 2);
        assert_eq!(k.bronze_match.len(), 1);
        assert_eq!(k.final_match.len(), 1);

        // QF 1 (E2 vs E5) is played normally; QF 2 meets the missing G[1].
        assert_eq!(k.quarter_finals[0].score_line(), "83:77");
        assert!(k.quarter_finals[1].is_degenerate());
        assert_eq!(k.quarter_finals[1].team_b_name, crate::models::UNDEFINED_TEAM);

        // QF 2, semi-final 1 and the final each had a missing side.
        assert_eq!(issues.len(), 3);
        assert!(issues.iter().all(|i| i.stage == Stage::Knockout));
        assert_eq!(k.bronze_match[0].winner(), Some(TeamId(2)));
        assert_eq!(k.final_match[0].winner(), Some(TeamId(1)));
        assert_eq!(medals(&k), None);
    }

    #[test]
    fn no_medals_without_final() {
        assert_eq!(medals(&KnockoutResults::default()), None);
    }
}
