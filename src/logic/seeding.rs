//! Seeding: rank every group-stage team and split the top eight into pots.

use crate::models::{GroupResults, PotId, Pots, Team, TeamId, Tournament, TournamentError, POT_SIZE};
use std::cmp::Ordering;

/// Teams that qualify for the knockout stage.
pub const QUALIFIERS: usize = PotId::ALL.len() * POT_SIZE;

/// Seeding order: points desc, then ranking asc (stronger team first).
pub fn compare_seed(a: &Team, b: &Team) -> Ordering {
    b.record
        .points
        .cmp(&a.record.points)
        .then(a.ranking.cmp(&b.ranking))
}

/// Distinct teams that played in the group stage, in first-appearance order.
///
/// Teams are resolved by the ids carried in the match records, so a name shared across
/// groups never resolves to the wrong team.
pub fn collect_teams<'a>(tournament: &'a Tournament, group_results: &[GroupResults]) -> Vec<&'a Team> {
    let mut seen: Vec<TeamId> = Vec::new();
    for group in group_results {
        for m in &group.matches {
            for id in [m.team_a, m.team_b].into_iter().flatten() {
                if !seen.contains(&id) {
                    seen.push(id);
                }
            }
        }
    }
    seen.into_iter().filter_map(|id| tournament.team(id)).collect()
}

/// Build pots D, E, F, G from the group results.
///
/// Positions 0-1 of the overall seeding go to pot D, 2-3 to E, 4-5 to F, 6-7 to G.
/// Fails with `InsufficientTeams` when fewer than eight teams took part.
pub fn build_pots(tournament: &Tournament, group_results: &[GroupResults]) -> Result<Pots, TournamentError> {
    let mut ranked = collect_teams(tournament, group_results);
    if ranked.len() < QUALIFIERS {
        return Err(TournamentError::InsufficientTeams {
            needed: QUALIFIERS,
            found: ranked.len(),
        });
    }
    ranked.sort_by(|a, b| compare_seed(a, b));

    let mut pots = Pots::default();
    for (pot, chunk) in PotId::ALL.iter().zip(ranked[..QUALIFIERS].chunks_exact(POT_SIZE)) {
        pots.insert(*pot, chunk.iter().map(|t| t.id).collect());
    }
    log::info!(
        "Seeded {} of {} teams into {} pots",
        QUALIFIERS,
        ranked.len(),
        PotId::ALL.len()
    );
    Ok(pots)
}
