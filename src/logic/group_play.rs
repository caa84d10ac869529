//! Group stage: round-robin within each group and the standings order.

use crate::logic::simulator::{degenerate_result, MatchSimulator, ScoreSource};
use crate::models::{
    GroupResults, GroupStandings, MatchRecord, RoundType, Stage, StageIssue, Team, TeamId,
    TeamStanding, Tournament,
};
use std::cmp::Ordering;

/// Standings order: points desc, then point difference desc, then points scored desc.
pub fn compare_standing(a: &Team, b: &Team) -> Ordering {
    b.record
        .points
        .cmp(&a.record.points)
        .then(b.record.point_difference.cmp(&a.record.point_difference))
        .then(b.record.points_for.cmp(&a.record.points_for))
}

/// Sort group members in place by the standings order (stable). Unknown ids go last.
pub fn sort_standings(teams: &[Team], members: &mut [TeamId]) {
    members.sort_by(|a, b| match (teams.get(a.0), teams.get(b.0)) {
        (Some(a), Some(b)) => compare_standing(a, b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });
}

/// Current standings of a group, re-derived from the team records.
pub fn standings<'a>(tournament: &'a Tournament, group: &str) -> Option<Vec<&'a Team>> {
    let group = tournament.group(group)?;
    let mut members = group.members.clone();
    sort_standings(&tournament.teams, &mut members);
    Some(members.iter().filter_map(|id| tournament.team(*id)).collect())
}

/// Snapshot of every group's standings, in group order.
pub fn standings_snapshot(tournament: &Tournament) -> Vec<GroupStandings> {
    tournament
        .groups
        .iter()
        .map(|g| GroupStandings {
            group: g.name.clone(),
            teams: standings(tournament, &g.name)
                .unwrap_or_default()
                .into_iter()
                .map(TeamStanding::from)
                .collect(),
        })
        .collect()
}

/// Play the group stage.
///
/// For each group, in order:
/// 1. Reset every member's record.
/// 2. Play every pair `(i, j)` with `i < j` by list position once, team `i` as side A.
/// 3. Add scores and points to both teams' records.
/// 4. Sort the group's members into final standings.
///
/// A match with a missing team is recorded as a degenerate zero-score match and reported
/// as an issue; the rest of the group still plays.
pub fn run_group_stage<S: ScoreSource>(
    tournament: &mut Tournament,
    simulator: &mut MatchSimulator<S>,
) -> (Vec<GroupResults>, Vec<StageIssue>) {
    let mut results = Vec::with_capacity(tournament.groups.len());
    let mut issues = Vec::new();

    for gi in 0..tournament.groups.len() {
        let members = tournament.groups[gi].members.clone();
        let group_name = tournament.groups[gi].name.clone();
        log::debug!("Group {}: {} teams", group_name, members.len());

        for &id in &members {
            if let Some(team) = tournament.team_mut(id) {
                team.reset_record();
            }
        }

        let mut matches = Vec::with_capacity(members.len() * members.len().saturating_sub(1) / 2);
        for i in 0..members.len() {
            for j in (i + 1)..members.len() {
                let (a, b) = (members[i], members[j]);
                let result = match simulator.try_simulate(
                    RoundType::GroupPlay,
                    tournament.team(a),
                    tournament.team(b),
                ) {
                    Ok(result) => result,
                    Err(error) => {
                        log::error!("Group {}: {}", group_name, error);
                        issues.push(StageIssue {
                            stage: Stage::GroupStage,
                            error,
                        });
                        degenerate_result(RoundType::GroupPlay, tournament.team(a), tournament.team(b))
                    }
                };

                if let Some(team) = tournament.team_mut(a) {
                    team.record
                        .record_match(result.score_a, result.score_b, result.points[0], result.points[1]);
                }
                if let Some(team) = tournament.team_mut(b) {
                    team.record
                        .record_match(result.score_b, result.score_a, result.points[1], result.points[0]);
                }
                matches.push(MatchRecord::from(&result));
            }
        }

        let Tournament { teams, groups, .. } = &mut *tournament;
        sort_standings(teams, &mut groups[gi].members);

        results.push(GroupResults {
            group: group_name,
            matches,
        });
    }

    log::info!(
        "Group stage finished: {} matches in {} groups",
        results.iter().map(|g| g.matches.len()).sum::<usize>(),
        results.len()
    );
    (results, issues)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TeamEntry;

    #[test]
    fn sort_uses_difference_then_points_for() {
        let mut t = Tournament::new();
        t.add_group(
            "A",
            vec![
                TeamEntry::new("X", 1),
                TeamEntry::new("Y", 2),
                TeamEntry::new("Z", 3),
            ],
        )
        .unwrap();
        t.teams[0].record.record_match(100, 95, 2, 1);
        t.teams[1].record.record_match(110, 100, 2, 1);
        t.teams[2].record.record_match(90, 80, 2, 1);

        let order: Vec<_> = standings(&t, "A")
            .unwrap()
            .iter()
            .map(|team| team.name.clone())
            .collect();
        assert_eq!(order, vec!["Y", "Z", "X"]);
    }

    #[test]
    fn unknown_group_has_no_standings() {
        let t = Tournament::new();
        assert!(standings(&t, "Q").is_none());
    }

    #[test]
    fn missing_member_yields_degenerate_match_and_issue() {
        let mut t = Tournament::new();
        t.add_group("A", vec![TeamEntry::new("X", 1), TeamEntry::new("Y", 2)])
            .unwrap();
        t.groups[0].members.push(TeamId(99));

        let mut sim = MatchSimulator::new(|| 0);
        let (results, issues) = run_group_stage(&mut t, &mut sim);

        assert_eq!(results[0].matches.len(), 3);
        assert_eq!(issues.len(), 2);
        let degenerate: Vec<_> = results[0]
            .matches
            .iter()
            .filter(|m| m.points == [0, 0])
            .collect();
        assert_eq!(degenerate.len(), 2);
        assert_eq!(degenerate[0].score, "0:0");
        assert_eq!(*t.groups[0].members.last().unwrap(), TeamId(99));
    }
}
