//! End-to-end runs, dataset loading and the text report.

use basketball_tournament_web::{
    default_tournament, load_groups_csv, load_groups_json, render_text, score_source,
    simulate_tournament, PotId, Stage, TeamEntry, Tournament, TournamentError, TournamentState,
};

fn groups_of_two(rankings: &[[i32; 2]]) -> Tournament {
    let mut t = Tournament::new();
    for (i, pair) in rankings.iter().enumerate() {
        let entries = pair
            .iter()
            .map(|r| TeamEntry::new(format!("R{r}"), *r))
            .collect();
        t.add_group(format!("G{i}"), entries).unwrap();
    }
    t
}

#[test]
fn four_teams_stop_at_seeding() {
    let mut t = groups_of_two(&[[1, 2], [3, 4]]);
    let report = simulate_tournament(&mut t, || 0).unwrap();

    assert_eq!(report.group_results.len(), 2);
    assert_eq!(report.standings.len(), 2);
    assert_eq!(report.halted_at, Some(Stage::Seeding));
    assert!(report.pots.is_none());
    assert!(report.knockout.is_empty());
    assert!(report.medals.is_none());
    assert_eq!(
        report.issues.last().unwrap().error,
        TournamentError::InsufficientTeams { needed: 8, found: 4 }
    );
    assert_eq!(t.state, TournamentState::Halted);
    assert!(t.last_report.is_some());
}

#[test]
fn eight_teams_play_the_full_bracket() {
    let mut t = groups_of_two(&[[1, 8], [2, 7], [3, 6], [4, 5]]);
    let report = simulate_tournament(&mut t, score_source(Some(2024))).unwrap();

    assert_eq!(report.halted_at, None);
    assert!(report.issues.is_empty());
    let pots = report.pots.as_ref().unwrap();
    for pot in PotId::ALL {
        assert_eq!(pots.get(pot).len(), 2);
    }
    let k = &report.knockout;
    assert_eq!(k.quarter_finals.len(), 4);
    assert_eq!(k.semi_finals.len(), 2);
    assert_eq!(k.bronze_match.len(), 1);
    assert_eq!(k.final_match.len(), 1);

    let medals = report.medals.unwrap();
    assert_ne!(medals.gold, medals.silver);
    assert_ne!(medals.gold, medals.bronze);
    assert_ne!(medals.silver, medals.bronze);
    assert_eq!(t.state, TournamentState::Completed);
}

#[test]
fn same_seed_reproduces_the_run() {
    let mut first = default_tournament().unwrap();
    let mut second = default_tournament().unwrap();
    let a = simulate_tournament(&mut first, score_source(Some(7))).unwrap();
    let b = simulate_tournament(&mut second, score_source(Some(7))).unwrap();

    assert_eq!(a.group_results, b.group_results);
    assert_eq!(a.knockout, b.knockout);
    assert_eq!(a.medals, b.medals);
}

#[test]
fn simulate_requires_setup_and_restart_allows_rerun() {
    let mut t = default_tournament().unwrap();
    simulate_tournament(&mut t, score_source(Some(1))).unwrap();
    assert_eq!(t.state, TournamentState::Completed);
    assert!(matches!(
        simulate_tournament(&mut t, score_source(Some(1))),
        Err(TournamentError::InvalidState)
    ));

    t.restart();
    assert_eq!(t.state, TournamentState::Setup);
    assert!(t.last_report.is_none());
    assert!(t.teams.iter().all(|team| team.record.points == 0));
    assert!(simulate_tournament(&mut t, score_source(Some(1))).is_ok());
}

#[test]
fn default_dataset_keeps_group_order() {
    let t = default_tournament().unwrap();
    let groups: Vec<_> = t.groups.iter().map(|g| g.name.as_str()).collect();
    assert_eq!(groups, vec!["A", "B", "C"]);
    assert_eq!(t.teams.len(), 12);
    assert_eq!(t.teams[0].name, "Canada");
    assert_eq!(t.teams[0].ranking, 7);
}

#[test]
fn malformed_group_is_skipped() {
    let json = r#"{
        "A": [{ "Team": "Spain", "FIBARanking": 2 }],
        "B": "not a list",
        "C": [{ "Team": "Serbia", "FIBARanking": 4 }]
    }"#;
    let (t, issues) = load_groups_json(json).unwrap();
    assert_eq!(t.groups.len(), 2);
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].stage, Stage::Dataset);
    assert_eq!(
        issues[0].error,
        TournamentError::MalformedGroup { group: "B".into() }
    );
}

#[test]
fn non_object_dataset_is_rejected() {
    assert!(matches!(
        load_groups_json("[1, 2, 3]"),
        Err(TournamentError::MalformedDataset { .. })
    ));
    assert!(matches!(
        load_groups_json("{ not json"),
        Err(TournamentError::MalformedDataset { .. })
    ));
}

#[test]
fn csv_dataset_groups_rows_by_label() {
    let csv = "group,team,fiba_ranking\nA,Spain,2\nB,France,9\nA,Greece,14\n";
    let (t, issues) = load_groups_csv(csv.as_bytes()).unwrap();
    assert!(issues.is_empty());
    assert_eq!(t.groups.len(), 2);
    assert_eq!(t.groups[0].name, "A");
    assert_eq!(t.groups[0].members.len(), 2);
    assert_eq!(t.team_name(t.groups[0].members[1]), "Greece");
}

#[test]
fn bad_group_names_are_skipped_next_to_valid_groups() {
    let json = r#"{
        "A": [{ "Team": "Spain", "FIBARanking": 2 }],
        "  ": [{ "Team": "Nowhere", "FIBARanking": 50 }],
        "A ": [{ "Team": "Greece", "FIBARanking": 14 }],
        "B": [
            { "Team": "France", "FIBARanking": 9 },
            { "Team": "france", "FIBARanking": 10 }
        ],
        "C": [{ "Team": "Serbia", "FIBARanking": 4 }]
    }"#;
    let (t, issues) = load_groups_json(json).unwrap();

    let groups: Vec<_> = t.groups.iter().map(|g| g.name.as_str()).collect();
    assert_eq!(groups, vec!["A", "C"]);
    assert_eq!(t.teams.len(), 2);
    assert!(issues.iter().all(|i| i.stage == Stage::Dataset));
    let errors: Vec<_> = issues.into_iter().map(|i| i.error).collect();
    assert_eq!(
        errors,
        vec![
            TournamentError::MalformedGroup { group: "".into() },
            TournamentError::DuplicateGroup { group: "A".into() },
            TournamentError::DuplicateTeamName {
                group: "B".into(),
                name: "france".into(),
            },
        ]
    );
}

#[test]
fn csv_dataset_skips_group_with_repeated_team() {
    let csv = "group,team,fiba_ranking\nA,Spain,2\nB,France,9\nB,France,9\nC,Serbia,4\n";
    let (t, issues) = load_groups_csv(csv.as_bytes()).unwrap();

    let groups: Vec<_> = t.groups.iter().map(|g| g.name.as_str()).collect();
    assert_eq!(groups, vec!["A", "C"]);
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].stage, Stage::Dataset);
    assert!(matches!(
        issues[0].error,
        TournamentError::DuplicateTeamName { .. }
    ));
}

#[test]
fn extreme_rankings_complete_the_run() {
    let mut t = groups_of_two(&[[1, 8], [2, 7], [3, 6], [4, 5]]);
    t.teams[0].ranking = i32::MAX;
    t.teams[1].ranking = -5;
    t.teams[2].ranking = i32::MIN;
    let report = simulate_tournament(&mut t, score_source(Some(3))).unwrap();

    assert_eq!(report.halted_at, None);
    assert!(report.issues.is_empty());
    assert!(report.medals.is_some());
    assert_eq!(t.state, TournamentState::Completed);
    let g0 = &report.standings[0].teams;
    assert!(g0.iter().any(|s| s.record.point_difference == i32::MAX));
}

#[test]
fn text_report_lists_medals() {
    let mut t = groups_of_two(&[[1, 8], [2, 7], [3, 6], [4, 5]]);
    let report = simulate_tournament(&mut t, || 0).unwrap();
    let text = render_text(&t, &report);

    assert!(text.contains("Group G0:"));
    assert!(text.contains("Pot D: R1, R2"));
    assert!(text.contains("QF 1: R3 - R6"));
    assert!(text.contains("Medals:\n  1. R1\n  2. R2\n  3. R3"));
}

#[test]
fn text_report_explains_a_halt() {
    let mut t = groups_of_two(&[[1, 2]]);
    let report = simulate_tournament(&mut t, || 0).unwrap();
    let text = render_text(&t, &report);
    assert!(text.contains("Stopped at Seeding"));
    assert!(!text.contains("Medals:"));
}
