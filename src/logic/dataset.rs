//! Loading groups of teams from JSON or CSV datasets.

use crate::models::{Stage, StageIssue, TeamEntry, Tournament, TournamentError};
use serde::Deserialize;
use std::io::Read;

/// Three groups of four national teams, used when no dataset is supplied.
pub const DEFAULT_GROUPS_JSON: &str = include_str!("../../data/groups.json");

/// Build a Setup tournament from a JSON dataset: `{ "<group>": [{ "Team", "FIBARanking" }] }`.
///
/// Groups keep the order they are written in. A group whose value is not a list of team
/// entries is skipped and reported as `MalformedGroup`, as is a blank group name. Repeated
/// group labels and repeated team names inside a group are skipped the same way; the other
/// groups still load.
pub fn load_groups_json(json: &str) -> Result<(Tournament, Vec<StageIssue>), TournamentError> {
    let value: serde_json::Value =
        serde_json::from_str(json).map_err(|e| TournamentError::MalformedDataset {
            detail: e.to_string(),
        })?;
    load_groups_value(value)
}

/// Same as [`load_groups_json`] for an already parsed document.
pub fn load_groups_value(
    value: serde_json::Value,
) -> Result<(Tournament, Vec<StageIssue>), TournamentError> {
    let groups = match value {
        serde_json::Value::Object(map) => map,
        other => {
            return Err(TournamentError::MalformedDataset {
                detail: format!("expected an object of groups, got {}", json_kind(&other)),
            })
        }
    };

    let mut tournament = Tournament::new();
    let mut issues = Vec::new();
    for (name, members) in groups {
        let entries: Vec<TeamEntry> = match serde_json::from_value(members) {
            Ok(entries) => entries,
            Err(e) => {
                log::error!("Group {} is not a list of teams: {}", name, e);
                issues.push(StageIssue {
                    stage: Stage::Dataset,
                    error: TournamentError::MalformedGroup { group: name },
                });
                continue;
            }
        };
        add_or_report(&mut tournament, &mut issues, name, entries);
    }
    log::info!(
        "Loaded {} teams in {} groups",
        tournament.teams.len(),
        tournament.groups.len()
    );
    Ok((tournament, issues))
}

/// Add one group, or log and record why it was skipped.
fn add_or_report(
    tournament: &mut Tournament,
    issues: &mut Vec<StageIssue>,
    name: String,
    entries: Vec<TeamEntry>,
) {
    if let Err(error) = tournament.add_group(name, entries) {
        log::error!("Skipping group: {}", error);
        issues.push(StageIssue {
            stage: Stage::Dataset,
            error,
        });
    }
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}

#[derive(Deserialize)]
struct CsvRow {
    group: String,
    team: String,
    fiba_ranking: i32,
}

/// Build a Setup tournament from CSV with a `group,team,fiba_ranking` header.
///
/// Groups appear in order of their first row; rows of one group need not be adjacent.
/// A row that fails to parse rejects the whole file. Group faults are skipped and reported
/// as in [`load_groups_json`].
pub fn load_groups_csv<R: Read>(
    reader: R,
) -> Result<(Tournament, Vec<StageIssue>), TournamentError> {
    let mut grouped: Vec<(String, Vec<TeamEntry>)> = Vec::new();
    let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    for row in rdr.deserialize::<CsvRow>() {
        let row = row.map_err(|e| TournamentError::MalformedDataset {
            detail: e.to_string(),
        })?;
        let entry = TeamEntry::new(row.team, row.fiba_ranking);
        match grouped.iter_mut().find(|(g, _)| *g == row.group) {
            Some((_, entries)) => entries.push(entry),
            None => grouped.push((row.group, vec![entry])),
        }
    }

    let mut tournament = Tournament::new();
    let mut issues = Vec::new();
    for (name, entries) in grouped {
        add_or_report(&mut tournament, &mut issues, name, entries);
    }
    Ok((tournament, issues))
}

/// The bundled dataset as a Setup tournament.
pub fn default_tournament() -> Result<Tournament, TournamentError> {
    load_groups_json(DEFAULT_GROUPS_JSON).map(|(t, _)| t)
}
