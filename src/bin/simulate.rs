//! Run one tournament and print the results.
//! Run with: cargo run --bin simulate [groups.json | groups.csv]
//! Without a path the bundled groups are used. Set TOURNAMENT_SEED for a reproducible run.

use basketball_tournament_web::{
    default_tournament, load_groups_csv, load_groups_json, render_text, score_source,
    simulate_tournament, Tournament, TournamentError,
};
use std::fs;
use std::process::ExitCode;

fn load(path: Option<String>) -> Result<Tournament, TournamentError> {
    let Some(path) = path else {
        return default_tournament();
    };
    let io_error = |e: std::io::Error| TournamentError::MalformedDataset {
        detail: format!("{}: {}", path, e),
    };
    let (tournament, issues) = if path.ends_with(".csv") {
        let file = fs::File::open(&path).map_err(io_error)?;
        load_groups_csv(file)?
    } else {
        let json = fs::read_to_string(&path).map_err(io_error)?;
        load_groups_json(&json)?
    };
    for issue in issues {
        log::warn!("Skipped: {}", issue.error);
    }
    Ok(tournament)
}

fn main() -> ExitCode {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let seed: Option<u64> = std::env::var("TOURNAMENT_SEED")
        .ok()
        .and_then(|s| s.parse().ok());

    let mut tournament = match load(std::env::args().nth(1)) {
        Ok(t) => t,
        Err(e) => {
            log::error!("Could not load groups: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match simulate_tournament(&mut tournament, score_source(seed)) {
        Ok(report) => {
            print!("{}", render_text(&tournament, &report));
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("Simulation failed: {}", e);
            ExitCode::FAILURE
        }
    }
}
