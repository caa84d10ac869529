//! Single binary web server: JSON API for simulating tournaments.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default.
//! Override with env: HOST (e.g. 0.0.0.0), PORT (e.g. 8080), TOURNAMENT_SEED (default seed for runs).

use actix_web::{
    get, post,
    web::{Data, Json, Path},
    App, HttpResponse, HttpServer, Responder,
};
use basketball_tournament_web::{
    default_tournament, load_groups_value, score_source, simulate_tournament, standings,
    TeamEntry, Tournament, TournamentError, TournamentId,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::RwLock;
use std::time::{Duration, Instant};

/// Per-tournament entry: tournament data + last activity time (for auto-cleanup).
struct TournamentEntry {
    tournament: Tournament,
    last_activity: Instant,
}

/// In-memory state: many tournaments by ID. Entries are removed after 12h inactivity.
type AppState = Data<RwLock<HashMap<TournamentId, TournamentEntry>>>;

/// Inactivity threshold: tournaments not accessed for this long are removed.
const INACTIVITY_TIMEOUT: Duration = Duration::from_secs(12 * 3600);

/// Seed used when a simulate request does not carry one.
struct DefaultSeed(Option<u64>);

#[derive(Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

#[derive(Deserialize)]
struct CreateTournamentBody {
    /// Dataset in the `{ "<group>": [{ "Team", "FIBARanking" }] }` shape.
    groups: Option<serde_json::Value>,
}

#[derive(Deserialize)]
struct AddGroupBody {
    name: String,
    teams: Vec<TeamEntry>,
}

#[derive(Deserialize)]
struct SimulateBody {
    seed: Option<u64>,
}

#[derive(Serialize)]
struct StandingRow<'a> {
    position: usize,
    name: &'a str,
    ranking: i32,
    points: u32,
    wins: u32,
    losses: u32,
    point_difference: i32,
}

/// Path segment: tournament id (e.g. /api/tournaments/{id})
#[derive(Deserialize)]
struct TournamentPath {
    id: TournamentId,
}

fn error_response(e: &TournamentError) -> HttpResponse {
    HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string(), "detail": e }))
}

/// Run `f` against a stored tournament, refreshing its activity time.
fn with_tournament<F>(state: &AppState, id: TournamentId, f: F) -> HttpResponse
where
    F: FnOnce(&mut Tournament) -> HttpResponse,
{
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match g.get_mut(&id) {
        Some(entry) => {
            entry.last_activity = Instant::now();
            f(&mut entry.tournament)
        }
        None => HttpResponse::NotFound().json(serde_json::json!({ "error": "No tournament" })),
    }
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "basketball-tournament-web",
    })
}

/// Create a tournament from a dataset, or from the bundled groups when none is given.
/// Malformed groups are skipped and listed under `skipped_groups`.
#[post("/api/tournaments")]
async fn api_create_tournament(state: AppState, body: Option<Json<CreateTournamentBody>>) -> HttpResponse {
    let loaded = match body.and_then(|b| b.into_inner().groups) {
        Some(groups) => load_groups_value(groups),
        None => default_tournament().map(|t| (t, Vec::new())),
    };
    let (tournament, issues) = match loaded {
        Ok(loaded) => loaded,
        Err(e) => return error_response(&e),
    };
    let id = tournament.id;
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let response = serde_json::json!({ "tournament": &tournament, "skipped_groups": issues });
    g.insert(
        id,
        TournamentEntry {
            tournament,
            last_activity: Instant::now(),
        },
    );
    log::info!("Created tournament {}", id);
    HttpResponse::Ok().json(response)
}

/// Get a tournament by id (404 if not found).
#[get("/api/tournaments/{id}")]
async fn api_get_tournament(state: AppState, path: Path<TournamentPath>) -> HttpResponse {
    with_tournament(&state, path.id, |t| HttpResponse::Ok().json(t))
}

/// Add a group of teams (tournament must be in Setup).
#[post("/api/tournaments/{id}/groups")]
async fn api_add_group(state: AppState, path: Path<TournamentPath>, body: Json<AddGroupBody>) -> HttpResponse {
    let AddGroupBody { name, teams } = body.into_inner();
    with_tournament(&state, path.id, move |t| match t.add_group(name, teams) {
        Ok(()) => HttpResponse::Ok().json(t),
        Err(e) => error_response(&e),
    })
}

/// Current standings of every group, re-derived from team records.
#[get("/api/tournaments/{id}/standings")]
async fn api_standings(state: AppState, path: Path<TournamentPath>) -> HttpResponse {
    with_tournament(&state, path.id, |t| {
        let mut groups = serde_json::Map::new();
        for group in &t.groups {
            let rows: Vec<StandingRow> = standings(t, &group.name)
                .unwrap_or_default()
                .into_iter()
                .enumerate()
                .map(|(i, team)| StandingRow {
                    position: i + 1,
                    name: &team.name,
                    ranking: team.ranking,
                    points: team.record.points,
                    wins: team.record.wins,
                    losses: team.record.losses,
                    point_difference: team.record.point_difference,
                })
                .collect();
            groups.insert(group.name.clone(), serde_json::json!(rows));
        }
        HttpResponse::Ok().json(groups)
    })
}

/// Simulate the whole tournament (Setup only). Returns the run report; a halted run is still 200.
/// A `seed` in the request body overrides the `TOURNAMENT_SEED` default.
#[post("/api/tournaments/{id}/simulate")]
async fn api_simulate(
    state: AppState,
    default_seed: Data<DefaultSeed>,
    path: Path<TournamentPath>,
    body: Option<Json<SimulateBody>>,
) -> HttpResponse {
    let seed = body.and_then(|b| b.seed).or(default_seed.0);
    with_tournament(&state, path.id, |t| match simulate_tournament(t, score_source(seed)) {
        Ok(report) => HttpResponse::Ok().json(report),
        Err(e) => error_response(&e),
    })
}

/// Restart tournament: back to Setup with the same groups and cleared records.
#[post("/api/tournaments/{id}/restart")]
async fn api_restart_tournament(state: AppState, path: Path<TournamentPath>) -> HttpResponse {
    with_tournament(&state, path.id, |t| {
        t.restart();
        HttpResponse::Ok().json(t)
    })
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let host = std::env::var("HOST").unwrap_or_else(|_| default_host());
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or_else(default_port);
    let seed: Option<u64> = std::env::var("TOURNAMENT_SEED")
        .ok()
        .and_then(|s| s.parse().ok());
    let bind = (host.as_str(), port);
    log::info!("Starting server at http://{}:{}", bind.0, bind.1);

    let state = Data::new(RwLock::new(HashMap::<TournamentId, TournamentEntry>::new()));
    let default_seed = Data::new(DefaultSeed(seed));

    // Background task: every 30 minutes, remove tournaments inactive for 12+ hours
    let state_cleanup = state.clone();
    actix_web::rt::spawn(async move {
        let mut interval = actix_web::rt::time::interval(Duration::from_secs(30 * 60));
        loop {
            interval.tick().await;
            let mut g = match state_cleanup.write() {
                Ok(guard) => guard,
                Err(_) => continue,
            };
            let before = g.len();
            g.retain(|_, entry| entry.last_activity.elapsed() < INACTIVITY_TIMEOUT);
            let removed = before - g.len();
            if removed > 0 {
                log::info!("Cleaned up {} inactive tournament(s) (no activity for 12h)", removed);
            }
        }
    });

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .app_data(default_seed.clone())
            .service(api_health)
            .service(api_create_tournament)
            .service(api_get_tournament)
            .service(api_add_group)
            .service(api_standings)
            .service(api_simulate)
            .service(api_restart_tournament)
    })
    .bind(bind)?
    .run()
    .await
}
