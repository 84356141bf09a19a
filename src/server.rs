use crate::stats::{self, Performer, Profile, Report};
use axum::{Json, Router, extract::State, routing::get};
use scoreboard_api::client::EspnApi;
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tracing::info;

/// Request-independent server state: just the upstream client. Everything
/// else is built per request and discarded with the response.
#[derive(Clone, Default)]
pub struct AppState {
    api: EspnApi,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }
}

pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/nba-stats", get(nba_stats))
        .route("/api/nfl-stats", get(nfl_stats))
        .route("/api/player-stats", get(player_stats))
        // Dashboard UI is plain static files next to the binary.
        .fallback_service(ServeDir::new("."))
        .with_state(state)
        .layer(cors)
}

/// Per-sport response envelope. Upstream failures are absorbed before they
/// reach this layer, so `success` stays true even when `data` is empty;
/// `error` remains in the schema because the dashboard checks for it.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SportEnvelope {
    pub success: bool,
    pub data: Vec<Performer>,
    pub source: &'static str,
    pub has_live_games: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SportEnvelope {
    fn from_report(report: Report) -> Self {
        Self {
            success: true,
            data: report.performers,
            source: "espn",
            has_live_games: report.has_live_games,
            error: None,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CombinedEnvelope {
    pub success: bool,
    pub data: Vec<Performer>,
    pub nba: SportEnvelope,
    pub nfl: SportEnvelope,
}

/// Merge the two per-sport envelopes; NBA records first, NFL appended.
fn combine(nba: SportEnvelope, nfl: SportEnvelope) -> CombinedEnvelope {
    let mut data = Vec::with_capacity(nba.data.len() + nfl.data.len());
    data.extend(nba.data.iter().cloned());
    data.extend(nfl.data.iter().cloned());
    CombinedEnvelope {
        success: true,
        data,
        nba,
        nfl,
    }
}

async fn nba_stats(State(state): State<AppState>) -> Json<SportEnvelope> {
    info!("fetching NBA stats");
    let report = stats::sport_report(&state.api, Profile::NBA).await;
    Json(SportEnvelope::from_report(report))
}

async fn nfl_stats(State(state): State<AppState>) -> Json<SportEnvelope> {
    info!("fetching NFL stats");
    let report = stats::sport_report(&state.api, Profile::NFL).await;
    Json(SportEnvelope::from_report(report))
}

/// In-process aggregation of the two sport endpoints; both pipelines run
/// concurrently against the upstream and are awaited together.
async fn player_stats(State(state): State<AppState>) -> Json<CombinedEnvelope> {
    info!("fetching combined player stats");
    let (nba, nfl) = tokio::join!(
        stats::sport_report(&state.api, Profile::NBA),
        stats::sport_report(&state.api, Profile::NFL),
    );
    Json(combine(
        SportEnvelope::from_report(nba),
        SportEnvelope::from_report(nfl),
    ))
}
