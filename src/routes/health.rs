use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use crate::state::AppState;

const SERVICE_NAME: &str = "danci-study-plan";

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(root))
        .route("/info", get(info))
        .route("/live", get(live))
}

async fn root() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        timestamp: now_iso(),
    })
}

async fn info(State(state): State<AppState>) -> Json<HealthInfoResponse> {
    Json(HealthInfoResponse {
        service: SERVICE_NAME,
        version: app_version(),
        start_time: system_time_iso(state.started_at_system()),
        uptime: state.uptime_seconds(),
        max_plan_days: state.plan_limits().max_plan_days,
        max_total_words: state.plan_limits().max_total_words,
    })
}

async fn live(State(state): State<AppState>) -> Json<LivenessResponse> {
    Json(LivenessResponse {
        status: "healthy",
        timestamp: now_iso(),
        uptime: state.uptime_seconds(),
        version: app_version(),
    })
}

fn app_version() -> String {
    std::env::var("APP_VERSION")
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| env!("CARGO_PKG_VERSION").to_string())
}

fn system_time_iso(time: std::time::SystemTime) -> String {
    let datetime: chrono::DateTime<chrono::Utc> = time.into();
    datetime.to_rfc3339_opts(chrono::SecondsFormat::Millis, true)
}

fn now_iso() -> String {
    chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true)
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    timestamp: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct HealthInfoResponse {
    service: &'static str,
    version: String,
    start_time: String,
    uptime: u64,
    max_plan_days: u32,
    max_total_words: u64,
}

#[derive(Serialize)]
struct LivenessResponse {
    status: &'static str,
    timestamp: String,
    uptime: u64,
    version: String,
}
