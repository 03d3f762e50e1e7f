mod health;
mod plan;

use axum::response::{IntoResponse, Response};
use axum::Router;

use crate::response::AppError;
use crate::state::AppState;

pub fn router(state: AppState) -> Router {
    let healthcheck_endpoint = normalize_healthcheck_endpoint(&state.config().healthcheck_endpoint);

    let mut app = Router::new().nest("/api/study-plan", plan::router());

    let mut health_paths: Vec<String> = vec!["/health".to_string()];
    if healthcheck_endpoint != "/health" && healthcheck_endpoint != "/" {
        health_paths.push(healthcheck_endpoint);
    }
    if !health_paths.iter().any(|path| path == "/api/health") {
        health_paths.push("/api/health".to_string());
    }

    for path in &health_paths {
        app = app.nest(path.as_str(), health::router());
    }

    app.fallback(fallback_handler).with_state(state)
}

fn normalize_healthcheck_endpoint(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return "/health".to_string();
    }

    let with_slash = if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{trimmed}")
    };

    if with_slash != "/" {
        with_slash.trim_end_matches('/').to_string()
    } else {
        "/".to_string()
    }
}

async fn fallback_handler() -> Response {
    AppError::not_found("接口不存在").into_response()
}
