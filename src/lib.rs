pub mod config;
pub mod logging;
pub mod planner;
pub mod response;
pub mod routes;
pub mod state;

use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::config::Config;
use crate::state::AppState;

pub fn create_app(config: Config) -> axum::Router {
    let state = AppState::new(config);

    routes::router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
