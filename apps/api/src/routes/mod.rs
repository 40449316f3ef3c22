pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::graph::handlers as graph;
use crate::runs::handlers as runs;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Graph API
        .route("/api/v1/graph/links", post(graph::handle_build_links))
        .route("/api/v1/graph/mock", get(graph::handle_mock_graph))
        // Runs API
        .route(
            "/api/v1/runs",
            get(runs::handle_list_runs).post(runs::handle_start_run),
        )
        .route("/api/v1/runs/:id", get(runs::handle_get_run))
        .with_state(state)
}
