//! Axum route handlers for the Graph API.

use axum::{extract::State, Json};
use serde::Deserialize;
use tracing::info;

use crate::errors::AppError;
use crate::extract::{AppJson, AppQuery};
use crate::graph::{assemble_graph, generate_mock_graph};
use crate::models::graph::{GraphData, GraphNode};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct LinkRequest {
    pub nodes: Vec<GraphNode>,
    pub max_nodes: Option<usize>,
}

#[derive(Debug, Deserialize)]
pub struct MockQuery {
    pub max_nodes: Option<usize>,
}

/// POST /api/v1/graph/links
///
/// Links caller-supplied entities and returns them with the root node and edge set.
pub async fn handle_build_links(
    State(state): State<AppState>,
    AppJson(request): AppJson<LinkRequest>,
) -> Result<Json<GraphData>, AppError> {
    let max_nodes = state.resolve_max_nodes(request.max_nodes)?;
    let mut sampler = state.sampler();

    let graph = assemble_graph(request.nodes, max_nodes, &mut sampler);
    info!(
        nodes = graph.nodes.len(),
        links = graph.links.len(),
        "Built graph links"
    );

    Ok(Json(graph))
}

/// GET /api/v1/graph/mock?max_nodes=N
pub async fn handle_mock_graph(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<MockQuery>,
) -> Result<Json<GraphData>, AppError> {
    let max_nodes = state.resolve_max_nodes(params.max_nodes)?;
    let mut sampler = state.sampler();
    Ok(Json(generate_mock_graph(max_nodes, &mut sampler)))
}
