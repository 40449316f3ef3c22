//! Axum route handlers for the Runs API.

use std::collections::HashSet;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::info;

use crate::errors::AppError;
use crate::extract::AppJson;
use crate::graph::{assemble_graph, generate_mock_graph, Sampler};
use crate::models::graph::GraphNode;
use crate::models::run::{RunRecord, RunStatus, StepStatus, StepType};
use crate::runs::store::RunStore;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct RunRequest {
    pub query: String,
    pub max_nodes: Option<usize>,
    /// Pre-extracted entities. Without them the run falls back to a mock graph.
    pub nodes: Option<Vec<GraphNode>>,
}

#[derive(Debug, Serialize)]
pub struct RunStartedResponse {
    pub run_id: String,
    pub status: RunStatus,
}

#[derive(Debug, Serialize)]
pub struct RunSummary {
    pub id: String,
    pub query: String,
    pub has_graph: bool,
}

#[derive(Debug, Serialize)]
pub struct RunListResponse {
    pub runs: Vec<RunSummary>,
}

// ────────────────────────────────────────────────────────────────────────────
// Run execution
// ────────────────────────────────────────────────────────────────────────────

/// Distinct source URLs across `nodes`, in first-seen order.
fn collect_sources(nodes: &[GraphNode]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut sources = Vec::new();
    for url in nodes.iter().flat_map(|n| &n.sources) {
        if seen.insert(url.as_str()) {
            sources.push(url.clone());
        }
    }
    sources
}

/// Builds the graph for `run_id`, logging each stage to the run's step list.
pub fn execute_run<S: Sampler>(
    store: &RunStore,
    run_id: &str,
    max_nodes: usize,
    nodes: Option<Vec<GraphNode>>,
    sampler: &mut S,
) {
    store.add_step(
        run_id,
        StepType::Graph,
        "Building relationship graph",
        Some(json!({ "max_nodes": max_nodes })),
        vec![],
        StepStatus::InProgress,
    );

    let graph = match nodes {
        Some(nodes) => {
            let entity_count = nodes.len();
            let sources = collect_sources(&nodes);
            let graph = assemble_graph(nodes, max_nodes, sampler);
            store.add_step(
                run_id,
                StepType::Links,
                format!(
                    "Linked {entity_count} entities with {} edges",
                    graph.links.len()
                ),
                Some(json!({ "entities": entity_count, "links": graph.links.len() })),
                sources,
                StepStatus::Done,
            );
            graph
        }
        None => {
            let graph = generate_mock_graph(max_nodes, sampler);
            store.add_step(
                run_id,
                StepType::Synthesis,
                format!("Synthesized mock graph with {} nodes", graph.nodes.len()),
                Some(json!({ "nodes": graph.nodes.len(), "links": graph.links.len() })),
                vec![],
                StepStatus::Done,
            );
            graph
        }
    };

    store.set_graph(run_id, graph);
    store.update_status(run_id, RunStatus::Completed);
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/runs
pub async fn handle_start_run(
    State(state): State<AppState>,
    AppJson(request): AppJson<RunRequest>,
) -> Result<(StatusCode, Json<RunStartedResponse>), AppError> {
    if request.query.trim().is_empty() {
        return Err(AppError::Validation("query cannot be empty".to_string()));
    }
    let max_nodes = state.resolve_max_nodes(request.max_nodes)?;

    let run_id = state.runs.create_run(&request.query, max_nodes);
    info!(%run_id, max_nodes, "Run started");

    let mut sampler = state.sampler();
    execute_run(&state.runs, &run_id, max_nodes, request.nodes, &mut sampler);
    info!(%run_id, "Run completed");

    Ok((
        StatusCode::CREATED,
        Json(RunStartedResponse {
            run_id,
            status: RunStatus::Completed,
        }),
    ))
}

/// GET /api/v1/runs
///
/// Runs that hold a graph, most recent first.
pub async fn handle_list_runs(State(state): State<AppState>) -> Json<RunListResponse> {
    let runs = state
        .runs
        .list_runs()
        .into_iter()
        .filter(|run| run.graph_data.is_some())
        .map(|run| RunSummary {
            id: run.run_id,
            query: run.query,
            has_graph: true,
        })
        .collect();

    Json(RunListResponse { runs })
}

/// GET /api/v1/runs/:id
pub async fn handle_get_run(
    State(state): State<AppState>,
    Path(run_id): Path<String>,
) -> Result<Json<RunRecord>, AppError> {
    state
        .runs
        .get_run(&run_id)
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Run {run_id} not found")))
}
