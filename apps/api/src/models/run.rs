use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::graph::GraphData;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunStatus {
    Running,
    Completed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepType {
    Graph,
    Links,
    Synthesis,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepStatus {
    InProgress,
    Done,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StepLog {
    pub step_id: String,
    pub step_type: StepType,
    pub message: String,
    pub details: Option<Value>,
    /// Source URLs consulted during the step.
    #[serde(default)]
    pub sources: Vec<String>,
    pub status: StepStatus,
    pub timestamp: DateTime<Utc>,
}

/// A single discovery run and the graph it produced.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunRecord {
    pub run_id: String,
    pub query: String,
    pub max_nodes: usize,
    pub status: RunStatus,
    pub steps: Vec<StepLog>,
    pub graph_data: Option<GraphData>,
    pub created_at: DateTime<Utc>,
}
