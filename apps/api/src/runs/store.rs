use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::Utc;
use serde_json::Value;
use uuid::Uuid;

use crate::models::graph::GraphData;
use crate::models::run::{RunRecord, RunStatus, StepLog, StepStatus, StepType};

#[derive(Debug, Default)]
struct Inner {
    records: HashMap<String, RunRecord>,
    /// Run ids in creation order.
    order: Vec<String>,
}

/// Process-lifetime store of discovery runs, shared by all handlers.
///
/// Updates addressed to an unknown run id are ignored.
#[derive(Debug, Clone, Default)]
pub struct RunStore {
    inner: Arc<RwLock<Inner>>,
}

impl RunStore {
    fn read(&self) -> RwLockReadGuard<'_, Inner> {
        self.inner.read().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, Inner> {
        self.inner.write().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Registers a new running run and returns its id.
    pub fn create_run(&self, query: &str, max_nodes: usize) -> String {
        let run_id = Uuid::new_v4().to_string();
        let record = RunRecord {
            run_id: run_id.clone(),
            query: query.to_string(),
            max_nodes,
            status: RunStatus::Running,
            steps: vec![],
            graph_data: None,
            created_at: Utc::now(),
        };

        let mut inner = self.write();
        inner.records.insert(run_id.clone(), record);
        inner.order.push(run_id.clone());
        run_id
    }

    pub fn get_run(&self, run_id: &str) -> Option<RunRecord> {
        self.read().records.get(run_id).cloned()
    }

    pub fn update_status(&self, run_id: &str, status: RunStatus) {
        if let Some(record) = self.write().records.get_mut(run_id) {
            record.status = status;
        }
    }

    pub fn add_step(
        &self,
        run_id: &str,
        step_type: StepType,
        message: impl Into<String>,
        details: Option<Value>,
        sources: Vec<String>,
        status: StepStatus,
    ) {
        if let Some(record) = self.write().records.get_mut(run_id) {
            let step_id = format!("step-{}", record.steps.len() + 1);
            record.steps.push(StepLog {
                step_id,
                step_type,
                message: message.into(),
                details,
                sources,
                status,
                timestamp: Utc::now(),
            });
        }
    }

    pub fn set_graph(&self, run_id: &str, graph: GraphData) {
        if let Some(record) = self.write().records.get_mut(run_id) {
            record.graph_data = Some(graph);
        }
    }

    /// All runs, most recent first.
    pub fn list_runs(&self) -> Vec<RunRecord> {
        let inner = self.read();
        inner
            .order
            .iter()
            .rev()
            .filter_map(|id| inner.records.get(id).cloned())
            .collect()
    }
}
