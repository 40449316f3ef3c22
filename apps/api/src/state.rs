use crate::config::Config;
use crate::errors::AppError;
use crate::graph::sampler::RngSampler;
use crate::runs::store::RunStore;
use rand::rngs::StdRng;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub runs: RunStore,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            runs: RunStore::default(),
        }
    }

    /// A fresh sampler for one request. Never shared between requests.
    pub fn sampler(&self) -> RngSampler<StdRng> {
        RngSampler::from_seed_option(self.config.graph_seed)
    }

    /// Resolves a requested node budget against the configured default and limit.
    pub fn resolve_max_nodes(&self, requested: Option<usize>) -> Result<usize, AppError> {
        let max_nodes = requested.unwrap_or(self.config.default_max_nodes);
        if !(1..=self.config.max_nodes_limit).contains(&max_nodes) {
            return Err(AppError::Validation(format!(
                "max_nodes must be between 1 and {} (got {max_nodes})",
                self.config.max_nodes_limit
            )));
        }
        Ok(max_nodes)
    }
}
