use anyhow::{bail, Context, Result};

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Node budget used when a request does not name one.
    pub default_max_nodes: usize,
    /// Upper bound accepted for any request's node budget.
    pub max_nodes_limit: usize,
    /// Fixed sampler seed for reproducible graphs. Unset means OS entropy per request.
    pub graph_seed: Option<u64>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let config = Config {
            port: parse_env("PORT", 8080)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            default_max_nodes: parse_env("DEFAULT_MAX_NODES", 10)?,
            max_nodes_limit: parse_env("MAX_NODES_LIMIT", 100)?,
            graph_seed: optional_env("GRAPH_SEED")?,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_nodes_limit == 0 {
            bail!("MAX_NODES_LIMIT must be at least 1");
        }
        if !(1..=self.max_nodes_limit).contains(&self.default_max_nodes) {
            bail!(
                "DEFAULT_MAX_NODES must be between 1 and {} (got {})",
                self.max_nodes_limit,
                self.default_max_nodes
            );
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            rust_log: "info".to_string(),
            default_max_nodes: 10,
            max_nodes_limit: 100,
            graph_seed: None,
        }
    }
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    Ok(optional_env(key)?.unwrap_or(default))
}

fn optional_env<T>(key: &str) -> Result<Option<T>>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .with_context(|| format!("Environment variable '{key}' has an invalid value: {raw}")),
        Err(_) => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_default_budget_above_limit_rejected() {
        let config = Config {
            default_max_nodes: 200,
            ..Config::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("DEFAULT_MAX_NODES"));
    }

    #[test]
    fn test_zero_limit_rejected() {
        let config = Config {
            max_nodes_limit: 0,
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }
}
