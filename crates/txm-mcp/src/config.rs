//! Server configuration

use serde::{Deserialize, Serialize};
use std::env;
use txm_core::{Error, Result};

pub const DEFAULT_SERVER_NAME: &str = "text-master-mcp";

/// Configuration for the MCP server
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    pub name: String,
    pub version: String,
    /// Fixed seed for the text generator; entropy when unset
    pub seed: Option<u64>,
    /// Log filter directive from `TXM_LOG`
    pub log_filter: Option<String>,
}

impl ServerConfig {
    /// Create configuration from environment variables
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Create configuration from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let name = lookup("TXM_SERVER_NAME")
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_SERVER_NAME.to_string());

        let seed = match lookup("TXM_SEED") {
            Some(raw) if !raw.trim().is_empty() => {
                Some(raw.trim().parse::<u64>().map_err(|_| {
                    Error::Configuration(format!(
                        "TXM_SEED must be an unsigned integer, got '{}'",
                        raw
                    ))
                })?)
            }
            _ => None,
        };

        let log_filter = lookup("TXM_LOG").filter(|filter| !filter.trim().is_empty());

        Ok(Self {
            name,
            version: env!("CARGO_PKG_VERSION").to_string(),
            seed,
            log_filter,
        })
    }

    /// Override the generator seed
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        if seed.is_some() {
            self.seed = seed;
        }
        self
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_SERVER_NAME.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            seed: None,
            log_filter: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ServerConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.name, "text-master-mcp");
        assert_eq!(config.seed, None);
        assert_eq!(config.log_filter, None);
        assert_eq!(config, ServerConfig::default());
    }

    #[test]
    fn test_reads_variables() {
        let config = ServerConfig::from_lookup(lookup(&[
            ("TXM_SERVER_NAME", "texty"),
            ("TXM_SEED", " 42 "),
            ("TXM_LOG", "debug"),
        ]))
        .unwrap();
        assert_eq!(config.name, "texty");
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.log_filter.as_deref(), Some("debug"));
    }

    #[test]
    fn test_invalid_seed() {
        let err = ServerConfig::from_lookup(lookup(&[("TXM_SEED", "abc")])).unwrap_err();
        assert!(matches!(err, Error::Configuration(_)));
        assert!(err.to_string().contains("'abc'"));
    }

    #[test]
    fn test_seed_override() {
        let config = ServerConfig::default().with_seed(Some(7));
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.with_seed(None).seed, Some(7));
    }
}
