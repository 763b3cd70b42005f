//! Tracing subscriber setup
//!
//! Logs always go to stderr: in `serve` mode stdout carries the protocol.

use tracing::debug;
use tracing_subscriber::{EnvFilter, Layer, Registry, fmt, layer::SubscriberExt, util::SubscriberInitExt};
use txm_core::{Error, Result};

/// Logging configuration for the `txm` binary
#[derive(Debug, Clone, PartialEq)]
pub struct LoggingConfig {
    /// Level used when no filter is configured
    pub level: String,
    /// Filter directive from `TXM_LOG`
    pub filter: Option<String>,
    pub verbose: bool,
}

impl LoggingConfig {
    /// Defaults for a subcommand: `info` while serving, `warn` otherwise
    pub fn for_command(serving: bool, verbose: bool, filter: Option<String>) -> Self {
        Self {
            level: if serving { "info" } else { "warn" }.to_string(),
            filter,
            verbose,
        }
    }

    /// The effective filter directive
    pub fn directive(&self) -> String {
        if self.verbose {
            return "debug".to_string();
        }
        self.filter.clone().unwrap_or_else(|| self.level.clone())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self::for_command(false, false, None)
    }
}

/// Install the global subscriber
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let directive = config.directive();
    let env_filter = EnvFilter::try_new(&directive).map_err(|e| {
        Error::Configuration(format!("Invalid log filter '{}': {}", directive, e))
    })?;

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .boxed();

    Registry::default()
        .with(env_filter)
        .with(console_layer)
        .try_init()
        .map_err(|e| Error::Configuration(format!("Logging already initialized: {}", e)))?;

    debug!(filter = %directive, "Logging initialized");
    Ok(())
}
