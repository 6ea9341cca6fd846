//! Tracing setup for the CLI
//!
//! Diagnostics go to stderr so report output on stdout stays clean.
//!
//! Usage:
//!   acc-bball --debug ...                 # Debug logging
//!   RUST_LOG=acc_bball=info acc-bball ... # Fine-grained log control
//!
//! `--debug` is added on top of `RUST_LOG` as a default `debug` level, so
//! targeted directives from the environment still take precedence for
//! their own modules.

use anyhow::{anyhow, Result};
use tracing_subscriber::{filter::LevelFilter, EnvFilter};

/// Tracing configuration options
#[derive(Debug, Clone, Default)]
pub struct TracingConfig {
    /// Raise the default level to debug, even when RUST_LOG is set
    pub debug: bool,
}

/// Build the filter from `RUST_LOG` (if any) and the `--debug` flag.
fn build_filter(config: &TracingConfig, rust_log: Option<&str>) -> EnvFilter {
    let filter = rust_log
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new("warn"));

    if config.debug {
        filter.add_directive(LevelFilter::DEBUG.into())
    } else {
        filter
    }
}

/// Initialize console tracing
pub fn init_tracing(config: &TracingConfig) -> Result<()> {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let filter = build_filter(config, rust_log.as_deref());

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(config.debug)
        .compact()
        .try_init()
        .map_err(|err| anyhow!(err))
}
