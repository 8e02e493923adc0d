//! Logging setup for services embedding this crate

use crate::config::ServiceConfig;
use crate::{Result, WalletInfoError};
use tracing_subscriber::EnvFilter;

/// Install a stderr `tracing` subscriber configured from `config`
///
/// `RUST_LOG` takes precedence over the configured directive. Calling this
/// more than once keeps the first subscriber.
pub fn init_tracing(config: &ServiceConfig) -> Result<()> {
    let filter = build_filter(config.log_directive())?;

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(config.debug)
        .with_writer(std::io::stderr)
        .try_init()
        .is_ok();

    if installed {
        tracing::debug!(directive = config.log_directive(), "tracing initialized");
    }
    Ok(())
}

fn build_filter(directive: &str) -> Result<EnvFilter> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }

    EnvFilter::try_new(directive)
        .map_err(|e| WalletInfoError::Logging(format!("invalid log filter {directive:?}: {e}")))
}
