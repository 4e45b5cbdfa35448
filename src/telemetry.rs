use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::errors::{AppError, Result};

pub const LOG_ENV: &str = "UPTIME_LOG";

/// Installs the stderr log subscriber. stdout carries only the status line.
pub fn init() -> Result<()> {
    let env_filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init()
        .map_err(|e| AppError::telemetry(&format!("Logging init failed: {}", e)))?;

    Ok(())
}
