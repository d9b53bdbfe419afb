//! Logging setup for the authdesk binary.
//!
//! Report text goes to stdout; logs go to stderr and stay off unless
//! `-v` or `RUST_LOG` asks for them.

use anyhow::Result;
use clap_verbosity_flag::{LogLevel, Verbosity};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Install the tracing subscriber if logging was requested.
///
/// Priority: `-v/-q` flags, then `RUST_LOG`, then `default_filter`.
/// Returns whether a subscriber was installed.
pub fn init_cli_logging<L: LogLevel>(verbosity: &Verbosity<L>, default_filter: &str) -> Result<bool> {
    let filter = if let Some(level) = verbosity.log_level() {
        EnvFilter::try_new(level.to_string())?
    } else if std::env::var_os("RUST_LOG").is_some() {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter))
    } else {
        return Ok(false);
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .compact(),
        )
        .try_init()?;

    Ok(true)
}
