//! Logging setup for the runner.

use anyhow::Result;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install the global subscriber. `RUST_LOG` wins over `verbose`.
pub fn init_telemetry(verbose: bool) -> Result<()> {
    let default_filter = if verbose {
        "debug,life_world=debug"
    } else {
        "info,life_world=info"
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_writer(std::io::stderr),
        )
        .try_init()?;

    debug!("Telemetry initialized");
    Ok(())
}
