use anyhow::{Context, Result, anyhow};
use tracing_subscriber::{EnvFilter, fmt};

use super::settings::Settings;

/// Installs the global fmt subscriber. `RUST_LOG` wins over `settings.log_level`.
pub fn init_logging(settings: &Settings) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&settings.log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
        // outbound client internals are noise at info
        .add_directive("hyper_util=warn".parse().context("invalid log directive")?)
        .add_directive("reqwest=warn".parse().context("invalid log directive")?);

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .compact()
        .try_init()
        .map_err(|e| anyhow!("failed to init logging: {e}"))?;

    Ok(())
}
