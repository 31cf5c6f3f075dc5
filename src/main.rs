//! Pokédex server entry point.

use anyhow::Result;
use clap::Parser;

use pokedex::application;
use pokedex::cli::Cli;
use pokedex::infrastructure::config::ConfigLoader;
use pokedex::infrastructure::logging::{LogConfig, LoggerImpl};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = ConfigLoader::load_with_overrides(cli.config.as_deref(), |config| {
        cli.apply_to(config);
    })?;

    let _logger = LoggerImpl::init(&LogConfig::try_from(&config.logging)?)?;
    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        address = %config.server.address,
        cache_enabled = config.cache.enabled,
        "starting pokedex"
    );

    application::run(config).await
}
