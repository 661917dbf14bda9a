mod core;
mod features;
mod shared;

use crate::core::config::Config;
use crate::core::error::AppError;
use crate::features::seeding::SeedingService;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    // Requests are issued one at a time; a single-threaded runtime is enough
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    runtime.block_on(async_main())
}

async fn async_main() -> anyhow::Result<()> {
    // Load .env file BEFORE initializing logger so RUST_LOG is available
    let _ = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Missing API keys abort here, before any request is made
    let config = Config::from_env().map_err(AppError::Config)?;
    tracing::info!(
        "Configuration loaded: backend={}, location={}",
        config.backend.api_url,
        config.seeding.location
    );

    let mut seeding_service = SeedingService::from_config(&config);
    let report = seeding_service.run().await?;

    tracing::info!(
        "Seeding finished: found={}, created={}, failed={}, skipped_no_owners={}",
        report.found,
        report.created,
        report.failed,
        report.skipped_no_owners
    );

    Ok(())
}
