//! Seeds the development database.
//!
//! Run with:
//! ```
//! cargo run -p seed-data --bin seed
//! ```
//!
//! `CONFIG_PATH` points at an optional JSON config file. `SEED_UNITS` limits
//! the run to a comma-separated subset of units, e.g.
//! `SEED_UNITS=categories,products`.

use std::path::PathBuf;

use tracing_subscriber::EnvFilter;

use seed_data::config::SeedConfig;
use seed_data::runner::SeedRunner;
use storefront::config::AppConfig;
use storefront::database;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config_path = std::env::var("CONFIG_PATH").ok().map(PathBuf::from);
    let config = AppConfig::load(config_path.as_deref())?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.logging.level.clone())),
        )
        .init();

    let pool = database::connect_from_env().await?;

    let runner = SeedRunner::new(pool.clone(), SeedConfig::default());
    tracing::info!("Registered seed units: {:?}", runner.unit_names());

    let outcome = match std::env::var("SEED_UNITS") {
        Ok(list) if !list.trim().is_empty() => {
            let names: Vec<String> = list.split(',').map(|name| name.trim().to_string()).collect();
            runner.run_named(&names).await
        }
        _ => runner.run_all().await,
    };

    database::close(&pool).await;
    outcome?;

    tracing::info!("Seed completed!");
    Ok(())
}
