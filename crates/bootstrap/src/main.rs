//! Askboard schema bootstrap
//!
//! One-shot tool run before the web application starts:
//! - Loads configuration (config files + APP__ environment variables)
//! - Initializes logging
//! - Creates the schema if it does not exist yet
//! - Prepares the avatar media root
//! - Checks the database answers queries

use askboard_store::{
    config::{AppConfig, ObservabilityConfig},
    db::{schema, DbPool},
    metrics, Repository,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Load configuration
    dotenvy::dotenv().ok();
    let config = AppConfig::load()?;

    // 2. Setup logging
    init_tracing(&config.observability);
    info!("Starting Askboard bootstrap v{}", askboard_store::VERSION);

    metrics::register_metrics();

    // 3. Connect and create the schema
    let pool = DbPool::new(&config.database).await?;
    schema::create_schema(pool.write()).await?;

    // 4. Media root for avatar uploads
    tokio::fs::create_dir_all(&config.media.root).await?;
    info!(root = %config.media.root.display(), "Media root ready");

    // 5. Readiness
    let repo = Repository::new(pool).with_default_avatar(config.media.default_avatar.clone());
    repo.ping().await?;
    let hot_tags = repo.hot_tags().await?;
    info!(hot_tags = hot_tags.len(), "Store ready");

    Ok(())
}

fn init_tracing(config: &ObservabilityConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true);

    if config.json_logging {
        builder.json().init();
    } else {
        builder.init();
    }

    info!(service = %config.service_name, "Logging initialized");
}
