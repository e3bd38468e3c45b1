use anyhow::Result;
use domain::Record;
use tracing::info;

use social_graph_app::{config, logging, services::Services};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let config = config::Config::load()?;
    logging::init_logging(&config.logging);

    info!("Starting social graph bootstrap v{}", env!("CARGO_PKG_VERSION"));

    let db_config: persistence::db::DatabaseConfig = (&config.database).into();
    let pool = persistence::db::create_pool(&db_config).await?;

    if config.bootstrap.run_migrations {
        info!("Running database migrations...");
        persistence::db::run_migrations(&pool).await?;
        info!("Migrations completed");
    }

    let services = Services::new(pool.clone());
    let counts = services.table_counts().await?;
    for (table, rows) in counts.as_pairs() {
        persistence::metrics::record_table_rows(table, rows);
        info!(table, rows, "Table ready");
    }
    persistence::metrics::record_pool_metrics(&pool);

    info!(counts = %counts.to_record(), "Schema ready");
    pool.close().await;

    Ok(())
}
