//! Graph mirror builder - batch entry point
//!
//! Snapshots the relational catalog and replays it into the graph store.
//! Safe to run any number of times; every write is an idempotent MERGE.
//! Assumes no concurrent writers to the relational store while it runs.

use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use biblios_server::{
    config::AppConfig,
    graph::{mirror, CatalogSnapshot, GraphClient},
    repository::Repository,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load().expect("Failed to load configuration");

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("biblios_server={}", config.logging.level).into());

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    let pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .min_connections(config.database.min_connections)
        .connect(&config.database.url)
        .await
        .expect("Failed to connect to database");

    tracing::info!("Connected to database");

    let graph_client = GraphClient::connect(&config.graph)
        .await
        .expect("Failed to connect to graph store");

    tracing::info!("Connected to graph store");

    let repository = Repository::new(pool);
    let snapshot = CatalogSnapshot::load(&repository).await?;

    let report = mirror::build_mirror(&graph_client, &snapshot).await?;

    tracing::info!(
        nodes = report.nodes,
        relationships = report.relationships,
        skipped = report.skipped.len(),
        "Mirror build finished"
    );

    if !report.skipped.is_empty() {
        tracing::warn!(
            "{} row(s) had dangling references; see warnings above",
            report.skipped.len()
        );
    }

    Ok(())
}
