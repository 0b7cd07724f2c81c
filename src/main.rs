use std::sync::Arc;

use anyhow::Context;
use tracing::info;
use tracing_subscriber::EnvFilter;

use league_draft_backend::{
    app,
    config::Config,
    db,
    services::{
        auto_pick::BestAvailable,
        directory::LeagueDirectory,
        engine::{DraftEngine, EngineSettings},
        notifier::DraftHub,
        store::DraftStore,
    },
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env().context("Invalid configuration")?;

    let pool = db::connect(&config.database_url, config.db_max_connections)
        .await
        .context("Could not connect to SQLite")?;
    db::migrate(&pool).await.context("Could not apply schema")?;
    info!("Connected to sqlite database.");

    let hub = Arc::new(DraftHub::new(config.event_buffer));
    let directory = LeagueDirectory::new(pool.clone());
    let store = DraftStore::new(pool);
    let engine = Arc::new(DraftEngine::new(
        store,
        directory.clone(),
        hub.clone(),
        Arc::new(BestAvailable::new(directory)),
        EngineSettings {
            timer_tick: config.timer_tick,
        },
    ));

    let restored = engine
        .restore_timers()
        .await
        .context("Could not restore pick clocks")?;
    info!("Restored {} running drafts.", restored);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .with_context(|| format!("Could not bind {}", config.bind_addr))?;
    info!("Started server on {}.", config.bind_addr);

    axum::serve(listener, app(engine, hub)).await?;
    Ok(())
}
