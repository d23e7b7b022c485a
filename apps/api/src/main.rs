mod access;
mod assistant;
mod candidates;
mod companies;
mod config;
mod db;
mod errors;
mod jobs;
mod models;
mod pipeline;
mod routes;
mod state;
mod validation;

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::assistant::Assistant;
use crate::candidates::repository::PgStageUpdater;
use crate::config::Config;
use crate::db::create_pool;
use crate::pipeline::transition::{SpawnedUpdates, StageUpdater, TransitionController};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting recruitment back-office API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize PostgreSQL
    let db = create_pool(&config.database_url, config.database_max_connections).await?;

    // Board drops are dispatched in the background; stage edits await the same updater.
    let stage_updater: Arc<dyn StageUpdater> = Arc::new(PgStageUpdater::new(db.clone()));
    let transitions = Arc::new(TransitionController::new(Arc::new(SpawnedUpdates::new(
        Arc::clone(&stage_updater),
    ))));

    let assistant = Assistant::new(Duration::from_millis(config.assistant_delay_ms));
    info!("Assistant reply delay: {}ms", config.assistant_delay_ms);

    // Build app state
    let state = AppState {
        db,
        transitions,
        stage_updater,
        assistant,
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict CORS to the back-office origin

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
