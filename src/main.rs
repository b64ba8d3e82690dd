//! riot-status-gateway server entry point.
//!
//! Builds the initial snapshot table, optionally keeps it fresh on a
//! timer, and starts the Axum HTTP server.

use std::sync::Arc;

use anyhow::Context;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use riot_status_gateway::api;
use riot_status_gateway::app_state::AppState;
use riot_status_gateway::config::{self, GameConfig, GatewayConfig};
use riot_status_gateway::domain::SnapshotStore;
use riot_status_gateway::provider::HttpStatusSource;
use riot_status_gateway::service::Aggregator;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = GatewayConfig::from_env()?;

    // Initialize tracing
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if config.log_json {
        tracing_subscriber::fmt().json().with_env_filter(filter).init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
    tracing::info!(addr = %config.listen_addr, "starting riot-status-gateway");

    let games = config::load_games(&config.games_file)?;
    tracing::info!(
        file = %config.games_file.display(),
        games = games.len(),
        "games loaded"
    );

    // Build the initial snapshot table before accepting requests
    let source = HttpStatusSource::new(config.fetch_timeout())?;
    let aggregator = Aggregator::new(Arc::new(source));
    let store = Arc::new(SnapshotStore::new());
    aggregator.refresh(&store, &games).await;

    if let Some(period) = config.refresh_interval() {
        tracing::info!(period_secs = period.as_secs(), "periodic refresh enabled");
        tokio::spawn(refresh_loop(
            aggregator,
            Arc::clone(&store),
            games,
            period,
        ));
    }

    // Build router
    let app = api::build_router()
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(AppState::new(store));

    // Start server
    let listener = tokio::net::TcpListener::bind(config.listen_addr)
        .await
        .with_context(|| format!("binding {}", config.listen_addr))?;
    tracing::info!(addr = %config.listen_addr, "server listening");

    axum::serve(listener, app).await?;

    Ok(())
}

/// Rebuilds the snapshot table every `period`, forever.
async fn refresh_loop(
    aggregator: Aggregator<HttpStatusSource>,
    store: Arc<SnapshotStore>,
    games: Vec<GameConfig>,
    period: std::time::Duration,
) {
    let mut ticker = tokio::time::interval(period);
    ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
    // The first tick completes immediately; the startup build covers it.
    ticker.tick().await;
    loop {
        ticker.tick().await;
        aggregator.refresh(&store, &games).await;
    }
}
