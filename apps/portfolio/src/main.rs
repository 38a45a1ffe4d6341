mod config;
mod contact;
mod data;
mod errors;
mod interaction;
mod models;
mod projects;
mod render;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::contact::SimulatedContactSink;
use crate::data::load_portfolio;
use crate::render::Fragments;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails only on malformed values)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Portfolio v{}", env!("CARGO_PKG_VERSION"));

    // Load the portfolio record (startup fails on unreadable or malformed data)
    let portfolio = load_portfolio(&config.data_path).await?;

    // Optional HTML fragments; missing ones fall back to built-in markup
    let fragments = Fragments::load(&config.components_dir).await;

    // Contact delivery (simulated: artificial delay, nothing sent)
    let contact_sink = Arc::new(SimulatedContactSink::new(Duration::from_millis(
        config.contact_delay_ms,
    )));
    info!("Contact sink initialized (delay: {}ms)", config.contact_delay_ms);

    // Build app state
    let state = AppState {
        config: config.clone(),
        portfolio: Arc::new(portfolio),
        fragments: Arc::new(fragments),
        contact_sink,
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
