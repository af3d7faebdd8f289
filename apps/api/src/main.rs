use std::net::SocketAddr;

use anyhow::Result;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use postcrafter::config::Config;
use postcrafter::routes::build_router;
use postcrafter::state::AppState;
use postcrafter::{build_gateway, llm_client};

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

    info!("Starting PostCrafter API v{}", env!("CARGO_PKG_VERSION"));

    let gateway = build_gateway(&config)?;
    info!(
        "Generation gateway initialized (model: {}, temperature: {}, top_p: {})",
        llm_client::MODEL,
        gateway.settings().temperature,
        gateway.settings().top_p
    );

    let state = AppState { gateway };

    let app = build_router(state).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive()),
    );

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
