mod config;
mod errors;
mod llm_client;
mod models;
mod roadmap;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::roadmap::ai::{LlmRoadmapDrafter, RoadmapDrafter};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting {} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    let drafter = match &config.anthropic_api_key {
        Some(key) => {
            let llm = LlmClient::new(key.clone(), config.ai_timeout)?;
            info!(
                model = llm_client::MODEL,
                timeout_secs = config.ai_timeout.as_secs(),
                "AI roadmap drafting enabled"
            );
            let drafter: Arc<dyn RoadmapDrafter> = Arc::new(LlmRoadmapDrafter::new(llm));
            Some(drafter)
        }
        None => {
            warn!("ANTHROPIC_API_KEY not set, roadmaps will come from templates only");
            None
        }
    };

    let state = AppState {
        config: config.clone(),
        drafter,
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
