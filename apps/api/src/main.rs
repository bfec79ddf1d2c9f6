mod analysis;
mod chat;
mod config;
mod documents;
mod errors;
mod export;
mod llm_client;
mod routes;
mod skills;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::llm_client::{ChatBackend, LlmClient};
use crate::routes::build_router;
use crate::skills::{ExtractorOptions, SkillExtractor};
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

    info!("Starting Career Compass API v{}", env!("CARGO_PKG_VERSION"));

    let extractor = Arc::new(SkillExtractor::new(ExtractorOptions {
        harvest_sections: config.skill_section_harvest,
        context_window: config.skill_context_window,
    }));
    info!("Skill extractor ready ({:?})", extractor.options());

    let llm: Option<Arc<dyn ChatBackend>> = match &config.groq_api_key {
        Some(key) => {
            let client: Arc<dyn ChatBackend> = Arc::new(LlmClient::new(
                key.clone(),
                config.llm_api_url.clone(),
                config.llm_timeout,
            )?);
            info!("LLM client initialized (model: {})", client.model());
            Some(client)
        }
        None => {
            warn!("GROQ_API_KEY is not set; analysis and chat will use local templates only");
            None
        }
    };

    let state = AppState {
        config: config.clone(),
        extractor,
        llm,
    };

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
