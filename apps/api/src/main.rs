mod analysis;
mod config;
mod errors;
mod llm_client;
mod routes;
mod state;

use anyhow::{Context, Result};
use axum::http::HeaderValue;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::llm_client::{AnalysisProvider, GeminiClient};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Code-Mentor API v{}", env!("CARGO_PKG_VERSION"));

    let provider = build_provider(&config);

    let state = AppState { provider };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(build_cors(&config)?);

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Builds the Gemini provider. Without a usable key the service still starts and
/// answers every analysis with the "not configured" response.
fn build_provider(config: &Config) -> Option<Arc<dyn AnalysisProvider>> {
    let Some(api_key) = config.google_api_key.clone() else {
        warn!("GOOGLE_API_KEY is not set; analysis requests will report the model as unconfigured");
        return None;
    };

    match GeminiClient::new(api_key) {
        Ok(client) => {
            info!("LLM client initialized (model: {})", llm_client::MODEL);
            let provider: Arc<dyn AnalysisProvider> = Arc::new(client);
            Some(provider)
        }
        Err(e) => {
            error!("Failed to initialize LLM client: {e}");
            None
        }
    }
}

fn build_cors(config: &Config) -> Result<CorsLayer> {
    let origins = config
        .allowed_origins
        .iter()
        .map(|o| {
            o.parse::<HeaderValue>()
                .with_context(|| format!("Invalid CORS origin '{o}'"))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(Any)
        .allow_headers(Any))
}
