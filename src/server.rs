//! HTTP server for the prompt improver

use std::any::Any;
use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use axum::{
    Router,
    http::{HeaderName, Method, header},
};
use prompt_engine::PromptImprover;
use prompt_openai::{LLMProvider, OpenAIClient};
use tokio::signal;
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{self, CorsLayer},
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::{Level, info, warn};

use crate::config::AppConfig;
use crate::routes;

/// Application state shared across handlers
pub struct AppState {
    pub improver: PromptImprover<OpenAIClient>,
    pub config: AppConfig,
}

impl AppState {
    pub fn new(improver: PromptImprover<OpenAIClient>, config: AppConfig) -> Self {
        Self { improver, config }
    }
}

/// Build the improver, falling back to rules only when OpenAI is not configured
pub fn build_improver(config: &AppConfig) -> PromptImprover<OpenAIClient> {
    match OpenAIClient::from_env() {
        Ok(client) => {
            info!(model = client.model_id(), "AI rewriting enabled");
            PromptImprover::new(client).with_timeout(config.rewrite_timeout)
        }
        Err(e) => {
            warn!(error = %e, "AI rewriting disabled, using rule-based improvements only");
            PromptImprover::rules_only().with_timeout(config.rewrite_timeout)
        }
    }
}

fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(cors::Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            header::ORIGIN,
            HeaderName::from_static("x-requested-with"),
            header::CONTENT_TYPE,
            header::ACCEPT,
            header::AUTHORIZATION,
        ])
}

/// Assemble the router with CORS, panic handling and request tracing
pub fn build_router(state: AppState) -> Router {
    let development = state.config.is_development();
    let state = Arc::new(state);

    Router::new()
        .merge(routes::prompt_routes())
        .merge(routes::health_routes())
        .fallback(routes::not_found)
        .with_state(state)
        .layer(CatchPanicLayer::custom(
            move |panic: Box<dyn Any + Send + 'static>| routes::panic_response(panic, development),
        ))
        .layer(cors_layer())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
}

/// Run the HTTP server until SIGINT or SIGTERM
pub async fn run(state: AppState) -> Result<()> {
    let port = state.config.port;
    let environment = state.config.environment.clone();
    let app = build_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("  Server running on http://localhost:{}", port);
    info!("  Environment: {}", environment);
    info!(
        "  API available at http://localhost:{}/api/prompt/improve",
        port
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!(error = %e, "failed to listen for SIGINT");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("SIGINT received, shutting down gracefully"),
        _ = terminate => info!("SIGTERM received, shutting down gracefully"),
    }
}
