//! Prompt improver service
//!
//! Wires the scoring engine and the OpenAI client into an axum application.

pub mod config;
pub mod routes;
pub mod server;


pub use config::AppConfig;
pub use server::{AppState, build_improver, build_router, run};

use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber, honoring `RUST_LOG` over `level`
pub fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
