//! JusticeAlly API Server
//!
//! REST backend for the legal document tools:
//!
//! - Document type catalog and template preview
//! - Template-based document generation with AI enhancement
//! - Legal document simplification (pasted text or uploaded PDF)
//! - Legal assistant chat passthrough
//!
//! The generative backend is an external text-completion service; this
//! server degrades to the deterministic template when it is down.

use std::net::SocketAddr;
use std::time::Duration;

use axum::extract::DefaultBodyLimit;
use axum::{
    routing::{get, post},
    Router,
};
use clap::Parser;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, Level};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod api;
mod enhance;
mod error;
#[cfg(test)]
mod tests;

use enhance::CompletionClient;
use justiceally_core::extract::MAX_UPLOAD_BYTES;

/// Command-line arguments for the JusticeAlly server
#[derive(Parser, Debug)]
#[command(name = "justiceally-server")]
#[command(about = "JusticeAlly API server for document generation and simplification")]
struct Args {
    /// Port to listen on
    #[arg(short, long, default_value = "3000")]
    port: u16,

    /// Host address to bind to
    #[arg(long, default_value = "0.0.0.0")]
    host: String,

    /// Completion backend endpoint (falls back to COMPLETION_API_URL)
    #[arg(long)]
    completion_url: Option<String>,

    /// Enhancement timeout in seconds
    #[arg(long, default_value = "30")]
    timeout_secs: u64,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Client for the external completion backend
    pub completion: CompletionClient,
    /// Watchdog timeout for one enhancement call
    pub enhance_timeout: Duration,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env().add_directive(log_level.into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let completion_url = args
        .completion_url
        .or_else(|| std::env::var("COMPLETION_API_URL").ok())
        .unwrap_or_else(|| "http://localhost:8080/api/chat".to_string());

    info!("Completion backend: {}", completion_url);

    let enhance_timeout = Duration::from_secs(args.timeout_secs);
    let state = AppState {
        completion: CompletionClient::new(completion_url, enhance_timeout)?,
        enhance_timeout,
    };

    // CORS configuration for web clients
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build router
    let app = Router::new()
        .route("/health", get(api::handle_health))
        // Catalog and previews
        .route("/api/document-types", get(api::handle_list_document_types))
        .route(
            "/api/document-types/:id/template",
            get(api::handle_template_preview),
        )
        // Pipeline operations
        .route("/api/generate", post(api::handle_generate))
        .route("/api/simplify", post(api::handle_simplify))
        .route("/api/simplify/upload", post(api::handle_simplify_upload))
        // Legal assistant passthrough
        .route("/api/chat", post(api::handle_chat))
        // 10MB upload ceiling plus multipart framing overhead
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES + 64 * 1024))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state);

    let addr: SocketAddr = format!("{}:{}", args.host, args.port).parse()?;
    info!("Starting JusticeAlly server on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
