pub mod pages;
mod routes;

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::Router;
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::info;

pub use routes::QUERY_SEQ_HEADER;

use crate::apod::ApodClient;
use crate::config::Config;
use crate::gallery::QuerySequencer;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub apod: ApodClient,
    pub sequencer: QuerySequencer,
}

impl AppState {
    /// Build the state for `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if the feed client cannot be built.
    pub fn new(config: Config) -> Result<Self> {
        let apod = ApodClient::new(&config).context("Failed to build APOD client")?;
        Ok(Self {
            config: Arc::new(config),
            apod,
            sequencer: QuerySequencer::new(),
        })
    }
}

/// Start the web server and run until `shutdown` resolves.
///
/// # Errors
///
/// Returns an error if the server fails to start.
pub async fn serve<F>(config: Config, shutdown: F) -> Result<()>
where
    F: std::future::Future<Output = ()> + Send + 'static,
{
    let addr: SocketAddr = format!("{}:{}", config.web_host, config.web_port)
        .parse()
        .context("Invalid web server address")?;

    let state = AppState::new(config)?;
    let app = create_app(state);

    info!(addr = %addr, "Starting HTTP web server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind web server")?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
        .context("Web server error")?;

    Ok(())
}

/// Create the main application router.
pub fn create_app(state: AppState) -> Router {
    let static_dir = find_static_dir(state.config.static_dir.as_ref());
    info!(static_dir = ?static_dir, "Serving static files");

    Router::new()
        .merge(routes::router())
        .nest_service("/static", ServeDir::new(&static_dir))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Find the static files directory.
///
/// Checks in order:
/// 1. `STATIC_DIR` when configured
/// 2. ./static (development)
/// 3. /usr/share/apod-gallery/static (installed)
/// 4. Falls back to ./static
fn find_static_dir(configured: Option<&PathBuf>) -> PathBuf {
    if let Some(path) = configured {
        return path.clone();
    }

    let candidates = [
        PathBuf::from("./static"),
        PathBuf::from("/usr/share/apod-gallery/static"),
    ];

    for path in &candidates {
        if path.is_dir() {
            return path.clone();
        }
    }

    PathBuf::from("./static")
}
