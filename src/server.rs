//! Static file server for the published artifacts, plus the refresh timer.

use crate::core::{VersionsError, VersionsResult};
use crate::pipeline::Pipeline;
use axum::Router;
use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// Router serving everything under `static_dir` at `/`.
pub fn create_app(static_dir: &Path) -> Router {
    Router::new()
        .fallback_service(ServeDir::new(static_dir))
        .layer(TraceLayer::new_for_http())
}

/// Bind `0.0.0.0:port`. Failing to bind is fatal to the process.
pub async fn bind(port: u16) -> VersionsResult<TcpListener> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    TcpListener::bind(addr)
        .await
        .map_err(|e| VersionsError::Server(format!("Failed to bind {}: {}", addr, e)))
}

/// Serve `static_dir` on an already bound listener until the process ends.
pub async fn serve(listener: TcpListener, static_dir: &Path) -> VersionsResult<()> {
    let addr = listener
        .local_addr()
        .map_err(|e| VersionsError::Server(format!("Listener has no address: {}", e)))?;
    tracing::info!("Serving {} on http://{}", static_dir.display(), addr);

    axum::serve(listener, create_app(static_dir))
        .await
        .map_err(|e| VersionsError::Server(format!("Server error: {}", e)))
}

/// Run the pipeline now and then every `every`.
///
/// Each run is spawned on its own, so a slow run does not delay the timer;
/// the pipeline's own guard skips a tick that overlaps a running one.
pub fn spawn_scheduler(pipeline: Arc<Pipeline>, every: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(every);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
        loop {
            ticker.tick().await;
            let pipeline = Arc::clone(&pipeline);
            tokio::spawn(async move { pipeline.run_logged().await });
        }
    })
}
