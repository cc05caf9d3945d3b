//! HTTP server exposing the text processor.
//!
//! One route, `POST /process_text`, plus permissive CORS so browsers on any
//! origin can call it.

pub mod error;
pub mod handler;

use std::sync::Arc;

use axum::Router;
use axum::routing::post;
use log::{info, warn};
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};

use crate::config::ServerConfig;
use crate::error::{LancetError, Result};
use crate::processor::TextProcessor;

pub use error::{ApiError, ErrorBody, NO_TEXT_PROVIDED};
pub use handler::ProcessTextRequest;

/// Shared state handed to every handler.
#[derive(Debug, Clone)]
pub struct AppState {
    processor: Arc<TextProcessor>,
}

impl AppState {
    /// Wrap a processor for use as router state.
    pub fn new(processor: Arc<TextProcessor>) -> Self {
        AppState { processor }
    }

    /// Get the shared processor.
    pub fn processor(&self) -> &TextProcessor {
        &self.processor
    }
}

/// Build the application router.
pub fn router(processor: Arc<TextProcessor>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/process_text", post(handler::process_text))
        .layer(cors)
        .with_state(AppState::new(processor))
}

/// Bind `config` and serve until Ctrl-C.
pub async fn serve(config: &ServerConfig, processor: Arc<TextProcessor>) -> Result<()> {
    let address = config.bind_address();
    let listener = TcpListener::bind(&address)
        .await
        .map_err(|e| LancetError::server(format!("Failed to bind {address}: {e}")))?;

    serve_with_listener(listener, processor).await
}

/// Serve on an already bound listener until Ctrl-C.
pub async fn serve_with_listener(
    listener: TcpListener,
    processor: Arc<TextProcessor>,
) -> Result<()> {
    info!("Listening on http://{}", listener.local_addr()?);

    axum::serve(listener, router(processor))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| LancetError::server(e.to_string()))?;

    info!("Server stopped");
    Ok(())
}

/// Resolve on Ctrl-C, or on SIGTERM where signals exist.
async fn shutdown_signal() {
    let ctrl_c = async {
        match tokio::signal::ctrl_c().await {
            Ok(()) => info!("Received Ctrl-C, shutting down"),
            Err(e) => {
                warn!("Failed to listen for Ctrl-C: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};

        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("Received SIGTERM, shutting down");
            }
            Err(e) => {
                warn!("Failed to listen for SIGTERM: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::lexicon::Lexicon;

    #[test]
    fn test_router_builds() {
        let processor = Arc::new(TextProcessor::new(&Lexicon::builtin()).unwrap());
        let state = AppState::new(Arc::clone(&processor));
        assert_eq!(state.processor().repetition_threshold(), 2);
        let _ = router(processor);
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_sigterm_triggers_shutdown() {
        use tokio::signal::unix::{SignalKind, signal};

        // Installing a handler first keeps SIGTERM from killing the test process.
        let _guard = signal(SignalKind::terminate()).unwrap();

        let shutdown = tokio::spawn(shutdown_signal());
        tokio::time::sleep(Duration::from_millis(100)).await;

        let status = std::process::Command::new("kill")
            .arg("-TERM")
            .arg(std::process::id().to_string())
            .status()
            .unwrap();
        assert!(status.success());

        tokio::time::timeout(Duration::from_secs(5), shutdown)
            .await
            .expect("shutdown signal did not resolve on SIGTERM")
            .unwrap();
    }
}
