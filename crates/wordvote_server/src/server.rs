//! Router assembly and server lifecycle.

use crate::config::ServerConfig;
use crate::error::ServerResult;
use crate::handler::{submit, AppState};
use axum::http::Method;
use axum::routing::get;
use axum::Router;
use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;
use wordvote_core::{Dictionary, ScanningDictionary, SubmissionRecorder, WordList};
use wordvote_queue::DirectoryQueue;

/// Path of the submit endpoint.
pub const SUBMIT_PATH: &str = "/submit";
/// Legacy path kept for existing clients.
pub const LEGACY_SUBMIT_PATH: &str = "/submit.php";

/// Builds the HTTP router.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_origin(Any)
        .max_age(Duration::from_secs(60 * 60));

    Router::new()
        .route(SUBMIT_PATH, get(submit))
        .route(LEGACY_SUBMIT_PATH, get(submit))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Serves the router on `listener` until `shutdown` resolves.
///
/// # Errors
///
/// Returns an error if the server fails while accepting connections.
pub async fn serve(
    listener: TcpListener,
    state: AppState,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> std::io::Result<()> {
    axum::serve(
        listener,
        router(state).into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown)
    .await
}

/// The submission server.
///
/// Owns the recorder built from a [`ServerConfig`]: the dictionary and the
/// pending queue are opened once at startup, so misconfiguration fails
/// before the first request.
///
/// # Example
///
/// ```no_run
/// use wordvote_server::{ServerConfig, WordVoteServer};
///
/// # async fn run() -> wordvote_server::ServerResult<()> {
/// let config = ServerConfig::from_env()?;
/// let server = WordVoteServer::from_config(config)?;
/// server.run(wordvote_server::shutdown_signal()).await
/// # }
/// ```
pub struct WordVoteServer {
    config: ServerConfig,
    state: AppState,
}

impl WordVoteServer {
    /// Opens the dictionary and queue described by `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if the dictionary cannot be read or the queue
    /// directory cannot be opened.
    pub fn from_config(config: ServerConfig) -> ServerResult<Self> {
        let recorder = build_recorder(&config)?;
        Ok(Self {
            config,
            state: AppState::new(recorder),
        })
    }

    /// Returns the configuration.
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Returns the handler state.
    pub fn state(&self) -> AppState {
        self.state.clone()
    }

    /// Binds the configured address and serves until `shutdown` resolves.
    ///
    /// # Errors
    ///
    /// Returns an error if binding or serving fails.
    pub async fn run(self, shutdown: impl Future<Output = ()> + Send + 'static) -> ServerResult<()> {
        let listener = TcpListener::bind(self.config.bind_addr).await?;
        info!("Server running on {}", listener.local_addr()?);

        serve(listener, self.state, shutdown).await?;

        info!("Server stopped");
        Ok(())
    }
}

/// Builds a recorder from configuration.
///
/// # Errors
///
/// Returns an error if the dictionary or queue cannot be opened.
pub fn build_recorder(config: &ServerConfig) -> ServerResult<SubmissionRecorder> {
    let words: Arc<dyn WordList> = if config.scan_dictionary {
        Arc::new(ScanningDictionary::open(&config.dictionary_path)?)
    } else {
        let dictionary = Dictionary::load(&config.dictionary_path)?;
        info!(
            "Loaded {} words from {}",
            dictionary.len(),
            config.dictionary_path.display()
        );
        Arc::new(dictionary)
    };

    let queue = DirectoryQueue::open(&config.queue_dir, config.create_queue_dir)?
        .with_sync_writes(config.sync_writes);
    info!("Pending submissions go to {}", queue.path().display());

    Ok(SubmissionRecorder::new(words, Arc::new(queue)))
}

/// Resolves on Ctrl+C or, on Unix, SIGTERM.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {e}");
            std::future::pending::<()>().await;
        }
        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                tracing::error!("Failed to install signal handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
