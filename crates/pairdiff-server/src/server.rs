use std::future::Future;
use std::sync::Arc;

use tokio::net::TcpListener;

use pairdiff_store::PairStore;

use crate::config::ServerConfig;
use crate::error::ServerResult;
use crate::router::build_router;

/// The pairdiff HTTP server.
///
/// The pair store is supplied by the caller and shared by every request for
/// the lifetime of the server.
pub struct DiffServer {
    config: ServerConfig,
    store: Arc<dyn PairStore>,
}

impl DiffServer {
    pub fn new(config: ServerConfig, store: Arc<dyn PairStore>) -> Self {
        Self { config, store }
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    pub fn store(&self) -> &Arc<dyn PairStore> {
        &self.store
    }

    /// Build the router (useful for testing).
    pub fn router(&self) -> axum::Router {
        build_router(Arc::clone(&self.store), &self.config)
    }

    /// Bind the configured address and serve until Ctrl-C.
    pub async fn serve(self) -> ServerResult<()> {
        let listener = TcpListener::bind(self.config.bind_addr).await?;
        self.serve_on(listener, shutdown_signal()).await
    }

    /// Serve on an already bound listener until `shutdown` resolves.
    pub async fn serve_on<F>(self, listener: TcpListener, shutdown: F) -> ServerResult<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let addr = listener.local_addr()?;
        tracing::info!("pairdiff server listening on {addr}");
        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown)
            .await?;
        tracing::info!("pairdiff server stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("shutdown signal received"),
        Err(e) => {
            tracing::warn!("cannot listen for shutdown signal: {e}");
            std::future::pending::<()>().await;
        }
    }
}
