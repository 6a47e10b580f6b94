use std::future::Future;
use std::net::SocketAddr;

use axum::Router;
use tokio::net::TcpListener;

use devmatch_core::{Error, ServerConfig};

use crate::router::create_router;

/// A bound listener paired with the router it will serve.
pub struct Server {
    listener: TcpListener,
    router: Router,
}

impl Server {
    /// Bind the API router on the configured address.
    pub async fn bind(config: &ServerConfig) -> Result<Self, Error> {
        Self::bind_with(config, create_router()).await
    }

    /// Bind an arbitrary router on the configured address.
    pub async fn bind_with(config: &ServerConfig, router: Router) -> Result<Self, Error> {
        let addr = config.socket_addr();
        let listener = TcpListener::bind(addr)
            .await
            .map_err(|source| Error::Bind { addr, source })?;

        Ok(Self { listener, router })
    }

    pub fn local_addr(&self) -> Result<SocketAddr, Error> {
        Ok(self.listener.local_addr()?)
    }

    /// Serve until `shutdown` resolves, then let in-flight requests finish.
    pub async fn run<F>(self, shutdown: F) -> Result<(), Error>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        axum::serve(self.listener, self.router)
            .with_graceful_shutdown(shutdown)
            .await?;

        tracing::info!("server stopped");
        Ok(())
    }
}

/// Resolves on Ctrl+C, or SIGTERM on Unix.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::warn!("failed to listen for Ctrl+C: {err}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(err) => {
                tracing::warn!("failed to listen for SIGTERM: {err}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("shutdown signal received");
}
