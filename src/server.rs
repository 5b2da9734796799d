use std::future::Future;
use std::net::SocketAddr;

use anyhow::{Context, Result};
use axum::Router;
use tokio::net::TcpListener;
use tracing::info;

use crate::app::build_router;
use crate::config::Config;
use crate::routes::RoutePrefix;

/// HTTP echo server bound to a listener
///
/// Created from a `Config` at process start and consumed by `run`, which
/// returns once the shutdown future resolves and in-flight requests drain.
pub struct EchoServer {
    listener: TcpListener,
    router: Router,
    local_addr: SocketAddr,
    route_prefix: RoutePrefix,
}

impl EchoServer {
    pub async fn bind(config: &Config) -> Result<Self> {
        let addr = config.bind_addr();
        let listener = TcpListener::bind(addr.as_str())
            .await
            .with_context(|| format!("Failed to bind listener on {}", addr))?;
        let local_addr = listener
            .local_addr()
            .context("Failed to read bound listener address")?;

        Ok(EchoServer {
            listener,
            router: build_router(&config.route_prefix),
            local_addr,
            route_prefix: config.route_prefix.clone(),
        })
    }

    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    pub async fn run<F>(self, shutdown: F) -> Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        info!(addr = %self.local_addr(), prefix = %self.route_prefix, "Echo server listening");

        axum::serve(self.listener, self.router)
            .with_graceful_shutdown(shutdown)
            .await
            .context("HTTP server terminated with an error")?;

        info!("Echo server stopped");
        Ok(())
    }
}

/// Resolves on Ctrl-C, or SIGTERM on unix
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received Ctrl-C, shutting down"),
        _ = terminate => info!("Received SIGTERM, shutting down"),
    }
}
