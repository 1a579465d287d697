//! HTTP server lifecycle.
//!
//! Startup is strictly sequential: the caller loads the dataset first,
//! then [`serve`] binds the listener and runs until ctrl-c. A
//! background-task variant exists for tests that need a live listener
//! on an ephemeral port.

use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;

use tokio::sync::oneshot;

use crate::api::router::advisor_router;
use crate::dataset::Dataset;

/// Bind `addr` and serve until ctrl-c.
pub async fn serve(dataset: Arc<Dataset>, addr: SocketAddr) -> Result<(), String> {
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| format!("Failed to bind {addr}: {e}"))?;

    tracing::info!(%addr, "advisor server listening");

    axum::serve(listener, advisor_router(dataset))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| format!("Server error: {e}"))
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        tracing::info!("shutdown signal received");
    }
}

/// Handle to a server running in a background task.
pub struct AdvisorServer {
    pub addr: SocketAddr,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl AdvisorServer {
    /// Shut down the server gracefully. Idempotent.
    pub fn shutdown(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
            tracing::info!("advisor server shutdown signal sent");
        }
    }
}

/// Start the server on an ephemeral port in a background task.
///
/// Factored out from [`serve`] so tests can run against `127.0.0.1`
/// and tear the listener down explicitly.
pub async fn spawn_server(dataset: Arc<Dataset>, ip: IpAddr) -> Result<AdvisorServer, String> {
    let listener = tokio::net::TcpListener::bind(SocketAddr::new(ip, 0))
        .await
        .map_err(|e| format!("Failed to bind server: {e}"))?;
    let addr = listener
        .local_addr()
        .map_err(|e| format!("Failed to get server address: {e}"))?;

    let app = advisor_router(dataset);
    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

    tokio::spawn(async move {
        let shutdown = async move {
            let _ = shutdown_rx.await;
        };

        tracing::info!(%addr, "advisor server started");

        if let Err(e) = axum::serve(listener, app)
            .with_graceful_shutdown(shutdown)
            .await
        {
            tracing::error!("advisor server error: {e}");
        }

        tracing::info!("advisor server stopped");
    });

    Ok(AdvisorServer {
        addr,
        shutdown_tx: Some(shutdown_tx),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::Ipv4Addr;

    fn test_dataset() -> Arc<Dataset> {
        Arc::new(Dataset::fixture())
    }

    #[tokio::test]
    async fn start_serve_and_stop() {
        let mut server = spawn_server(test_dataset(), IpAddr::V4(Ipv4Addr::LOCALHOST))
            .await
            .expect("server should start");
        assert!(server.addr.port() > 0);

        let url = format!("http://{}/symptoms", server.addr);
        let resp = reqwest::get(&url).await.unwrap();
        assert_eq!(resp.status(), reqwest::StatusCode::OK);
        let json: serde_json::Value = resp.json().await.unwrap();
        assert!(json["symptoms"].is_array());

        server.shutdown();
        tokio::time::sleep(std::time::Duration::from_millis(50)).await;
    }

    #[tokio::test]
    async fn unknown_route_is_404_over_the_wire() {
        let mut server = spawn_server(test_dataset(), IpAddr::V4(Ipv4Addr::LOCALHOST))
            .await
            .expect("server should start");

        let url = format!("http://{}/nonexistent", server.addr);
        let resp = reqwest::get(&url).await.unwrap();
        assert_eq!(resp.status(), reqwest::StatusCode::NOT_FOUND);

        server.shutdown();
    }

    #[tokio::test]
    async fn shutdown_is_idempotent() {
        let mut server = spawn_server(test_dataset(), IpAddr::V4(Ipv4Addr::LOCALHOST))
            .await
            .expect("server should start");

        server.shutdown();
        server.shutdown();
    }
}
