//! HTTP server startup logic.
//!
//! Startup is split in two steps so that a bind failure can never be mistaken
//! for a running service: `bind` either returns a `BoundServer` or fails, and
//! only then is the startup line logged and the accept loop entered.

use std::future::Future;
use std::net::SocketAddr;

use axum::Router;
use tokio::net::TcpListener;

use crate::config::{AppConfig, HttpServerConfig};

use super::shutdown;

/// Server startup error
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Server error: {0}")]
    Serve(#[source] std::io::Error),
}

/// A listener that has been successfully bound but is not yet serving.
#[derive(Debug)]
pub struct BoundServer {
    listener: TcpListener,
    local_addr: SocketAddr,
}

/// Bind a TCP listener for the configured host and port.
pub async fn bind(config: &HttpServerConfig) -> Result<BoundServer, ServerError> {
    let addr = format!("{}:{}", config.host, config.port);
    let bind_error = |source| ServerError::Bind {
        addr: addr.clone(),
        source,
    };

    let listener = TcpListener::bind((config.host.as_str(), config.port))
        .await
        .map_err(bind_error)?;
    let local_addr = listener.local_addr().map_err(bind_error)?;

    Ok(BoundServer {
        listener,
        local_addr,
    })
}

impl BoundServer {
    /// Address actually bound (differs from the config when port 0 was requested).
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    /// Serve `app` until `signal` resolves, then drain in-flight requests.
    pub async fn serve<F>(self, app: Router, signal: F) -> Result<(), ServerError>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        axum::serve(self.listener, app)
            .with_graceful_shutdown(signal)
            .await
            .map_err(ServerError::Serve)
    }
}

/// Start the HTTP server based on configuration.
///
/// This function blocks until the server shuts down.
pub async fn start_server(app: Router, config: &AppConfig) -> Result<(), ServerError> {
    let server = bind(&config.http).await?;
    let port = server.local_addr().port();

    tracing::info!(
        host = %config.http.host,
        port,
        "Service running on port {}",
        port
    );

    server.serve(app, shutdown::shutdown_signal()).await?;

    tracing::info!("Server stopped");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::create_router;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::sync::oneshot;

    fn loopback(port: u16) -> HttpServerConfig {
        HttpServerConfig {
            host: "127.0.0.1".to_string(),
            port,
        }
    }

    #[tokio::test]
    async fn test_bind_ephemeral_port_reports_real_port() {
        let server = bind(&loopback(0)).await.unwrap();
        assert_ne!(server.local_addr().port(), 0);
        assert!(server.local_addr().ip().is_loopback());
    }

    #[tokio::test]
    async fn test_bind_occupied_port_fails() {
        let occupied = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let port = occupied.local_addr().unwrap().port();

        let err = bind(&loopback(port)).await.unwrap_err();
        match err {
            ServerError::Bind { addr, source } => {
                assert_eq!(addr, format!("127.0.0.1:{}", port));
                assert_eq!(source.kind(), std::io::ErrorKind::AddrInUse);
            }
            other => panic!("expected bind error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_serve_answers_and_shuts_down() {
        let server = bind(&loopback(0)).await.unwrap();
        let addr = server.local_addr();
        let (tx, rx) = oneshot::channel::<()>();

        let handle = tokio::spawn(server.serve(create_router(), async move {
            let _ = rx.await;
        }));

        let mut stream = tokio::net::TcpStream::connect(addr).await.unwrap();
        stream
            .write_all(b"GET /health HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n")
            .await
            .unwrap();
        let mut raw = String::new();
        stream.read_to_string(&mut raw).await.unwrap();

        assert!(raw.starts_with("HTTP/1.1 200 OK"), "unexpected response: {}", raw);
        assert!(raw.ends_with(r#"{"status":"healthy"}"#));

        tx.send(()).unwrap();
        handle.await.unwrap().unwrap();
    }

    #[tokio::test]
    async fn test_malformed_request_does_not_stop_server() {
        let server = bind(&loopback(0)).await.unwrap();
        let addr = server.local_addr();
        let (tx, rx) = oneshot::channel::<()>();

        let handle = tokio::spawn(server.serve(create_router(), async move {
            let _ = rx.await;
        }));

        let mut garbage = tokio::net::TcpStream::connect(addr).await.unwrap();
        garbage.write_all(b"\x00\x01 not http at all\r\n\r\n").await.unwrap();
        let mut sink = Vec::new();
        let _ = garbage.read_to_end(&mut sink).await;

        let mut stream = tokio::net::TcpStream::connect(addr).await.unwrap();
        stream
            .write_all(b"GET / HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n")
            .await
            .unwrap();
        let mut raw = String::new();
        stream.read_to_string(&mut raw).await.unwrap();
        assert!(raw.starts_with("HTTP/1.1 200 OK"), "unexpected response: {}", raw);

        tx.send(()).unwrap();
        handle.await.unwrap().unwrap();
    }
}
