//! HTTP listener lifecycle.
//!
//! [`start_server`] resolves the configured address, binds it, and hands the
//! listener to [`serve`], which runs the directory router until `Ctrl-C`.
//! Requests already in flight when the signal arrives are allowed to finish.

use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;

use serde::Deserialize;
use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::router::build_router;
use crate::state::AppState;

/// Where the directory listens. Read from the `server` section of the
/// configuration file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ServerConfig {
    /// Address to bind (e.g. `0.0.0.0`, `127.0.0.1`).
    #[serde(default = "default_host")]
    pub host: String,
    /// TCP port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
}

impl ServerConfig {
    /// The socket address described by `host` and `port`.
    ///
    /// # Errors
    ///
    /// Returns [`ServerError::InvalidAddress`] if `host` is not an IP
    /// address.
    pub fn socket_addr(&self) -> Result<SocketAddr, ServerError> {
        let addr = format!("{}:{}", self.host, self.port);
        addr.parse()
            .map_err(|source| ServerError::InvalidAddress { addr, source })
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_owned()
}

const fn default_port() -> u16 {
    3000
}

/// Bind the configured address and serve the directory until `Ctrl-C`.
///
/// # Errors
///
/// Returns [`ServerError::InvalidAddress`] for an unparseable host,
/// [`ServerError::Bind`] if the port cannot be bound, or
/// [`ServerError::Serve`] if the accept loop fails.
pub async fn start_server(config: &ServerConfig, state: Arc<AppState>) -> Result<(), ServerError> {
    let addr = config.socket_addr()?;
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;

    serve(listener, state, ctrl_c()).await
}

/// Serve the directory on an already-bound listener until `shutdown`
/// resolves.
///
/// # Errors
///
/// Returns [`ServerError::Serve`] if the accept loop fails.
pub async fn serve<F>(listener: TcpListener, state: Arc<AppState>, shutdown: F) -> Result<(), ServerError>
where
    F: Future<Output = ()> + Send + 'static,
{
    let directory = state.query.directory();
    info!(
        addr = ?listener.local_addr().ok(),
        shelters = directory.shelter_count(),
        animals = directory.animal_count(),
        veterinarias = directory.veterinaria_count(),
        "Directory server listening"
    );

    axum::serve(listener, build_router(state))
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(|source| ServerError::Serve { source })?;

    info!("Directory server stopped");
    Ok(())
}

/// Resolve on `Ctrl-C`, or at once if the handler cannot be installed.
async fn ctrl_c() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to install Ctrl-C handler");
    }
}

/// Errors that can occur when starting or running the server.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// `host:port` does not form a socket address.
    #[error("invalid listen address {addr}: {source}")]
    InvalidAddress {
        /// The rejected `host:port` string.
        addr: String,
        /// The underlying parse error.
        source: std::net::AddrParseError,
    },

    /// The address could not be bound.
    #[error("failed to bind {addr}: {source}")]
    Bind {
        /// The address being bound.
        addr: SocketAddr,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// The accept loop failed.
    #[error("server failed: {source}")]
    Serve {
        /// The underlying I/O error.
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpStream;
    use tokio::sync::oneshot;

    use super::*;
    use crate::render::Renderer;

    fn state() -> Arc<AppState> {
        let directory = colitas_directory::from_json_str("[]", "[]").unwrap();
        Arc::new(AppState::new(directory, Renderer::builtin().unwrap()))
    }

    #[test]
    fn default_listens_on_all_interfaces() {
        let addr = ServerConfig::default().socket_addr().unwrap();
        assert_eq!(addr.to_string(), "0.0.0.0:3000");
    }

    #[test]
    fn hostname_is_an_invalid_address() {
        let config = ServerConfig {
            host: String::from("localhost"),
            port: 3000,
        };
        assert!(matches!(
            config.socket_addr(),
            Err(ServerError::InvalidAddress { addr, .. }) if addr == "localhost:3000"
        ));
    }

    #[tokio::test]
    async fn occupied_port_is_a_bind_error() {
        let taken = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let config = ServerConfig {
            host: String::from("127.0.0.1"),
            port: taken.local_addr().unwrap().port(),
        };
        let result = start_server(&config, state()).await;
        assert!(matches!(result, Err(ServerError::Bind { .. })));
    }

    #[tokio::test]
    async fn serves_until_shutdown() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let (stop, stopped) = oneshot::channel::<()>();
        let server = tokio::spawn(serve(listener, state(), async move {
            stopped.await.ok();
        }));

        let mut stream = TcpStream::connect(addr).await.unwrap();
        stream
            .write_all(b"GET /health HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n")
            .await
            .unwrap();
        let mut response = String::new();
        stream.read_to_string(&mut response).await.unwrap();
        assert!(response.starts_with("HTTP/1.1 200"));
        assert!(response.contains("\"status\":\"ok\""));

        stop.send(()).unwrap();
        assert!(server.await.unwrap().is_ok());
    }
}
