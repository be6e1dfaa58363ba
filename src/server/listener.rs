use std::io;
use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::{error, info};

use crate::config::Config;
use crate::error::ServeError;
use crate::http::buffer::ScratchBuffer;
use crate::http::connection::handle_connection;
use crate::http::files::StaticFiles;
use crate::http::mime::ContentTypeTable;
use crate::http::sanitize::SanitizePolicy;
use crate::server::transport::Transport;

/// The accept loop.
///
/// Connections are served one at a time: the next `accept` only happens after
/// the previous connection has been answered. That is what lets a single
/// scratch buffer serve every connection, and it also means one client that
/// never sends its request holds up everybody behind it.
pub struct Server<T = TcpListener> {
    transport: T,
    scratch: ScratchBuffer,
    files: StaticFiles,
    policy: SanitizePolicy,
}

impl Server<TcpListener> {
    /// Binds the configured address.
    pub async fn bind(cfg: &Config) -> Result<Self, ServeError> {
        let setup_error = |source| ServeError::SocketSetup {
            addr: cfg.listen_addr.clone(),
            source,
        };
        let listener = TcpListener::bind(&cfg.listen_addr).await.map_err(setup_error)?;
        let addr = listener.local_addr().map_err(setup_error)?;
        info!("Listening on {}", addr);
        Ok(Self::new(listener, cfg))
    }

    pub fn local_addr(&self) -> io::Result<std::net::SocketAddr> {
        self.transport.local_addr()
    }
}

impl<T: Transport> Server<T> {
    pub fn new(transport: T, cfg: &Config) -> Self {
        let content_types = Arc::new(ContentTypeTable::default());
        Self {
            transport,
            scratch: ScratchBuffer::new(cfg.buffer_capacity),
            files: StaticFiles::new(&cfg.document_root, content_types),
            policy: cfg.sanitize,
        }
    }

    /// Accepts and serves connections until the future is dropped.
    ///
    /// Failures never end the loop; they are logged and the next connection
    /// is accepted.
    pub async fn run(&mut self) {
        loop {
            let (stream, peer) = match self.transport.accept().await {
                Ok(conn) => conn,
                Err(e) => {
                    error!(error = %ServeError::Accept(e), "Accept failed");
                    continue;
                }
            };
            info!("Accepted connection from {}", peer);

            match handle_connection(stream, &mut self.scratch, &self.files, self.policy).await {
                Ok(status) => {
                    info!(peer = %peer, status = status.as_u16(), "Connection finished");
                }
                Err(ServeError::ConnectionClosed) => {
                    info!(peer = %peer, "Connection closed without a request");
                }
                Err(e) => {
                    error!("Connection error from {}: {}", peer, e);
                }
            }
        }
    }
}
