//! Error types for serving files.
//!
//! Only [`ServeError::SocketSetup`] is fatal. Everything else is confined to
//! the connection it happened on: pipeline failures are answered with the
//! fixed 500 response, transport failures drop the connection.

use std::io;
use std::path::PathBuf;

use crate::http::parser::ParseError;

#[derive(Debug, thiserror::Error)]
pub enum ServeError {
    /// Binding or listening on the configured address failed
    #[error("failed to listen on {addr}: {source}")]
    SocketSetup {
        addr: String,
        #[source]
        source: io::Error,
    },

    #[error("failed to accept connection: {0}")]
    Accept(#[source] io::Error),

    #[error("failed to receive request: {0}")]
    Receive(#[source] io::Error),

    /// The peer closed the stream before sending anything
    #[error("connection closed before a request arrived")]
    ConnectionClosed,

    #[error("malformed request: {0}")]
    Parse(#[from] ParseError),

    #[error("request target of {len} bytes exceeds {max} byte limit")]
    TargetTooLong { len: usize, max: usize },

    #[error("cannot open {}: {source}", path.display())]
    FileNotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{} is not a regular file", path.display())]
    NotAFile { path: PathBuf },

    #[error("failed to read {}: {source}", path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Header plus body would not fit in the scratch buffer
    #[error("response of {needed} bytes does not fit in {capacity} byte buffer")]
    ResponseTooLarge { needed: usize, capacity: usize },

    #[error("failed to send response: {0}")]
    Send(#[source] io::Error),
}
