//! Source of incoming connections.
//!
//! The connection pipeline only needs a byte stream it can read from and
//! write to, so anything that hands out such streams can feed the server.

use std::fmt::Display;
use std::future::Future;
use std::io;

use tokio::io::{AsyncRead, AsyncWrite};
use tokio::net::{TcpListener, TcpStream};

pub trait Transport {
    type Stream: AsyncRead + AsyncWrite + Unpin + Send;
    type Peer: Display + Send;

    /// Waits for the next connection.
    fn accept(&mut self) -> impl Future<Output = io::Result<(Self::Stream, Self::Peer)>> + Send;
}

impl Transport for TcpListener {
    type Stream = TcpStream;
    type Peer = std::net::SocketAddr;

    fn accept(&mut self) -> impl Future<Output = io::Result<(TcpStream, Self::Peer)>> + Send {
        TcpListener::accept(self)
    }
}
