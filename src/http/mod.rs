//! HTTP request pipeline.
//!
//! Each connection carries a single request, handled by these submodules:
//!
//! - **`connection`**: the per-connection state machine
//! - **`buffer`**: the fixed-capacity scratch buffer requests and responses pass through
//! - **`parser`**: parses the request line and headers from a byte buffer
//! - **`request`**: HTTP request representation
//! - **`sanitize`**: strips `../` traversal sequences from request targets
//! - **`files`**: resolves a target under the document root and builds the response
//! - **`mime`**: MIME type detection based on file extensions
//! - **`response`**: status codes, response heads and the fixed error responses
//! - **`writer`**: serializes responses and writes them to the client
//!
//! # Connection State Machine
//!
//! ```text
//!        ┌─────────────┐
//!        │  Accepted   │ ← One read into the scratch buffer
//!        └──────┬──────┘
//!               ▼
//!        ┌─────────────┐
//!        │  Received   │ ← Parse request line and headers
//!        └──────┬──────┘
//!               ▼
//!        ┌─────────────┐
//!        │   Parsed    │ ← Sanitize the target
//!        └──────┬──────┘
//!               ▼
//!        ┌─────────────┐
//!        │  Sanitized  │ ← Build the file response in the scratch buffer
//!        └──────┬──────┘
//!               ▼
//!        ┌─────────────┐
//!        │    Built    │ ← Write the scratch buffer to the client
//!        └──────┬──────┘
//!               ▼
//!        ┌─────────────┐
//!        │    Sent     │
//!        └─────────────┘
//! ```
//!
//! A parse, target or build failure moves to `Failed`, which sends the fixed
//! `500 Internal Server Error` response and ends in `Sent` as well. Receive
//! and send errors abandon the connection and leave it `Closed`.
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use docroot::http::buffer::ScratchBuffer;
//! use docroot::http::connection::handle_connection;
//! use docroot::http::files::StaticFiles;
//! use docroot::http::mime::ContentTypeTable;
//! use tokio::net::TcpListener;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let listener = TcpListener::bind("127.0.0.1:7000").await?;
//!     let files = StaticFiles::new(".", Arc::new(ContentTypeTable::default()));
//!     let mut scratch = ScratchBuffer::default();
//!
//!     loop {
//!         let (socket, _addr) = listener.accept().await?;
//!         if let Err(e) = handle_connection(socket, &mut scratch, &files, Default::default()).await {
//!             eprintln!("Connection error: {}", e);
//!         }
//!     }
//! }
//! ```

pub mod buffer;
pub mod connection;
pub mod files;
pub mod mime;
pub mod parser;
pub mod request;
pub mod response;
pub mod sanitize;
pub mod writer;
