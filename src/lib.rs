//! Docroot - a small static file server
//!
//! Serves files from a document root over HTTP/1.1, one connection at a time.

pub mod config;
pub mod error;
pub mod http;
pub mod server;
