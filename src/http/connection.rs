use tokio::io::{AsyncRead, AsyncWrite};
use tracing::{debug, info, warn};

use crate::error::ServeError;
use crate::http::buffer::ScratchBuffer;
use crate::http::files::StaticFiles;
use crate::http::parser::parse_http_request;
use crate::http::request::Request;
use crate::http::response::{Response, StatusCode};
use crate::http::sanitize::SanitizePolicy;
use crate::http::writer::{ResponseWriter, serialize_response};

/// Longest request target accepted, in bytes.
pub const MAX_TARGET_LEN: usize = 255;

/// Drives one connection from first byte to last.
///
/// A connection carries exactly one request and there is no keep-alive: once
/// a response has been sent the handler is done and the stream is dropped.
pub struct Connection<'a, S> {
    stream: S,
    scratch: &'a mut ScratchBuffer,
    files: &'a StaticFiles,
    policy: SanitizePolicy,
    state: ConnectionState,
}

#[derive(Debug)]
pub enum ConnectionState {
    Accepted,
    Received,
    Parsed(Request),
    Sanitized(String),
    Built,
    Failed(ServeError),
    Sent(StatusCode),
    /// The transport failed or the peer left; nothing more can be sent.
    Closed,
}

impl<'a, S> Connection<'a, S>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    pub fn new(
        stream: S,
        scratch: &'a mut ScratchBuffer,
        files: &'a StaticFiles,
        policy: SanitizePolicy,
    ) -> Self {
        Self {
            stream,
            scratch,
            files,
            policy,
            state: ConnectionState::Accepted,
        }
    }

    pub fn state(&self) -> &ConnectionState {
        &self.state
    }

    /// Runs the pipeline to completion and returns the status that was sent.
    ///
    /// Pipeline failures are answered with the fixed 500 response and still
    /// count as success here. An `Err` means the transport failed and nothing
    /// (or only part of a response) reached the peer.
    pub async fn run(&mut self) -> Result<StatusCode, ServeError> {
        let result = self.drive().await;
        if result.is_err() {
            self.state = ConnectionState::Closed;
        }
        self.scratch.clear();
        result
    }

    async fn drive(&mut self) -> Result<StatusCode, ServeError> {
        loop {
            let state = std::mem::replace(&mut self.state, ConnectionState::Accepted);
            self.state = match state {
                ConnectionState::Accepted => {
                    let n = self
                        .scratch
                        .receive(&mut self.stream)
                        .await
                        .map_err(ServeError::Receive)?;
                    if n == 0 {
                        return Err(ServeError::ConnectionClosed);
                    }
                    debug!(
                        bytes = n,
                        request = %String::from_utf8_lossy(self.scratch.as_bytes()),
                        "Received request"
                    );
                    ConnectionState::Received
                }

                ConnectionState::Received => match parse_http_request(self.scratch.as_bytes()) {
                    Ok((request, _)) => ConnectionState::Parsed(request),
                    Err(e) => ConnectionState::Failed(e.into()),
                },

                ConnectionState::Parsed(request) => {
                    let len = request.target.len();
                    if len > MAX_TARGET_LEN {
                        ConnectionState::Failed(ServeError::TargetTooLong {
                            len,
                            max: MAX_TARGET_LEN,
                        })
                    } else {
                        debug!(method = request.method.as_str(), target = %request.target, "Parsed request");
                        ConnectionState::Sanitized(self.policy.apply(&request.target).into_owned())
                    }
                }

                ConnectionState::Sanitized(target) => {
                    match self.files.build(&target, self.scratch).await {
                        Ok(()) => {
                            info!(target = %target, bytes = self.scratch.len(), "Serving file");
                            ConnectionState::Built
                        }
                        Err(e) => ConnectionState::Failed(e),
                    }
                }

                ConnectionState::Built => {
                    ResponseWriter::new(self.scratch.as_bytes())
                        .write_to_stream(&mut self.stream)
                        .await
                        .map_err(ServeError::Send)?;
                    ConnectionState::Sent(StatusCode::Ok)
                }

                ConnectionState::Failed(error) => {
                    warn!(error = %error, "Request failed, sending 500");
                    let response = serialize_response(&Response::internal_error());
                    ResponseWriter::new(&response)
                        .write_to_stream(&mut self.stream)
                        .await
                        .map_err(ServeError::Send)?;
                    ConnectionState::Sent(StatusCode::InternalServerError)
                }

                ConnectionState::Sent(status) => {
                    self.state = ConnectionState::Sent(status);
                    return Ok(status);
                }

                ConnectionState::Closed => {
                    self.state = ConnectionState::Closed;
                    return Err(ServeError::ConnectionClosed);
                }
            };
        }
    }
}

/// Handles one connection and drops the stream once the response is out.
pub async fn handle_connection<S>(
    stream: S,
    scratch: &mut ScratchBuffer,
    files: &StaticFiles,
    policy: SanitizePolicy,
) -> Result<StatusCode, ServeError>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    Connection::new(stream, scratch, files, policy).run().await
}
