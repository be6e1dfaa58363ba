use tokio::io::{AsyncWrite, AsyncWriteExt};

use crate::http::buffer::{CapacityExceeded, ScratchBuffer};
use crate::http::response::Response;

const HTTP_VERSION: &str = "HTTP/1.1";

fn format_head(resp: &Response) -> String {
    // Status line
    let mut head = format!(
        "{} {} {}\r\n",
        HTTP_VERSION,
        resp.status.as_u16(),
        resp.status.reason_phrase()
    );

    // Headers
    for (k, v) in &resp.headers {
        head.push_str(k);
        head.push_str(": ");
        head.push_str(v);
        head.push_str("\r\n");
    }

    // Header/body separator
    head.push_str("\r\n");
    head
}

/// Serializes status line, headers and body into a fresh vector.
pub fn serialize_response(resp: &Response) -> Vec<u8> {
    let mut buf = format_head(resp).into_bytes();
    buf.extend_from_slice(&resp.body);
    buf
}

/// Appends the status line and headers of `resp` to the scratch buffer.
///
/// The body is not written. Returns the head length.
pub fn write_head(resp: &Response, scratch: &mut ScratchBuffer) -> Result<usize, CapacityExceeded> {
    let head = format_head(resp);
    scratch.extend(head.as_bytes())?;
    Ok(head.len())
}

/// Sends a complete, already serialized response.
pub struct ResponseWriter<'a> {
    buffer: &'a [u8],
    written: usize,
}

impl<'a> ResponseWriter<'a> {
    pub fn new(buffer: &'a [u8]) -> Self {
        Self { buffer, written: 0 }
    }

    pub async fn write_to_stream<W>(&mut self, stream: &mut W) -> std::io::Result<()>
    where
        W: AsyncWrite + Unpin + ?Sized,
    {
        while self.written < self.buffer.len() {
            let n = stream.write(&self.buffer[self.written..]).await?;

            if n == 0 {
                return Err(std::io::Error::new(
                    std::io::ErrorKind::WriteZero,
                    "connection closed while writing",
                ));
            }

            self.written += n;
        }

        stream.flush().await
    }
}
