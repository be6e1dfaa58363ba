//! Fixed-capacity staging area for inbound requests and outbound responses.
//!
//! One `ScratchBuffer` is owned by the server loop and lent to each
//! connection in turn. Because connections are handled strictly one after
//! another, the exclusive borrow is enough to keep them from seeing each
//! other's bytes.

use bytes::{BufMut, BytesMut};
use tokio::io::{AsyncRead, AsyncReadExt};

/// Default capacity: requests and responses are limited to 1 MiB.
pub const DEFAULT_CAPACITY: usize = 0x10_0000;

/// A write would have grown the buffer past its capacity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("{requested} bytes requested but scratch buffer capacity is {capacity}")]
pub struct CapacityExceeded {
    pub requested: usize,
    pub capacity: usize,
}

#[derive(Debug)]
pub struct ScratchBuffer {
    data: BytesMut,
    capacity: usize,
}

impl ScratchBuffer {
    pub fn new(capacity: usize) -> Self {
        Self {
            data: BytesMut::with_capacity(capacity),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn remaining(&self) -> usize {
        self.capacity - self.data.len()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Replaces the contents with a single read from `reader`.
    ///
    /// Exactly one read call is made, so a request that arrives in several
    /// segments is only seen up to the end of the first one. Returns the
    /// number of bytes received; zero means the peer closed the stream.
    pub async fn receive<R>(&mut self, reader: &mut R) -> std::io::Result<usize>
    where
        R: AsyncRead + Unpin + ?Sized,
    {
        self.data.clear();
        let mut limited = (&mut self.data).limit(self.capacity);
        reader.read_buf(&mut limited).await
    }

    /// Appends `bytes`, failing without writing anything if they do not fit.
    pub fn extend(&mut self, bytes: &[u8]) -> Result<(), CapacityExceeded> {
        self.check(bytes.len())?;
        self.data.extend_from_slice(bytes);
        Ok(())
    }

    /// Grows the buffer by `n` zeroed bytes and returns them for filling.
    pub fn grow(&mut self, n: usize) -> Result<&mut [u8], CapacityExceeded> {
        self.check(n)?;
        let start = self.data.len();
        self.data.resize(start + n, 0);
        Ok(&mut self.data[start..])
    }

    fn check(&self, additional: usize) -> Result<(), CapacityExceeded> {
        match self.data.len().checked_add(additional) {
            Some(total) if total <= self.capacity => Ok(()),
            _ => Err(CapacityExceeded {
                requested: self.data.len().saturating_add(additional),
                capacity: self.capacity,
            }),
        }
    }
}

impl Default for ScratchBuffer {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}
