//! Builds file responses into the scratch buffer.

use std::path::PathBuf;
use std::sync::Arc;

use tokio::fs::File;
use tokio::io::AsyncReadExt;

use crate::error::ServeError;
use crate::http::buffer::ScratchBuffer;
use crate::http::mime::ContentTypeTable;
use crate::http::response::{ResponseBuilder, StatusCode};
use crate::http::writer::write_head;

/// Served in place of the root target `/`; `build` substitutes it.
pub const DEFAULT_DOCUMENT: &str = "/index.html";

/// Serves files from a document root.
#[derive(Debug, Clone)]
pub struct StaticFiles {
    root: PathBuf,
    content_types: Arc<ContentTypeTable>,
}

impl StaticFiles {
    pub fn new(root: impl Into<PathBuf>, content_types: Arc<ContentTypeTable>) -> Self {
        Self {
            root: root.into(),
            content_types,
        }
    }

    /// Joins a sanitized target onto the document root.
    ///
    /// All leading slashes are stripped, so the result is never an absolute
    /// path. Any `..` segments left in the target are joined as they are:
    /// single-pass sanitizing turns `/..../x` into `/.././x`, which resolves
    /// to `x` in the parent of the root.
    pub fn resolve(&self, target: &str) -> PathBuf {
        self.root.join(target.trim_start_matches('/'))
    }

    /// Writes a complete `200 OK` response for `target` into `scratch`.
    ///
    /// The whole file has to fit: if head plus content would reach the
    /// buffer capacity the build fails before any body byte is copied. On
    /// failure the buffer holds garbage and must not be sent.
    pub async fn build(&self, target: &str, scratch: &mut ScratchBuffer) -> Result<(), ServeError> {
        let target = if target == "/" { DEFAULT_DOCUMENT } else { target };
        let path = self.resolve(target);

        let mut file = File::open(&path)
            .await
            .map_err(|source| ServeError::FileNotFound {
                path: path.clone(),
                source,
            })?;

        let metadata = file.metadata().await.map_err(|source| ServeError::FileRead {
            path: path.clone(),
            source,
        })?;
        if !metadata.is_file() {
            return Err(ServeError::NotAFile { path });
        }

        let capacity = scratch.capacity();
        let content_len = usize::try_from(metadata.len()).map_err(|_| ServeError::ResponseTooLarge {
            needed: usize::MAX,
            capacity,
        })?;

        let head = ResponseBuilder::new(StatusCode::Ok)
            .header("Content-Length", content_len.to_string())
            .header("Content-Type", self.content_types.for_path(target))
            .build();

        scratch.clear();
        let header_len = write_head(&head, scratch).map_err(|e| ServeError::ResponseTooLarge {
            needed: e.requested,
            capacity,
        })?;

        let needed = header_len.saturating_add(content_len);
        if needed >= capacity {
            return Err(ServeError::ResponseTooLarge { needed, capacity });
        }

        let body = scratch.grow(content_len).map_err(|e| ServeError::ResponseTooLarge {
            needed: e.requested,
            capacity,
        })?;
        file.read_exact(body)
            .await
            .map_err(|source| ServeError::FileRead { path, source })?;

        Ok(())
    }
}
