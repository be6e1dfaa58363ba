//! Content type lookup by file extension.

use std::collections::HashMap;

/// Returned for unknown extensions and for paths without one.
pub const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

const EXTENSIONS: &[&[&str]] = &[
    &["html"],
    &["js"],
    &["css"],
    &["jpg", "jpeg"],
    &["png"],
    &["c", "h", "sh"],
];

const CONTENT_TYPES: &[&str] = &[
    "text/html; charset=utf-8",
    "text/javascript; charset=utf-8",
    "text/css; charset=utf-8",
    "image/jpeg",
    "image/png",
    "text/plain; charset=utf-8",
];

/// Immutable extension to MIME type mapping.
///
/// Built once before the server starts accepting and only read afterwards,
/// so it can be shared freely. Extensions are matched case-sensitively.
#[derive(Debug, Clone)]
pub struct ContentTypeTable {
    types: HashMap<&'static str, &'static str>,
}

impl ContentTypeTable {
    /// Builds a table where every extension in `extensions[i]` maps to `types[i]`.
    ///
    /// # Panics
    ///
    /// Panics if the two lists differ in length.
    pub fn new(extensions: &[&[&'static str]], types: &[&'static str]) -> Self {
        assert_eq!(
            extensions.len(),
            types.len(),
            "extension groups and content types must pair up"
        );

        let types = extensions
            .iter()
            .zip(types)
            .flat_map(|(group, ty)| group.iter().map(move |ext| (*ext, *ty)))
            .collect();

        Self { types }
    }

    /// Looks up a bare extension such as `"png"`.
    pub fn lookup(&self, extension: &str) -> &'static str {
        self.types
            .get(extension)
            .copied()
            .unwrap_or(DEFAULT_CONTENT_TYPE)
    }

    /// Resolves the content type from the extension of the last path segment.
    pub fn for_path(&self, path: &str) -> &'static str {
        let file_name = path.rsplit('/').next().unwrap_or(path);
        match file_name.rsplit_once('.') {
            Some((_, extension)) => self.lookup(extension),
            None => DEFAULT_CONTENT_TYPE,
        }
    }
}

impl Default for ContentTypeTable {
    fn default() -> Self {
        Self::new(EXTENSIONS, CONTENT_TYPES)
    }
}
