//! Removal of `../` traversal sequences from request targets.

use std::borrow::Cow;

use serde::Deserialize;

/// How request targets are cleaned before they are resolved.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SanitizePolicy {
    /// One forward pass that rewrites every `../` to `//`.
    #[default]
    SinglePass,
    /// Lexical resolution of `.`, `..` and empty segments, clamped at `/`.
    Normalize,
}

impl SanitizePolicy {
    pub fn apply<'a>(&self, target: &'a str) -> Cow<'a, str> {
        match self {
            SanitizePolicy::SinglePass => sanitize_target(target),
            SanitizePolicy::Normalize => normalize_target(target),
        }
    }
}

/// Overwrites the first `.` of every `../` window with `/`.
///
/// The scan runs once, left to right, and never looks back at a byte it has
/// already rewritten, so each window is judged on the original input. As a
/// consequence `/a/../b` becomes `/a//./b` and a trailing `..` is left alone.
/// Targets without a `../` are returned borrowed.
///
/// ```
/// # use docroot::http::sanitize::sanitize_target;
/// assert_eq!(sanitize_target("/../etc/passwd"), "//./etc/passwd");
/// assert_eq!(sanitize_target("/index.html"), "/index.html");
/// ```
pub fn sanitize_target(target: &str) -> Cow<'_, str> {
    if !target.contains("../") {
        return Cow::Borrowed(target);
    }

    let bytes = target.as_bytes();
    let mut out = String::with_capacity(target.len());
    for (i, ch) in target.char_indices() {
        if bytes[i..].starts_with(b"../") {
            out.push('/');
        } else {
            out.push(ch);
        }
    }
    Cow::Owned(out)
}

/// Resolves `.` and `..` segments lexically, never climbing above `/`.
///
/// Empty segments are dropped and a trailing slash is kept.
///
/// ```
/// # use docroot::http::sanitize::normalize_target;
/// assert_eq!(normalize_target("/a/../b"), "/b");
/// assert_eq!(normalize_target("/../../etc/passwd"), "/etc/passwd");
/// ```
pub fn normalize_target(target: &str) -> Cow<'_, str> {
    let mut segments: Vec<&str> = Vec::new();
    for segment in target.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                segments.pop();
            }
            _ => segments.push(segment),
        }
    }

    let mut out = String::with_capacity(target.len() + 1);
    for segment in &segments {
        out.push('/');
        out.push_str(segment);
    }
    if out.is_empty() || (target.ends_with('/') && !segments.is_empty()) {
        out.push('/');
    }

    if out == target {
        Cow::Borrowed(target)
    } else {
        Cow::Owned(out)
    }
}
