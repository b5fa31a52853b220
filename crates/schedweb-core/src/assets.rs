//! Static asset primitives: request path normalization, root-relative
//! resolution, content type lookup and cache policy.
//!
//! Everything here is pure; file I/O lives in the server crate.

use std::path::{Component, Path, PathBuf};

use crate::error::{Result, SchedWebError};

/// Document served for `/`.
pub const DEFAULT_DOCUMENT: &str = "/index.html";

/// Fallback for unknown extensions.
pub const OCTET_STREAM: &str = "application/octet-stream";

/// Cache policy for textual content.
pub const CACHE_NONE: &str = "no-cache";

/// Cache policy for everything else (one week).
pub const CACHE_ONE_WEEK: &str = "public, max-age=604800";

const CONTENT_TYPES: [(&str, &str); 7] = [
    ("html", "text/html; charset=utf-8"),
    ("js", "text/javascript; charset=utf-8"),
    ("css", "text/css; charset=utf-8"),
    ("json", "application/json; charset=utf-8"),
    ("svg", "image/svg+xml; charset=utf-8"),
    ("png", "image/png"),
    ("ico", "image/x-icon"),
];

/// Decode a request path and strip traversal tokens.
///
/// The query string is cut, percent escapes are decoded, `/` becomes
/// [`DEFAULT_DOCUMENT`], and every `..` substring is removed. Decoding that
/// does not yield UTF-8 is reported as `Internal`.
///
/// Every escape is decoded, reserved ones included: `%2F` becomes a path
/// separator and `%3F` a literal `?` inside the file name. Malformed escapes
/// such as `%zz` are kept as literal text. Traversal stripping runs after
/// decoding, so an encoded `..` is removed as well.
pub fn normalize_request_path(raw: &str) -> Result<String> {
    let path = match raw.split_once('?') {
        Some((p, _)) => p,
        None => raw,
    };

    let decoded = urlencoding::decode(path)
        .map_err(|e| SchedWebError::Internal(format!("undecodable request path: {e}")))?;

    let normalized = if decoded == "/" {
        DEFAULT_DOCUMENT.to_string()
    } else {
        decoded.into_owned()
    };

    Ok(normalized.replace("..", ""))
}

/// Join a normalized request path beneath `root`.
///
/// Root and `.` components are skipped; only plain segments are appended, so
/// the result always has `root` as a prefix.
pub fn resolve_under(root: &Path, normalized: &str) -> Result<PathBuf> {
    let mut out = root.to_path_buf();
    for comp in Path::new(normalized).components() {
        match comp {
            Component::RootDir | Component::CurDir => {}
            Component::Normal(seg) => out.push(seg),
            Component::ParentDir | Component::Prefix(_) => {
                tracing::debug!(path = %normalized, "refusing non-plain path component");
                return Err(SchedWebError::NotFound(normalized.to_string()));
            }
        }
    }
    Ok(out)
}

/// Content type inferred from the (case-insensitive) file extension.
pub fn content_type_for(path: &Path) -> &'static str {
    let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
        return OCTET_STREAM;
    };
    let ext = ext.to_ascii_lowercase();
    CONTENT_TYPES
        .iter()
        .find(|(known, _)| *known == ext)
        .map(|(_, ct)| *ct)
        .unwrap_or(OCTET_STREAM)
}

/// `Cache-Control` value for a content type: textual types are not cached.
pub fn cache_control_for(content_type: &str) -> &'static str {
    if content_type.starts_with("text/") {
        CACHE_NONE
    } else {
        CACHE_ONE_WEEK
    }
}
