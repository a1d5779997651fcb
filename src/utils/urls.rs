//! URL helpers for image sources.

use url::{Position, Url};

/// Resolve an image `src` against the page URL.
///
/// Sources that already start with `http://` or `https://` are returned as-is.
/// Everything else (relative, root-relative, protocol-relative) goes through
/// standard URL joining; a source that cannot be joined is kept verbatim.
///
/// Joining percent-encodes spaces and non-ASCII characters. Unless the source
/// was already percent-encoded, those escapes are decoded again so a relative
/// source keeps its characters as written, like an absolute one does.
pub fn resolve_url(base: &Url, src: &str) -> String {
    if src.starts_with("http://") || src.starts_with("https://") {
        return src.to_string();
    }

    match base.join(src) {
        Ok(resolved) if src.contains('%') => resolved.to_string(),
        Ok(resolved) => {
            let tail = &resolved[Position::BeforePath..];
            match urlencoding::decode(tail) {
                Ok(decoded) => format!("{}{}", &resolved[..Position::BeforePath], decoded),
                Err(_) => resolved.to_string(),
            }
        }
        Err(e) => {
            tracing::debug!("Keeping unresolvable image source {:?}: {}", src, e);
            src.to_string()
        }
    }
}

/// Text after the last `/` of a URL, or the whole URL if it has none
pub fn filename_from_url(url: &str) -> &str {
    url.rsplit('/').next().unwrap_or(url)
}
