//! Script tag construction and cache-busting URLs.
//!
//! One tag per served path: `<script type="text/javascript" src="..."></script>`.
//! Release bundles get a revision suffix (`?r={hash}` or `&r={hash}`) unless
//! the hash is already embedded in the filename via the `#` marker.

/// Placeholder in an output path expression that is replaced with the
/// content hash (e.g. `scripts/app-#.js` → `scripts/app-a1b2c3d4.js`).
pub const HASH_MARKER: char = '#';

/// Suffix marking a member file as pre-minified; such files are
/// concatenated verbatim and never passed through a compressor.
pub const MIN_JS_SUFFIX: &str = ".min.js";

/// Format a single script tag for the given src path.
#[inline]
pub fn script(src: &str) -> String {
    format!("<script type=\"text/javascript\" src=\"{src}\"></script>")
}

/// Append a revision hash to a path as a cache-busting query parameter.
///
/// Uses `&` when the path already carries a query string, `?` otherwise.
pub fn with_revision(path: &str, hash: &str) -> String {
    if path.contains('?') {
        format!("{path}&r={hash}")
    } else {
        format!("{path}?r={hash}")
    }
}
