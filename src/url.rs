//! Preset URL and extension helpers.
//!
//! A preset location is either a bare filesystem path or `<scheme>://<rest>`.
//! The scheme is everything before the first `://`; nothing else is sniffed.

use std::path::Path;

const SCHEME_SEPARATOR: &str = "://";

/// Split `url` into its scheme (lowercased) and the remainder.
/// Returns `None` for the scheme when `url` contains no `://`.
pub fn split_scheme(url: &str) -> (Option<String>, &str) {
    match url.split_once(SCHEME_SEPARATOR) {
        Some((scheme, rest)) => (Some(scheme.to_ascii_lowercase()), rest),
        None => (None, url),
    }
}

/// Normalize an extension tag: surrounding whitespace and one leading `.`
/// are dropped, the rest is lowercased.
pub fn normalize_extension(extension: &str) -> String {
    let trimmed = extension.trim();
    trimmed
        .strip_prefix('.')
        .unwrap_or(trimmed)
        .to_lowercase()
}

/// Extension of the file name in `path`, normalized. `None` when the file
/// name has no extension (including dotfiles such as `.milk`).
pub fn parse_extension(path: &str) -> Option<String> {
    extension_of(Path::new(path))
}

/// Same as [`parse_extension`] for paths that need not be valid UTF-8 as a
/// whole. The extension itself still has to be.
pub fn extension_of(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .filter(|ext| !ext.is_empty())
        .map(normalize_extension)
}
