// src/config/parsing.rs

use crate::errors::ConfigError;
use regex::Regex;

/// Canonicalizes the configured root path into an absolute-style logical path.
///
/// One leading and one trailing slash are stripped, then a single leading
/// slash is added back. Inner slashes are left alone.
pub(super) fn normalize_root_path(raw: &str) -> String {
    let trimmed = raw.strip_suffix('/').unwrap_or(raw);
    let trimmed = trimmed.strip_prefix('/').unwrap_or(trimmed);
    format!("/{}", trimmed)
}

/// Compiles the optional file name pattern. An empty pattern disables filtering.
pub(super) fn compile_match_pattern(pattern: Option<String>) -> Result<Option<Regex>, ConfigError> {
    match pattern {
        Some(p) if !p.is_empty() => Regex::new(&p)
            .map(Some)
            .map_err(|source| ConfigError::InvalidPattern { pattern: p, source }),
        _ => Ok(None),
    }
}

/// Treats an empty string the same as an absent value.
pub(super) fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
