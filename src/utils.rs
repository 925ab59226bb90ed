//! Utility functions for string shaping and file system operations.
//!
//! This module provides helpers used by both builders:
//! - Character-safe truncation for transcript previews
//! - Title casing for topic display names
//! - Output directory creation and file size reporting

use crate::error::{BuildError, Result};
use std::fs;
use std::path::Path;
use tracing::{debug, instrument};

/// Truncate a string to at most `max` characters.
///
/// Counts Unicode scalar values, not bytes, so the cut never lands inside a
/// multi-byte character.
///
/// # Returns
///
/// `None` if `s` already fits, otherwise the first `max` characters.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(truncate_chars("short", 100), None);
/// assert_eq!(truncate_chars("héllo", 2), Some("hé"));
/// ```
pub fn truncate_chars(s: &str, max: usize) -> Option<&str> {
    s.char_indices().nth(max).map(|(byte_idx, _)| &s[..byte_idx])
}

/// Title-case a string word by word.
///
/// A word starts after any character without case (digits, punctuation,
/// CJK ideographs); its first letter is upper-cased and the rest lower-cased.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(title_case("software architecture"), "Software Architecture");
/// assert_eq!(title_case("3d printing"), "3D Printing");
/// ```
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_word = false;
    for c in s.chars() {
        if in_word {
            out.extend(c.to_lowercase());
        } else {
            out.extend(c.to_uppercase());
        }
        in_word = c.is_lowercase() || c.is_uppercase();
    }
    out
}

/// Create a directory and all of its parents. Succeeds if it already exists.
#[instrument(level = "debug", skip_all, fields(path = %path.display()))]
pub fn ensure_dir(path: &Path) -> Result<()> {
    fs::create_dir_all(path).map_err(|e| BuildError::io(path, e))?;
    debug!("Output directory ready");
    Ok(())
}

/// Size of a file on disk in bytes.
pub fn file_size(path: &Path) -> Result<u64> {
    fs::metadata(path)
        .map(|m| m.len())
        .map_err(|e| BuildError::io(path, e))
}

/// Bytes to mebibytes, as reported in build summaries.
pub fn to_mb(bytes: u64) -> f64 {
    bytes as f64 / (1024.0 * 1024.0)
}

/// Bytes to kibibytes, as reported in build summaries.
pub fn to_kb(bytes: u64) -> f64 {
    bytes as f64 / 1024.0
}
