//! JSON file writing shared by every output.
//!
//! Files are pretty-printed with two-space indentation. Non-ASCII text is
//! written as UTF-8, never `\u` escaped, and every file is replaced in full
//! on each run.

use crate::error::{BuildError, Result};
use crate::utils::{ensure_dir, file_size};
use serde::Serialize;
use std::fs;
use std::path::Path;
use tracing::{info, instrument};

/// Serialize `records` to `path`, creating the parent directory if needed.
///
/// # Returns
///
/// The size of the written file in bytes.
#[instrument(level = "debug", skip_all, fields(path = %path.display()))]
pub fn write_pretty<T: Serialize + ?Sized>(records: &T, path: &Path) -> Result<u64> {
    let json = serde_json::to_string_pretty(records).map_err(|e| BuildError::json(path, e))?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        ensure_dir(parent)?;
    }

    fs::write(path, json).map_err(|e| BuildError::io(path, e))?;
    let size = file_size(path)?;
    info!(path = %path.display(), bytes = size, "Wrote JSON file");
    Ok(size)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{TopicEpisode, TopicRecord};
    use tempfile::TempDir;

    #[test]
    fn test_write_pretty_formatting() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("topics.json");
        let topics = vec![TopicRecord {
            name: "cafe".to_string(),
            display_name: "Café Culture".to_string(),
            count: 1,
            episodes: vec![TopicEpisode {
                guest: "Zoë".to_string(),
                slug: "zoe".to_string(),
            }],
        }];

        let size = write_pretty(&topics, &path).unwrap();
        let written = fs::read_to_string(&path).unwrap();

        assert_eq!(size, written.len() as u64);
        assert!(written.starts_with("[\n  {\n    \"name\": \"cafe\","));
        assert!(written.contains("\"display_name\": \"Café Culture\""));
        assert!(written.contains("\"guest\": \"Zoë\""));
        assert!(!written.contains("\\u"));
    }

    #[test]
    fn test_write_pretty_creates_parent_and_overwrites() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("docs").join("data").join("episodes.json");

        write_pretty(&vec![1, 2, 3], &path).unwrap();
        write_pretty(&Vec::<u32>::new(), &path).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "[]");
    }
}
