//! Fatal build errors.
//!
//! Anything surfaced as a [`BuildError`] ends the run. Per-file frontmatter
//! problems are not errors at this level; see
//! [`FrontmatterError`](crate::frontmatter::FrontmatterError).

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    /// Filesystem failure while reading inputs or writing outputs.
    #[error("I/O error at {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Records could not be serialized for the given output file.
    #[error("failed to serialize {path:?}: {source}")]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, BuildError>;

impl BuildError {
    /// Wrap a `std::io::Error` with the path it happened on.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn json(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::Json {
            path: path.into(),
            source,
        }
    }
}
