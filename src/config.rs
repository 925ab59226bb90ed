//! Resolved input and output locations for a build.
//!
//! [`BuildPaths`] is derived once from the [`Cli`](crate::cli::Cli) and passed
//! to both builders, so neither builder ever looks at raw arguments.

use crate::cli::Cli;
use std::path::{Path, PathBuf};

/// File expected inside every episode directory.
pub const TRANSCRIPT_FILE_NAME: &str = "transcript.md";

/// Files in the topic directory that are not topics.
pub const RESERVED_TOPIC_FILES: [&str; 2] = ["README.md", "episodes.md"];

/// Number of characters kept in `transcript_preview`.
pub const PREVIEW_CHARS: usize = 500;

pub const EPISODES_FILE_NAME: &str = "episodes.json";
pub const EPISODES_INDEX_FILE_NAME: &str = "episodes-index.json";
pub const TOPICS_FILE_NAME: &str = "topics.json";

/// Every directory and file a build reads from or writes to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildPaths {
    /// One subdirectory per episode.
    pub episodes_dir: PathBuf,
    /// Topic markdown files.
    pub topics_dir: PathBuf,
    /// Directory holding all three JSON outputs.
    pub output_dir: PathBuf,
}

impl BuildPaths {
    /// Default layout under a project root: `episodes/`, `index/`, `docs/data/`.
    pub fn from_root(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref();
        Self {
            episodes_dir: root.join("episodes"),
            topics_dir: root.join("index"),
            output_dir: root.join("docs").join("data"),
        }
    }

    /// Apply per-directory overrides from the command line on top of the root layout.
    pub fn from_cli(cli: &Cli) -> Self {
        let mut paths = Self::from_root(&cli.root);
        if let Some(dir) = &cli.episodes_dir {
            paths.episodes_dir = PathBuf::from(dir);
        }
        if let Some(dir) = &cli.topics_dir {
            paths.topics_dir = PathBuf::from(dir);
        }
        if let Some(dir) = &cli.output_dir {
            paths.output_dir = PathBuf::from(dir);
        }
        paths
    }

    pub fn episodes_file(&self) -> PathBuf {
        self.output_dir.join(EPISODES_FILE_NAME)
    }

    pub fn episodes_index_file(&self) -> PathBuf {
        self.output_dir.join(EPISODES_INDEX_FILE_NAME)
    }

    pub fn topics_file(&self) -> PathBuf {
        self.output_dir.join(TOPICS_FILE_NAME)
    }
}
