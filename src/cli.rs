//! Command-line interface definitions for the episode data builder.
//!
//! Every flag is optional. Running the binary with no arguments builds all
//! three JSON files from the current directory, which is the normal way it
//! is invoked from the archive root.

use clap::Parser;

/// Command-line arguments for the episode data builder.
///
/// # Examples
///
/// ```sh
/// # Build from the current directory
/// episode_data
///
/// # Build from another checkout
/// episode_data --root ../podcast-archive
///
/// # Write somewhere other than docs/data
/// episode_data --output-dir /tmp/site-data
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Project root containing `episodes/`, `index/` and `docs/`
    #[arg(short, long, env = "BUILD_DATA_ROOT", default_value = ".")]
    pub root: String,

    /// Directory with one subdirectory per episode (default: <root>/episodes)
    #[arg(long)]
    pub episodes_dir: Option<String>,

    /// Directory with topic markdown files (default: <root>/index)
    #[arg(long)]
    pub topics_dir: Option<String>,

    /// Directory the JSON files are written to (default: <root>/docs/data)
    #[arg(short, long)]
    pub output_dir: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_no_arguments() {
        let cli = Cli::parse_from(["episode_data"]);

        assert!(cli.episodes_dir.is_none());
        assert!(cli.topics_dir.is_none());
        assert!(cli.output_dir.is_none());
    }

    #[test]
    fn test_cli_overrides() {
        let cli = Cli::parse_from([
            "episode_data",
            "--root",
            "/srv/archive",
            "--episodes-dir",
            "/data/episodes",
            "--topics-dir",
            "/data/index",
            "-o",
            "/tmp/out",
        ]);

        assert_eq!(cli.root, "/srv/archive");
        assert_eq!(cli.episodes_dir.as_deref(), Some("/data/episodes"));
        assert_eq!(cli.topics_dir.as_deref(), Some("/data/index"));
        assert_eq!(cli.output_dir.as_deref(), Some("/tmp/out"));
    }
}
