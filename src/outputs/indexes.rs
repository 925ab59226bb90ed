//! The lightweight episode index (`episodes-index.json`).
//!
//! The index is always derived from the in-memory [`EpisodeRecord`] list,
//! never by re-reading transcripts, so it can be regenerated from a
//! previously written `episodes.json` and come out identical.

use crate::error::Result;
use crate::models::{EpisodeIndexRecord, EpisodeRecord};
use crate::outputs::json::write_pretty;
use std::path::Path;
use tracing::instrument;

/// One index record per episode, in the same order.
pub fn build_episode_index(episodes: &[EpisodeRecord]) -> Vec<EpisodeIndexRecord> {
    episodes.iter().map(EpisodeIndexRecord::from).collect()
}

/// Derive the index and write it to `path`.
///
/// # Returns
///
/// The size of the written file in bytes.
#[instrument(level = "info", skip_all, fields(path = %path.display(), episodes = episodes.len()))]
pub fn write_episode_index(episodes: &[EpisodeRecord], path: &Path) -> Result<u64> {
    let index = build_episode_index(episodes);
    write_pretty(&index, path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_yaml::Mapping;
    use std::fs;
    use tempfile::TempDir;

    fn episode(slug: &str, transcript: &str) -> EpisodeRecord {
        let meta: Mapping = serde_yaml::from_str(&format!("guest: Guest {slug}\n")).unwrap();
        EpisodeRecord::from_frontmatter(slug, &meta, transcript)
    }

    #[test]
    fn test_build_episode_index_preserves_order() {
        let episodes = vec![episode("b", "two"), episode("a", "one")];
        let index = build_episode_index(&episodes);

        let slugs: Vec<_> = index.iter().map(|r| r.slug.as_str()).collect();
        assert_eq!(slugs, ["b", "a"]);
        assert_eq!(index[0].transcript_preview, "two");
    }

    #[test]
    fn test_index_rederived_from_written_episodes_matches() {
        let tmp = TempDir::new().unwrap();
        let full_path = tmp.path().join("episodes.json");
        let index_path = tmp.path().join("episodes-index.json");
        let episodes = vec![episode("long", &"word ".repeat(300)), episode("short", "hi")];

        write_pretty(&episodes, &full_path).unwrap();
        write_episode_index(&episodes, &index_path).unwrap();

        let reread: Vec<EpisodeRecord> =
            serde_json::from_str(&fs::read_to_string(&full_path).unwrap()).unwrap();
        let rederived = serde_json::to_string_pretty(&build_episode_index(&reread)).unwrap();

        assert_eq!(rederived, fs::read_to_string(&index_path).unwrap());
    }
}
