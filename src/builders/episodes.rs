//! Episode dataset builder.
//!
//! Reads `<episodes_dir>/<slug>/transcript.md` for every episode directory
//! and writes both `episodes.json` and `episodes-index.json`.
//!
//! A directory without a transcript is an episode that has not been
//! transcribed yet and is skipped quietly. A transcript whose frontmatter
//! cannot be parsed is skipped with a warning.

use crate::config::{BuildPaths, TRANSCRIPT_FILE_NAME};
use crate::error::{BuildError, Result};
use crate::frontmatter;
use crate::models::EpisodeRecord;
use crate::outputs::indexes::write_episode_index;
use crate::outputs::json::write_pretty;
use crate::utils::{ensure_dir, to_kb, to_mb};
use itertools::Itertools;
use std::fs;
use std::path::Path;
use tracing::{debug, info, instrument, warn};

/// Build and write the full episode dataset and its index.
///
/// # Returns
///
/// The episode records in directory-name order.
///
/// # Errors
///
/// Any I/O failure other than a missing transcript file, or a failure to
/// write either output file.
#[instrument(level = "info", skip_all, fields(episodes_dir = %paths.episodes_dir.display()))]
pub fn build(paths: &BuildPaths) -> Result<Vec<EpisodeRecord>> {
    let episodes = collect_episodes(&paths.episodes_dir)?;

    ensure_dir(&paths.output_dir)?;

    let full_path = paths.episodes_file();
    let full_size = write_pretty(&episodes, &full_path)?;
    info!(count = episodes.len(), "Successfully processed {} episodes", episodes.len());
    info!(path = %full_path.display(), "Output written to: {}", full_path.display());
    info!(bytes = full_size, "File size: {:.2} MB", to_mb(full_size));

    let index_path = paths.episodes_index_file();
    let index_size = write_episode_index(&episodes, &index_path)?;
    info!(path = %index_path.display(), "Index file written to: {}", index_path.display());
    info!(bytes = index_size, "Index file size: {:.2} KB", to_kb(index_size));

    Ok(episodes)
}

/// Parse every episode directory under `episodes_dir`, sorted by name.
pub fn collect_episodes(episodes_dir: &Path) -> Result<Vec<EpisodeRecord>> {
    let entries = fs::read_dir(episodes_dir)
        .and_then(|rd| rd.collect::<std::io::Result<Vec<_>>>())
        .map_err(|e| BuildError::io(episodes_dir, e))?;

    let mut episodes = Vec::new();
    for entry in entries.into_iter().sorted_by_key(|e| e.file_name()) {
        let episode_dir = entry.path();
        if !episode_dir.is_dir() {
            continue;
        }

        let transcript_path = episode_dir.join(TRANSCRIPT_FILE_NAME);
        if !transcript_path.exists() {
            debug!(dir = %episode_dir.display(), "No transcript yet; skipping");
            continue;
        }

        let content = fs::read_to_string(&transcript_path)
            .map_err(|e| BuildError::io(&transcript_path, e))?;
        let fm = match frontmatter::parse(&content) {
            Ok(fm) => fm,
            Err(e) => {
                warn!(
                    path = %transcript_path.display(),
                    error = %e,
                    "Warning: Could not parse {}",
                    transcript_path.display()
                );
                continue;
            }
        };

        let slug = entry.file_name().to_string_lossy().into_owned();
        let episode = EpisodeRecord::from_frontmatter(slug, &fm.meta, fm.body);
        info!(slug = %episode.slug, "Processed: {}", episode.guest);
        episodes.push(episode);
    }

    Ok(episodes)
}
