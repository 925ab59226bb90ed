//! Topic dataset builder.
//!
//! Every `*.md` file in the topic directory (other than `README.md` and
//! `episodes.md`, dotfiles included) is a topic. Its episodes are the markdown links of the form
//! `[Guest Name](../episodes/<slug>/transcript.md)`, in the order they appear.

use crate::config::{BuildPaths, RESERVED_TOPIC_FILES};
use crate::error::{BuildError, Result};
use crate::models::{TopicEpisode, TopicRecord};
use crate::outputs::json::write_pretty;
use crate::utils::title_case;
use itertools::Itertools;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fs;
use std::path::Path;
use tracing::{debug, info, instrument};

static EPISODE_LINK_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\[(.*?)\]\(\.\./episodes/(.*?)/transcript\.md\)")
        .expect("episode link regex is valid")
});

/// Build and write `topics.json`.
///
/// # Returns
///
/// The topics, most-referenced first.
///
/// # Errors
///
/// Any failure to list or read the topic directory, or to write the output.
#[instrument(level = "info", skip_all, fields(topics_dir = %paths.topics_dir.display()))]
pub fn build(paths: &BuildPaths) -> Result<Vec<TopicRecord>> {
    let topics = collect_topics(&paths.topics_dir)?;

    let output_path = paths.topics_file();
    write_pretty(&topics, &output_path)?;
    info!(count = topics.len(), "Successfully processed {} topics", topics.len());
    info!(path = %output_path.display(), "Output written to: {}", output_path.display());

    Ok(topics)
}

/// Read every topic file under `topics_dir` and sort by episode count.
///
/// Files are read in filename order; the sort is stable, so topics with the
/// same count keep that order.
pub fn collect_topics(topics_dir: &Path) -> Result<Vec<TopicRecord>> {
    let entries = fs::read_dir(topics_dir)
        .and_then(|rd| rd.collect::<std::io::Result<Vec<_>>>())
        .map_err(|e| BuildError::io(topics_dir, e))?;

    let mut topics = Vec::new();
    for entry in entries.into_iter().sorted_by_key(|e| e.file_name()) {
        let file_name = entry.file_name().to_string_lossy().into_owned();
        let Some(name) = topic_name(&file_name) else {
            continue;
        };
        let path = entry.path();
        if !path.is_file() {
            continue;
        }

        let content = fs::read_to_string(&path).map_err(|e| BuildError::io(&path, e))?;
        let topic = topic_from_markdown(name, &content);
        debug!(topic = %topic.name, count = topic.count, "Parsed topic");
        topics.push(topic);
    }

    topics.sort_by(|a, b| b.count.cmp(&a.count));
    Ok(topics)
}

/// Topic name for a file in the topic directory, or `None` if the file is
/// not a topic.
fn topic_name(file_name: &str) -> Option<&str> {
    if RESERVED_TOPIC_FILES.contains(&file_name) {
        return None;
    }
    file_name.strip_suffix(".md")
}

/// Build a topic record from a topic file's name and markdown text.
pub fn topic_from_markdown(name: &str, content: &str) -> TopicRecord {
    let episodes = extract_episode_links(content);
    TopicRecord {
        name: name.to_string(),
        display_name: display_name(name),
        count: episodes.len(),
        episodes,
    }
}

/// `software-architecture` -> `Software Architecture`.
pub fn display_name(name: &str) -> String {
    title_case(&name.replace('-', " "))
}

/// All episode links in `content`, top to bottom, duplicates included.
pub fn extract_episode_links(content: &str) -> Vec<TopicEpisode> {
    EPISODE_LINK_RE
        .captures_iter(content)
        .map(|caps| TopicEpisode {
            guest: caps[1].to_string(),
            slug: caps[2].to_string(),
        })
        .collect()
}
