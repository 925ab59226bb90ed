//! Data models for the generated JSON files.
//!
//! This module defines the records serialized to `docs/data/`:
//! - [`EpisodeRecord`]: one episode with its full transcript (`episodes.json`)
//! - [`EpisodeIndexRecord`]: the same episode with a short preview instead of
//!   the transcript (`episodes-index.json`)
//! - [`TopicRecord`] and [`TopicEpisode`]: topic to episode links (`topics.json`)
//!
//! Field declaration order is the JSON key order, which the web client and
//! diff-friendly rebuilds both rely on.

use crate::config::PREVIEW_CHARS;
use crate::utils::truncate_chars;
use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat};
use serde::{Deserialize, Serialize};
use serde_yaml::{Mapping, Value};
use tracing::debug;

/// A single episode as published to `episodes.json`.
///
/// Built from the frontmatter and body of `episodes/<slug>/transcript.md`.
/// Every metadata field has a default so a sparse frontmatter block still
/// yields a complete record.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct EpisodeRecord {
    /// Name of the episode directory.
    pub slug: String,
    pub guest: String,
    pub title: String,
    pub youtube_url: String,
    pub video_id: String,
    /// ISO-8601 date (or date-time) string.
    pub publish_date: String,
    pub description: String,
    pub duration_seconds: u64,
    /// Human-readable duration such as `"1:02:33"`.
    pub duration: String,
    pub view_count: u64,
    pub channel: String,
    pub keywords: Vec<String>,
    /// Body text after the frontmatter, trimmed.
    pub transcript: String,
}

impl EpisodeRecord {
    /// Copy frontmatter fields into a typed record, applying defaults.
    pub fn from_frontmatter(slug: impl Into<String>, meta: &Mapping, body: &str) -> Self {
        Self {
            slug: slug.into(),
            guest: text_field(meta, "guest"),
            title: text_field(meta, "title"),
            youtube_url: text_field(meta, "youtube_url"),
            video_id: text_field(meta, "video_id"),
            publish_date: meta.get("publish_date").map(date_value).unwrap_or_default(),
            description: text_field(meta, "description"),
            duration_seconds: count_field(meta, "duration_seconds"),
            duration: text_field(meta, "duration"),
            view_count: count_field(meta, "view_count"),
            channel: text_field(meta, "channel"),
            keywords: meta.get("keywords").map(keyword_list).unwrap_or_default(),
            transcript: body.trim().to_string(),
        }
    }
}

/// An episode as published to `episodes-index.json`.
///
/// Identical to [`EpisodeRecord`] except the transcript is replaced by its
/// first 500 characters, so the client can render the episode list without
/// downloading every transcript.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct EpisodeIndexRecord {
    pub slug: String,
    pub guest: String,
    pub title: String,
    pub youtube_url: String,
    pub video_id: String,
    pub publish_date: String,
    pub description: String,
    pub duration_seconds: u64,
    pub duration: String,
    pub view_count: u64,
    pub channel: String,
    pub keywords: Vec<String>,
    /// Leading slice of the transcript, suffixed with `...` when cut.
    pub transcript_preview: String,
}

impl From<&EpisodeRecord> for EpisodeIndexRecord {
    fn from(ep: &EpisodeRecord) -> Self {
        Self {
            slug: ep.slug.clone(),
            guest: ep.guest.clone(),
            title: ep.title.clone(),
            youtube_url: ep.youtube_url.clone(),
            video_id: ep.video_id.clone(),
            publish_date: ep.publish_date.clone(),
            description: ep.description.clone(),
            duration_seconds: ep.duration_seconds,
            duration: ep.duration.clone(),
            view_count: ep.view_count,
            channel: ep.channel.clone(),
            keywords: ep.keywords.clone(),
            transcript_preview: transcript_preview(&ep.transcript),
        }
    }
}

/// First [`PREVIEW_CHARS`] characters of a transcript plus `...`, or the
/// whole transcript when it is not longer than that.
pub fn transcript_preview(transcript: &str) -> String {
    match truncate_chars(transcript, PREVIEW_CHARS) {
        Some(head) => format!("{head}..."),
        None => transcript.to_string(),
    }
}

/// One link from a topic page to an episode.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct TopicEpisode {
    /// Link text, normally the guest's name.
    pub guest: String,
    pub slug: String,
}

/// A topic page and the episodes it links to, as published to `topics.json`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct TopicRecord {
    /// File stem, e.g. `software-architecture`.
    pub name: String,
    /// e.g. `Software Architecture`.
    pub display_name: String,
    /// Always `episodes.len()`.
    pub count: usize,
    /// In link order; duplicates kept.
    pub episodes: Vec<TopicEpisode>,
}

fn text_field(meta: &Mapping, key: &str) -> String {
    match meta.get(key) {
        Some(value) => scalar_text(value).unwrap_or_else(|| {
            debug!(key, "Non-scalar frontmatter value; using empty string");
            String::new()
        }),
        None => String::new(),
    }
}

/// Render a YAML scalar as text. `null` becomes the empty string;
/// sequences and mappings have no text form.
fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => Some(String::new()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::String(s) => Some(s.clone()),
        Value::Tagged(tagged) => scalar_text(&tagged.value),
        Value::Sequence(_) | Value::Mapping(_) => None,
    }
}

fn count_field(meta: &Mapping, key: &str) -> u64 {
    let Some(value) = meta.get(key) else {
        return 0;
    };
    count_value(value).unwrap_or_else(|| {
        debug!(key, ?value, "Frontmatter value is not a count; using 0");
        0
    })
}

fn count_value(value: &Value) -> Option<u64> {
    match value {
        Value::Number(n) => n
            .as_u64()
            .or_else(|| n.as_f64().filter(|f| f.is_finite() && *f >= 0.0).map(|f| f as u64)),
        Value::String(s) => s.trim().parse::<u64>().ok(),
        Value::Tagged(tagged) => count_value(&tagged.value),
        _ => None,
    }
}

/// Normalize a `publish_date` value to an ISO-8601 string.
fn date_value(value: &Value) -> String {
    let Some(raw) = scalar_text(value) else {
        debug!(?value, "publish_date is not a scalar; using empty string");
        return String::new();
    };
    normalize_date(&raw)
}

pub(crate) fn normalize_date(raw: &str) -> String {
    let raw = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.format("%Y-%m-%d").to_string();
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.to_rfc3339_opts(SecondsFormat::AutoSi, false);
    }
    for fmt in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, fmt) {
            return dt.format("%Y-%m-%dT%H:%M:%S").to_string();
        }
    }
    raw.to_string()
}

fn keyword_list(value: &Value) -> Vec<String> {
    match value {
        Value::Sequence(items) => items
            .iter()
            .filter_map(scalar_text)
            .collect(),
        Value::String(s) if !s.is_empty() => vec![s.clone()],
        Value::Tagged(tagged) => keyword_list(&tagged.value),
        _ => Vec::new(),
    }
}
