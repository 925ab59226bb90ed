//! YAML frontmatter extraction for transcript files.
//!
//! A transcript starts with a block like:
//!
//! ```text
//! ---
//! guest: "Jane Doe"
//! publish_date: 2024-01-15
//! ---
//! Body text...
//! ```
//!
//! The YAML payload is returned as an untyped [`Mapping`]; callers copy the
//! fields they need into typed records straight away. A key repeated within
//! one mapping keeps its last value.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::de::{
    self, Deserialize, Deserializer, EnumAccess, MapAccess, SeqAccess, VariantAccess, Visitor,
};
use serde_yaml::value::{Tag, TaggedValue};
use serde_yaml::{Mapping, Number, Value};
use std::fmt;

static FRONTMATTER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)\A---\s*\n(.*?)\n---\s*\n(.*)").expect("frontmatter regex is valid")
});

/// Why a file did not yield frontmatter.
///
/// The episode builder treats every variant the same way (warn and skip);
/// the distinction only shows up in the log line.
#[derive(Debug, thiserror::Error)]
pub enum FrontmatterError {
    #[error("no frontmatter block")]
    Missing,

    #[error("invalid YAML in frontmatter: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("frontmatter is empty")]
    Empty,

    #[error("frontmatter is not a key/value mapping")]
    NotAMapping,
}

/// Parsed frontmatter plus the text that follows the closing delimiter.
#[derive(Debug)]
pub struct Frontmatter<'a> {
    pub meta: Mapping,
    pub body: &'a str,
}

/// Split `content` into its frontmatter mapping and body.
pub fn parse(content: &str) -> Result<Frontmatter<'_>, FrontmatterError> {
    let caps = FRONTMATTER_RE
        .captures(content)
        .ok_or(FrontmatterError::Missing)?;
    let (Some(payload), Some(body)) = (caps.get(1), caps.get(2)) else {
        return Err(FrontmatterError::Missing);
    };
    if payload.as_str().trim().is_empty() {
        return Err(FrontmatterError::Empty);
    }

    let LastWins(document) = serde_yaml::from_str(payload.as_str())?;
    match document {
        Value::Null => Err(FrontmatterError::Empty),
        Value::Mapping(meta) if meta.is_empty() => Err(FrontmatterError::Empty),
        Value::Mapping(meta) => Ok(Frontmatter {
            meta,
            body: body.as_str(),
        }),
        _ => Err(FrontmatterError::NotAMapping),
    }
}

/// A YAML document read into a [`Value`], where a repeated mapping key
/// overwrites the earlier entry instead of failing the whole document.
struct LastWins(Value);

impl<'de> Deserialize<'de> for LastWins {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(LastWinsVisitor).map(LastWins)
    }
}

struct LastWinsVisitor;

impl<'de> Visitor<'de> for LastWinsVisitor {
    type Value = Value;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("any YAML value")
    }

    fn visit_bool<E: de::Error>(self, b: bool) -> Result<Value, E> {
        Ok(Value::Bool(b))
    }

    fn visit_i64<E: de::Error>(self, n: i64) -> Result<Value, E> {
        Ok(Value::Number(n.into()))
    }

    fn visit_u64<E: de::Error>(self, n: u64) -> Result<Value, E> {
        Ok(Value::Number(n.into()))
    }

    fn visit_f64<E: de::Error>(self, n: f64) -> Result<Value, E> {
        Ok(Value::Number(Number::from(n)))
    }

    fn visit_str<E: de::Error>(self, s: &str) -> Result<Value, E> {
        Ok(Value::String(s.to_string()))
    }

    fn visit_string<E: de::Error>(self, s: String) -> Result<Value, E> {
        Ok(Value::String(s))
    }

    fn visit_unit<E: de::Error>(self) -> Result<Value, E> {
        Ok(Value::Null)
    }

    fn visit_none<E: de::Error>(self) -> Result<Value, E> {
        Ok(Value::Null)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Value, D::Error> {
        LastWins::deserialize(deserializer).map(|v| v.0)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Value, A::Error> {
        let mut items = Vec::new();
        while let Some(LastWins(item)) = seq.next_element()? {
            items.push(item);
        }
        Ok(Value::Sequence(items))
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Value, A::Error> {
        let mut mapping = Mapping::new();
        while let Some((LastWins(key), LastWins(value))) = map.next_entry()? {
            mapping.insert(key, value);
        }
        Ok(Value::Mapping(mapping))
    }

    fn visit_enum<A: EnumAccess<'de>>(self, data: A) -> Result<Value, A::Error> {
        let (tag, variant): (String, _) = data.variant()?;
        let LastWins(value) = variant.newtype_variant()?;
        Ok(Value::Tagged(Box::new(TaggedValue {
            tag: Tag::new(tag),
            value,
        })))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn get<'a>(meta: &'a Mapping, key: &str) -> Option<&'a Value> {
        meta.get(Value::String(key.to_string()))
    }

    #[test]
    fn test_parse_valid_block() {
        let text = "---\nguest: \"Jane Doe\"\ntitle: On Systems\n---\nHello world.\n";
        let fm = parse(text).unwrap();

        assert_eq!(get(&fm.meta, "guest").and_then(Value::as_str), Some("Jane Doe"));
        assert_eq!(get(&fm.meta, "title").and_then(Value::as_str), Some("On Systems"));
        assert_eq!(fm.body, "Hello world.\n");
    }

    #[test]
    fn test_body_may_contain_delimiters() {
        let text = "---\nguest: A\n---\nfirst\n---\nsecond\n";
        let fm = parse(text).unwrap();
        assert_eq!(fm.body, "first\n---\nsecond\n");
    }

    #[test]
    fn test_trailing_whitespace_on_delimiters() {
        let text = "---  \nguest: A\n---\t\nbody";
        let fm = parse(text).unwrap();
        assert_eq!(get(&fm.meta, "guest").and_then(Value::as_str), Some("A"));
        assert_eq!(fm.body, "body");
    }

    #[test]
    fn test_crlf_line_endings() {
        let text = "---\r\nguest: A\r\n---\r\nbody\r\n";
        let fm = parse(text).unwrap();
        assert_eq!(get(&fm.meta, "guest").and_then(Value::as_str), Some("A"));
        assert_eq!(fm.body, "body\r\n");
    }

    #[test]
    fn test_duplicate_keys_keep_last_value() {
        let text = "---\nguest: A\ntitle: T\nguest: B\n---\nbody";
        let fm = parse(text).unwrap();

        assert_eq!(get(&fm.meta, "guest").and_then(Value::as_str), Some("B"));
        assert_eq!(get(&fm.meta, "title").and_then(Value::as_str), Some("T"));
        assert_eq!(fm.meta.len(), 2);
    }

    #[test]
    fn test_nested_values_survive() {
        let text = "---\nkeywords: [a, 2, 1.5, true, ~]\nextra: {x: 1, x: 2}\n---\n";
        let fm = parse(text).unwrap();

        let keywords = get(&fm.meta, "keywords").and_then(Value::as_sequence).unwrap();
        assert_eq!(keywords.len(), 5);
        assert_eq!(keywords[1].as_u64(), Some(2));
        assert_eq!(keywords[2].as_f64(), Some(1.5));
        assert_eq!(keywords[3].as_bool(), Some(true));
        assert!(keywords[4].is_null());

        let extra = get(&fm.meta, "extra").and_then(Value::as_mapping).unwrap();
        assert_eq!(extra.get("x").and_then(Value::as_u64), Some(2));
    }

    #[test]
    fn test_missing_block() {
        assert!(matches!(
            parse("Just a transcript.\n"),
            Err(FrontmatterError::Missing)
        ));
    }

    #[test]
    fn test_block_must_start_at_beginning() {
        let text = "intro\n---\nguest: A\n---\nbody";
        assert!(matches!(parse(text), Err(FrontmatterError::Missing)));
    }

    #[test]
    fn test_unclosed_block() {
        let text = "---\nguest: A\nno closing delimiter\n";
        assert!(matches!(parse(text), Err(FrontmatterError::Missing)));
    }

    #[test]
    fn test_invalid_yaml() {
        let text = "---\nguest: [unclosed\n---\nbody";
        assert!(matches!(parse(text), Err(FrontmatterError::Yaml(_))));
    }

    #[test]
    fn test_empty_and_scalar_payloads() {
        assert!(matches!(
            parse("---\n\n---\nbody"),
            Err(FrontmatterError::Empty)
        ));
        assert!(matches!(
            parse("---\n{}\n---\nbody"),
            Err(FrontmatterError::Empty)
        ));
        assert!(matches!(
            parse("---\njust a string\n---\nbody"),
            Err(FrontmatterError::NotAMapping)
        ));
    }
}
