//! YAML front matter between `---` fences.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer};

const FENCE: &str = "---";

/// Known front matter keys. Unknown keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct FrontMatter {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub excerpt: Option<String>,
    /// A list, or a single scalar such as `tags: rust`.
    #[serde(default, deserialize_with = "one_or_many")]
    pub tags: Vec<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

fn one_or_many<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<OneOrMany>::deserialize(deserializer)? {
        None => Vec::new(),
        Some(OneOrMany::One(tag)) => vec![tag],
        Some(OneOrMany::Many(tags)) => tags,
    })
}

/// Split a document into front matter and body.
///
/// A document without an opening fence has empty front matter and the whole
/// text as body. An opening fence without a closing one is an error.
pub fn split(source: &str) -> Result<(FrontMatter, &str), String> {
    let source = source.strip_prefix('\u{feff}').unwrap_or(source);
    let Some(rest) = strip_fence_line(source) else {
        return Ok((FrontMatter::default(), source));
    };

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end() == FENCE {
            let yaml = &rest[..offset];
            let body = &rest[offset + line.len()..];
            let matter = parse_yaml(yaml)?;
            return Ok((matter, body.strip_prefix('\n').unwrap_or(body)));
        }
        offset += line.len();
    }

    Err("unterminated front matter".to_string())
}

fn strip_fence_line(source: &str) -> Option<&str> {
    let rest = source.strip_prefix(FENCE)?;
    if let Some(rest) = rest.strip_prefix("\r\n") {
        Some(rest)
    } else {
        rest.strip_prefix('\n')
    }
}

fn parse_yaml(yaml: &str) -> Result<FrontMatter, String> {
    if yaml.trim().is_empty() {
        return Ok(FrontMatter::default());
    }
    serde_yaml::from_str(yaml).map_err(|e| e.to_string())
}

/// Parse a front matter date: `YYYY-MM-DD`, `YYYY-MM-DD HH:MM:SS` or RFC 3339.
pub fn parse_date(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0);
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S") {
        return Some(dt);
    }
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|dt| dt.naive_utc())
}
