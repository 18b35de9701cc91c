//! Data model for the news digest.
//!
//! [`NewsItem`] is the unit that flows from the `/api/news` response through
//! partitioning and into the rendered cards. Items are never mutated after
//! they are fetched.

use serde::{Deserialize, Deserializer};

/// One summarized article as served by the news backend.
///
/// The backend also sends `content` and `created_at`; those fields are not
/// displayed and are ignored on deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NewsItem {
    /// Stable identifier, the only key used for card identity.
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    /// Origin feed identifier (e.g. `aitimes.kr`). Used purely as a grouping key.
    pub source: String,
    /// Headline, displayed verbatim.
    pub title: String,
    /// LLM summary. Absent, `null` and empty all mean "not produced yet".
    #[serde(default)]
    pub summary: Option<String>,
    /// Pre-formatted publication time, displayed verbatim.
    pub published_at: String,
    /// Link to the original article.
    pub url: String,
}

impl NewsItem {
    /// The summary text, if there is any to show.
    pub fn summary_text(&self) -> Option<&str> {
        self.summary.as_deref().filter(|s| !s.is_empty())
    }
}

/// The backend's ids are SQL serials, but a string id is just as valid.
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Int(i64),
        Uint(u64),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(s) => s,
        RawId::Int(n) => n.to_string(),
        RawId::Uint(n) => n.to_string(),
    })
}
