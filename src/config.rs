//! Page configuration: which sources get a section, and the static page text.
//!
//! Loaded from an optional YAML file. Every field has a default, so a file
//! only needs to name what it changes:
//!
//! ```yaml
//! title: AI DAILY NEWS SUMMARY
//! sections:
//!   - source: aitimes.kr
//!     title: 인공지능신문
//!   - source: aitimes.com
//!     title: AI타임즈
//! ```

use chrono::{Datelike, Local};
use serde::Deserialize;
use std::error::Error;
use std::path::Path;
use tracing::{info, instrument};

/// A rendered feed: items whose `source` equals `source`, under `title`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Section {
    pub source: String,
    pub title: String,
}

impl Section {
    /// Build a section from borrowed strings.
    ///
    /// # Examples
    ///
    /// ```ignore
    /// let section = Section::new("aitimes.kr", "인공지능신문");
    /// assert_eq!(section.source, "aitimes.kr");
    /// ```
    pub fn new(source: &str, title: &str) -> Self {
        Self {
            source: source.to_string(),
            title: title.to_string(),
        }
    }
}

/// Static text and section layout of the digest page.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    /// Page heading, also used as the document `<title>`.
    pub title: String,
    pub subtitle: String,
    pub footer: String,
    /// Sections in display order.
    pub sections: Vec<Section>,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            title: "AI DAILY NEWS SUMMARY".to_string(),
            subtitle: "인공지능 소식을 매일 2시간 간격으로 요약하여 제공합니다.".to_string(),
            footer: format!("© {} AI Daily Summary. Powered by Gemini LLM.", Local::now().year()),
            sections: vec![
                Section::new("aitimes.kr", "인공지능신문"),
                Section::new("aitimes.com", "AI타임즈"),
            ],
        }
    }
}

impl PageConfig {
    /// Parse a YAML document; missing fields keep their defaults.
    pub fn from_yaml(yaml: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(yaml)
    }

    /// Load from `path`, or fall back to the defaults when no path is given.
    #[instrument(level = "info", skip_all)]
    pub async fn load(path: Option<&Path>) -> Result<Self, Box<dyn Error>> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let yaml = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| format!("failed to read config {}: {e}", path.display()))?;
        let config = Self::from_yaml(&yaml)
            .map_err(|e| format!("failed to parse config {}: {e}", path.display()))?;
        info!(
            path = %path.display(),
            sections = config.sections.len(),
            "Loaded page configuration"
        );
        Ok(config)
    }
}
