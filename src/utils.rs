//! Small helpers for logging and output files.

use std::error::Error;
use std::path::Path;
use tokio::fs;
use tracing::{info, instrument};

/// Truncate a string for logging purposes.
///
/// Long strings are cut to at most `max` bytes (backing off to the nearest
/// char boundary, since payloads are mostly Korean) with an ellipsis and a
/// count of the dropped bytes appended.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(truncate_for_log("short", 100), "short");
/// assert_eq!(truncate_for_log(&"a".repeat(500), 10), "aaaaaaaaaa…(+490 bytes)");
/// ```
pub fn truncate_for_log(s: &str, max: usize) -> String {
    if s.len() <= max {
        return s.to_string();
    }
    let mut cut = max;
    while !s.is_char_boundary(cut) {
        cut -= 1;
    }
    format!("{}…(+{} bytes)", &s[..cut], s.len() - cut)
}

/// Detect if a serde_json error indicates truncated/incomplete JSON.
///
/// A body cut off mid-transfer fails with an EOF error rather than a syntax
/// error; the fetcher logs the distinction.
pub fn looks_truncated(e: &serde_json::Error) -> bool {
    use serde_json::error::Category;
    matches!(e.classify(), Category::Eof)
}

/// Write `contents` to `path`, creating the parent directory if needed.
#[instrument(level = "info", skip_all, fields(path = %path.display()))]
pub async fn write_output(path: &Path, contents: &str) -> Result<(), Box<dyn Error>> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).await?;
    }
    fs::write(path, contents).await?;
    info!(bytes = contents.len(), "Wrote output file");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_for_log_short_string() {
        let s = "Hello, world!";
        assert_eq!(truncate_for_log(s, 100), "Hello, world!");
    }

    #[test]
    fn test_truncate_for_log_long_string() {
        let s = "a".repeat(500);
        let result = truncate_for_log(&s, 100);
        assert!(result.starts_with(&"a".repeat(100)));
        assert!(result.contains("…(+400 bytes)"));
    }

    #[test]
    fn test_truncate_for_log_respects_char_boundaries() {
        // Each Hangul syllable is three bytes in UTF-8.
        let s = "인공지능신문";
        let result = truncate_for_log(s, 4);
        assert_eq!(result, "인…(+15 bytes)");
    }

    #[test]
    fn test_looks_truncated() {
        let json_eof = r#"[{"id": 1, "source": "#;
        let err = serde_json::from_str::<serde_json::Value>(json_eof).unwrap_err();
        assert!(looks_truncated(&err));

        let json_syntax = r#"[{"id": 1,,}]"#;
        let err = serde_json::from_str::<serde_json::Value>(json_syntax).unwrap_err();
        assert!(!looks_truncated(&err));
    }

    #[tokio::test]
    async fn test_write_output_creates_parent_dir() {
        let dir = std::env::temp_dir().join(format!("ai_daily_news_test_{}", std::process::id()));
        let path = dir.join("nested").join("index.html");

        write_output(&path, "<!DOCTYPE html>").await.unwrap();
        let written = tokio::fs::read_to_string(&path).await.unwrap();
        assert_eq!(written, "<!DOCTYPE html>");

        tokio::fs::remove_dir_all(&dir).await.ok();
    }
}
