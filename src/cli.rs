//! Command-line interface definitions.
//!
//! All options can also be provided through environment variables.

use clap::Parser;
use std::path::PathBuf;

/// Fetch the AI news digest and render it as an HTML page.
///
/// # Examples
///
/// ```sh
/// # Print the page for a local backend
/// ai_daily_news
///
/// # Write it to a file, against a deployed backend
/// ai_daily_news --base-url https://news.example.com -o ./public/index.html
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Base URL of the news backend; `/api/news` is resolved against it
    #[arg(long, env = "NEWS_API_BASE_URL", default_value = "http://localhost:8000")]
    pub base_url: String,

    /// Write the HTML page here instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Optional YAML file with page text and sections
    #[arg(short, long, env = "NEWS_PAGE_CONFIG")]
    pub config: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_long_flags() {
        let cli = Cli::parse_from([
            "ai_daily_news",
            "--base-url",
            "https://news.example.com",
            "--output",
            "./public/index.html",
            "--config",
            "./page.yaml",
        ]);

        assert_eq!(cli.base_url, "https://news.example.com");
        assert_eq!(cli.output, Some(PathBuf::from("./public/index.html")));
        assert_eq!(cli.config, Some(PathBuf::from("./page.yaml")));
    }

    #[test]
    fn test_cli_short_flags() {
        let cli = Cli::parse_from(["ai_daily_news", "-o", "/tmp/index.html", "-c", "/tmp/page.yaml"]);

        assert_eq!(cli.output, Some(PathBuf::from("/tmp/index.html")));
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/page.yaml")));
    }

    #[test]
    fn test_cli_without_output_writes_stdout() {
        let cli = Cli::try_parse_from(["ai_daily_news", "--base-url", "http://127.0.0.1:9000"]).unwrap();
        assert_eq!(cli.output, None);
    }
}
