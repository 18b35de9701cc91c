//! # AI Daily News
//!
//! Renders the AI daily news digest. The summarized articles come from a news
//! backend (`GET /api/news`); this binary fetches them once, splits them into
//! one feed per source site, and writes the result as an HTML page.
//!
//! ## Usage
//!
//! ```sh
//! ai_daily_news --base-url http://localhost:8000 -o ./public/index.html
//! ```
//!
//! ## Architecture
//!
//! 1. **Mount**: [`state::NewsView`] starts the single fetch for this run
//! 2. **Settle**: the fetch completion fills the view state, or only clears
//!    the loading flag if the fetch failed
//! 3. **Partition**: items are grouped by exact `source` match per section
//! 4. **Render**: sections and cards become a view tree, serialized to HTML
//!
//! A failed fetch is logged and renders the same as an empty digest.

use clap::Parser;
use std::error::Error;
use tokio::io::AsyncWriteExt;
use tracing::{debug, info, instrument, warn};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

mod api;
mod cli;
mod config;
mod models;
mod outputs;
mod partition;
mod state;
mod utils;

use api::HttpNewsSource;
use cli::Cli;
use config::PageConfig;
use outputs::{html::render_document, page::render_page};
use state::NewsView;
use utils::write_output;

#[tokio::main]
#[instrument]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();
    info!("ai_daily_news starting up");

    let args = Cli::parse();
    debug!(base_url = %args.base_url, ?args.output, ?args.config, "Parsed CLI arguments");

    let page_config = PageConfig::load(args.config.as_deref()).await?;
    let source = HttpNewsSource::new(&args.base_url)?;
    info!(endpoint = %source.endpoint(), "Resolved news endpoint");

    let mut view = NewsView::mount(source);
    let settled = tokio::select! {
        state = view.settled() => state,
        Ok(()) = tokio::signal::ctrl_c() => None,
    };
    let Some(state) = settled else {
        view.teardown();
        warn!("Interrupted before the news fetch settled");
        return Err("interrupted before the news fetch settled".into());
    };
    info!(items = state.items.len(), "View state settled");

    let page = render_page(&state, &page_config.sections);
    let document = render_document(&page, &page_config);

    match &args.output {
        Some(path) => write_output(path, &document).await?,
        None => {
            let mut stdout = tokio::io::stdout();
            stdout.write_all(document.as_bytes()).await?;
            stdout.flush().await?;
        }
    }

    let elapsed = start_time.elapsed();
    info!(?elapsed, millis = elapsed.as_millis() as u64, "Execution complete");
    Ok(())
}
