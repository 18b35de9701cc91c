//! View state and the one-fetch-per-activation lifecycle.
//!
//! A [`NewsView`] owns the state slot for one activation. Mounting it spawns
//! the single fetch; the fetch's completion handler is the only writer of the
//! slot. Renderers read cloned [`ViewState`] snapshots.
//!
//! The slot holds `Option<ViewState>`: `None` means the view was torn down.
//! A completion only writes a slot that is still mounted and still loading,
//! so a late or repeated completion is a no-op.

use crate::api::{FetchFailure, NewsSource};
use crate::models::NewsItem;
use itertools::Itertools;
use std::sync::Arc;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, error, info, instrument, warn};

/// Everything the renderer needs to know.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    pub items: Vec<NewsItem>,
    pub is_loading: bool,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            is_loading: true,
        }
    }
}

type Slot = watch::Sender<Option<ViewState>>;

/// One activation of the digest view.
#[derive(Debug)]
pub struct NewsView {
    slot: Arc<Slot>,
    fetch: Option<JoinHandle<()>>,
}

impl NewsView {
    /// Mount the view and start its fetch. Must be called inside a Tokio runtime.
    pub fn mount<S>(source: S) -> Self
    where
        S: NewsSource + 'static,
    {
        let (slot, _) = watch::channel(Some(ViewState::default()));
        let slot = Arc::new(slot);
        let task_slot = Arc::clone(&slot);
        let fetch = tokio::spawn(async move {
            let outcome = source.fetch_news().await;
            complete(&task_slot, outcome);
        });
        info!("News view mounted");
        Self {
            slot,
            fetch: Some(fetch),
        }
    }

    /// Current state, or `None` once torn down.
    pub fn snapshot(&self) -> Option<ViewState> {
        self.slot.borrow().clone()
    }

    /// Wait for the fetch to settle and return the resulting state.
    pub async fn settled(&mut self) -> Option<ViewState> {
        if let Some(fetch) = self.fetch.take() {
            if let Err(e) = fetch.await {
                // A dead fetch is terminal too: clear the flag, keep the items.
                error!(error = %e, "News fetch task did not finish");
                settle(&self.slot, None);
            }
        }
        self.snapshot()
    }

    /// Detach the view from its state. An in-flight fetch keeps running but
    /// its completion no longer has anywhere to write.
    pub fn teardown(&self) {
        self.slot.send_replace(None);
        info!("News view torn down");
    }
}

/// Completion handler for the activation's fetch. Returns whether the slot changed.
#[instrument(level = "debug", skip_all)]
fn complete(slot: &Slot, outcome: Result<Vec<NewsItem>, FetchFailure>) -> bool {
    let items = match outcome {
        Ok(items) => {
            warn_duplicate_ids(&items);
            Some(items)
        }
        Err(e) => {
            // Not surfaced to the view: a failed fetch renders like an empty one.
            error!(error = %e, "Fetching news failed");
            None
        }
    };

    settle(slot, items)
}

/// Clear the loading flag of a mounted, still-loading slot, replacing its
/// items when `items` is `Some`. Returns whether the slot changed.
fn settle(slot: &Slot, items: Option<Vec<NewsItem>>) -> bool {
    let applied = slot.send_if_modified(|slot| match slot {
        Some(state) if state.is_loading => {
            if let Some(items) = items {
                state.items = items;
            }
            state.is_loading = false;
            true
        }
        _ => false,
    });

    if applied {
        debug!("View state settled");
    } else {
        debug!("Completion ignored: view torn down or already settled");
    }
    applied
}

fn warn_duplicate_ids(items: &[NewsItem]) {
    for id in items.iter().map(|item| item.id.as_str()).duplicates() {
        warn!(%id, "Duplicate news item id in response");
    }
}
