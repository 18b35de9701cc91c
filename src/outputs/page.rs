//! Pure render functions from view state to a [`ViewNode`] tree.
//!
//! - [`render_card`]: one news item
//! - [`render_group`]: the card grid of one section, or its loader
//! - [`render_section`]: heading plus grid
//! - [`render_page`]: every configured section, in order
//!
//! None of these keep state or perform I/O; they can be called on every
//! state change.

use super::view::{Element, ViewNode};
use crate::config::Section;
use crate::models::NewsItem;
use crate::partition::group;
use crate::state::ViewState;
use tracing::debug;
use url::Url;

/// Shown in place of a summary that has not been produced yet.
pub const SUMMARY_FALLBACK: &str = "요약 생성 중...";

/// Shown in each section while the fetch is outstanding.
pub const LOADING_TEXT: &str = "데이터를 불러오는 중...";

/// Label of the link to the original article.
pub const LINK_LABEL: &str = "원문 보기";

/// The summary as text segments separated by line breaks.
///
/// Each `\n` (or `\r\n`) becomes exactly one [`ViewNode::LineBreak`]; empty
/// segments produce no text node. An absent or empty summary yields the
/// fallback text.
pub fn summary_nodes(summary: Option<&str>) -> Vec<ViewNode> {
    let Some(text) = summary.filter(|s| !s.is_empty()) else {
        return vec![ViewNode::text(SUMMARY_FALLBACK)];
    };

    let lines: Vec<&str> = text.split('\n').collect();
    let last = lines.len() - 1;
    let mut nodes = Vec::with_capacity(lines.len() * 2);
    for (i, line) in lines.into_iter().enumerate() {
        if i > 0 {
            nodes.push(ViewNode::LineBreak);
        }
        let line = if i < last {
            line.strip_suffix('\r').unwrap_or(line)
        } else {
            line
        };
        if !line.is_empty() {
            nodes.push(ViewNode::text(line));
        }
    }
    nodes
}

/// Only web links are made clickable.
fn is_web_link(url: &str) -> bool {
    Url::parse(url).is_ok_and(|u| matches!(u.scheme(), "http" | "https"))
}

/// Link to the original article, opened in a new context without opener access.
fn render_link(url: &str) -> Element {
    let link = Element::new("a").class("link");
    let link = if is_web_link(url) {
        link.attr("href", url)
            .attr("target", "_blank")
            .attr("rel", "noopener noreferrer")
    } else {
        debug!(%url, "Not an http(s) link; rendering inert");
        link.attr("aria-disabled", "true")
    };
    link.child(ViewNode::text(LINK_LABEL))
}

/// One card, keyed by the item id.
pub fn render_card(item: &NewsItem) -> ViewNode {
    Element::new("div")
        .class("card")
        .key(&item.id)
        .child(Element::new("div").class("card-glass"))
        .child(
            Element::new("div")
                .class("card-content")
                .child(Element::new("span").class("date").child(ViewNode::text(&item.published_at)))
                .child(Element::new("h3").class("title").child(ViewNode::text(&item.title)))
                .child(
                    Element::new("div")
                        .class("summary")
                        .children(summary_nodes(item.summary_text())),
                )
                .child(render_link(&item.url)),
        )
        .into()
}

/// The card grid of one section: a loader while loading, else one card per item.
pub fn render_group(items: &[&NewsItem], is_loading: bool) -> ViewNode {
    let grid = Element::new("div").class("news-grid");
    let grid = if is_loading {
        grid.child(Element::new("div").class("loader").child(ViewNode::text(LOADING_TEXT)))
    } else {
        grid.children(items.iter().map(|item| render_card(item)))
    };
    grid.into()
}

/// One titled section: the heading plus its item grid or loader.
///
/// # Arguments
///
/// * `section` - Source and heading; `section.source` keys the element
/// * `items` - The items already partitioned for this source
/// * `is_loading` - Show the loader instead of the grid
pub fn render_section(section: &Section, items: &[&NewsItem], is_loading: bool) -> ViewNode {
    Element::new("section")
        .class("site-section")
        .key(&section.source)
        .child(Element::new("h2").class("site-title").child(ViewNode::text(&section.title)))
        .child(render_group(items, is_loading))
        .into()
}

/// All sections for the current state.
pub fn render_page(state: &ViewState, sections: &[Section]) -> ViewNode {
    Element::new("main")
        .class("content")
        .children(
            group(&state.items, sections)
                .into_iter()
                .map(|(section, items)| render_section(section, &items, state.is_loading)),
        )
        .into()
}
