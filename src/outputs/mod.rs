//! Rendering of the digest.
//!
//! # Submodules
//!
//! - [`view`]: the typed view tree and its escaped HTML serialization
//! - [`page`]: pure functions from view state to cards, groups and sections
//! - [`html`]: the full HTML document (header, page, footer)
//!
//! # Page structure
//!
//! ```text
//! div.container
//! ├── header.header        (title, subtitle)
//! ├── main.content
//! │   ├── section.site-section[data-key=aitimes.kr]
//! │   │   ├── h2.site-title
//! │   │   └── div.news-grid → div.loader | div.card[data-key=<id>]*
//! │   └── section.site-section[data-key=aitimes.com]
//! └── footer.footer
//! ```

pub mod html;
pub mod page;
pub mod view;
