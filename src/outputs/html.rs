//! The standalone HTML document around a rendered page.

use super::view::{Element, ViewNode, escape_html};
use crate::config::PageConfig;

/// Wrap `page` in a full HTML document with the configured header and footer.
pub fn render_document(page: &ViewNode, config: &PageConfig) -> String {
    let header: ViewNode = Element::new("header")
        .class("header")
        .child(Element::new("h1").child(ViewNode::text(&config.title)))
        .child(Element::new("p").class("subtitle").child(ViewNode::text(&config.subtitle)))
        .child(Element::new("div").class("glow-bar"))
        .into();
    let footer: ViewNode = Element::new("footer")
        .class("footer")
        .child(Element::new("p").child(ViewNode::text(&config.footer)))
        .into();
    let container: ViewNode = Element::new("div")
        .class("container")
        .child(header)
        .child(page.clone())
        .child(footer)
        .into();

    format!(
        "<!DOCTYPE html>\n<html lang=\"ko\">\n<head>\n<meta charset=\"utf-8\">\n<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n<title>{}</title>\n</head>\n<body>\n{}\n</body>\n</html>\n",
        escape_html(&config.title),
        container.to_html()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outputs::page::render_page;
    use crate::state::ViewState;
    use scraper::{Html, Selector};

    #[test]
    fn test_document_structure() {
        let config = PageConfig::default();
        let page = render_page(&ViewState::default(), &config.sections);
        let html = render_document(&page, &config);

        assert!(html.starts_with("<!DOCTYPE html>"));
        let doc = Html::parse_document(&html);
        let text = |s: &str| {
            let selector = Selector::parse(s).unwrap();
            doc.select(&selector).next().unwrap().text().collect::<String>()
        };
        assert_eq!(text("title"), "AI DAILY NEWS SUMMARY");
        assert_eq!(text("header h1"), "AI DAILY NEWS SUMMARY");
        assert_eq!(text("header .subtitle"), config.subtitle);
        assert_eq!(text("footer"), config.footer);

        let sections = Selector::parse(".container > main.content > section").unwrap();
        assert_eq!(doc.select(&sections).count(), 2);
    }

    #[test]
    fn test_document_escapes_config_text() {
        let config = PageConfig {
            title: "News & <Views>".to_string(),
            ..PageConfig::default()
        };
        let page = render_page(&ViewState::default(), &config.sections);
        let html = render_document(&page, &config);

        assert!(html.contains("<title>News &amp; &lt;Views&gt;</title>"));
        assert!(!html.contains("<Views>"));
    }
}
