//! A minimal typed view tree and its HTML serialization.
//!
//! Render functions build [`ViewNode`]s instead of strings so no text from the
//! backend is ever spliced into markup. Text and attribute values are escaped
//! when the tree is serialized; the only structure inside a summary is the
//! explicit [`ViewNode::LineBreak`].

use std::fmt::Write;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewNode {
    Element(Element),
    Text(String),
    LineBreak,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub tag: &'static str,
    /// List identity of the node among its siblings; serialized as `data-key`.
    pub key: Option<String>,
    pub attrs: Vec<(&'static str, String)>,
    pub children: Vec<ViewNode>,
}

impl Element {
    /// Empty element with no key, attributes or children.
    ///
    /// # Examples
    ///
    /// ```ignore
    /// let node: ViewNode = Element::new("div").class("card").key("42").into();
    /// assert_eq!(node.to_html(), r#"<div data-key="42" class="card"></div>"#);
    /// ```
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            key: None,
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Shorthand for `attr("class", class)`.
    pub fn class(self, class: &str) -> Self {
        self.attr("class", class)
    }

    /// Append an attribute. Values are escaped on serialization.
    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.attrs.push((name, value.into()));
        self
    }

    /// Set the sibling identity, emitted as `data-key`.
    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    /// Append one child node.
    pub fn child(mut self, child: impl Into<ViewNode>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Append every node of `children`, in iteration order.
    pub fn children<I>(mut self, children: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<ViewNode>,
    {
        self.children.extend(children.into_iter().map(Into::into));
        self
    }
}

impl From<Element> for ViewNode {
    fn from(element: Element) -> Self {
        ViewNode::Element(element)
    }
}

impl ViewNode {
    /// Text node; escaped on serialization.
    pub fn text(text: impl Into<String>) -> Self {
        ViewNode::Text(text.into())
    }

    #[cfg(test)]
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            ViewNode::Element(element) => Some(element),
            _ => None,
        }
    }

    /// Serialize this node and its subtree as HTML.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    pub fn write_html(&self, out: &mut String) {
        match self {
            ViewNode::Text(text) => escape_into(out, text),
            ViewNode::LineBreak => out.push_str("<br>"),
            ViewNode::Element(element) => {
                write!(out, "<{}", element.tag).ok();
                if let Some(key) = &element.key {
                    out.push_str(" data-key=\"");
                    escape_into(out, key);
                    out.push('"');
                }
                for (name, value) in &element.attrs {
                    write!(out, " {name}=\"").ok();
                    escape_into(out, value);
                    out.push('"');
                }
                out.push('>');
                for child in &element.children {
                    child.write_html(out);
                }
                write!(out, "</{}>", element.tag).ok();
            }
        }
    }
}

/// Escape text for use in HTML content or a double-quoted attribute.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    escape_into(&mut out, s);
    out
}

fn escape_into(out: &mut String, s: &str) {
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<script>alert("x") & 'y'</script>"#),
            "&lt;script&gt;alert(&quot;x&quot;) &amp; &#39;y&#39;&lt;/script&gt;"
        );
        assert_eq!(escape_html("인공지능신문"), "인공지능신문");
    }

    #[test]
    fn test_element_serialization() {
        let node: ViewNode = Element::new("div")
            .class("card")
            .key("42")
            .child(ViewNode::text("a < b"))
            .child(ViewNode::LineBreak)
            .child(Element::new("span").attr("title", "\"q\""))
            .into();

        assert_eq!(
            node.to_html(),
            r#"<div data-key="42" class="card">a &lt; b<br><span title="&quot;q&quot;"></span></div>"#
        );
    }

    #[test]
    fn test_children_from_iterator() {
        let element = Element::new("ul").children((0..3).map(|n| Element::new("li").key(n.to_string())));
        let keys: Vec<_> = element
            .children
            .iter()
            .filter_map(|c| c.as_element())
            .filter_map(|e| e.key.as_deref())
            .collect();
        assert_eq!(keys, vec!["0", "1", "2"]);
    }
}
