// Element tree: the tag-oriented structure between mapper and renderer

use std::fmt;

/// HTML tags the mapper can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    A,
    Blockquote,
    Br,
    Code,
    Del,
    Div,
    Em,
    /// h1..h6; the level is clamped on construction.
    Heading(u8),
    Hr,
    Img,
    Input,
    Label,
    Li,
    Ol,
    P,
    Pre,
    Span,
    Strong,
    Ul,
}

impl Tag {
    pub fn heading(level: u8) -> Self {
        Tag::Heading(level.clamp(1, 6))
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tag::A => write!(f, "a"),
            Tag::Blockquote => write!(f, "blockquote"),
            Tag::Br => write!(f, "br"),
            Tag::Code => write!(f, "code"),
            Tag::Del => write!(f, "del"),
            Tag::Div => write!(f, "div"),
            Tag::Em => write!(f, "em"),
            Tag::Heading(level) => write!(f, "h{level}"),
            Tag::Hr => write!(f, "hr"),
            Tag::Img => write!(f, "img"),
            Tag::Input => write!(f, "input"),
            Tag::Label => write!(f, "label"),
            Tag::Li => write!(f, "li"),
            Tag::Ol => write!(f, "ol"),
            Tag::P => write!(f, "p"),
            Tag::Pre => write!(f, "pre"),
            Tag::Span => write!(f, "span"),
            Tag::Strong => write!(f, "strong"),
            Tag::Ul => write!(f, "ul"),
        }
    }
}

/// One output element. Attribute order is preserved as inserted.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub tag: Tag,
    pub attributes: Vec<(String, String)>,
    pub content: Option<String>,
    pub children: Vec<Element>,
    pub self_closing: bool,
}

impl Element {
    pub fn new(tag: Tag) -> Self {
        Self {
            tag,
            attributes: Vec::new(),
            content: None,
            children: Vec::new(),
            self_closing: false,
        }
    }

    /// `br`, `hr`, `img`, `input`: no content, no children, no closer.
    pub fn self_closing(tag: Tag) -> Self {
        Self {
            self_closing: true,
            ..Self::new(tag)
        }
    }

    pub fn attr(mut self, key: &str, value: impl Into<String>) -> Self {
        self.attributes.push((key.to_string(), value.into()));
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn children(mut self, children: Vec<Element>) -> Self {
        self.children = children;
        self
    }

    pub fn child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_clamps() {
        assert_eq!(Tag::heading(0), Tag::Heading(1));
        assert_eq!(Tag::heading(9), Tag::Heading(6));
        assert_eq!(Tag::heading(3).to_string(), "h3");
    }

    #[test]
    fn test_self_closing_carries_nothing() {
        let hr = Element::self_closing(Tag::Hr);
        assert!(hr.self_closing);
        assert!(hr.children.is_empty());
        assert!(hr.content.is_none());
    }
}
