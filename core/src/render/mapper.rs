// AST → element tree mapping (pure)

use super::element::{Element, Tag};
use crate::builder::ast::{Document, Node, NodeKind};

/// Wrap the document in the standard container div.
pub fn map_document(document: &Document) -> Element {
    Element::new(Tag::Div)
        .attr("class", "markdown-content")
        .children(document.children.iter().map(map_node).collect())
}

pub fn map_node(node: &Node) -> Element {
    let children = || node.children.iter().map(map_node).collect::<Vec<_>>();

    match &node.kind {
        NodeKind::Header { level } => Element::new(Tag::heading(*level)).children(children()),
        // Level metadata is carried but renders as a single blockquote.
        NodeKind::Blockquote { .. } => Element::new(Tag::Blockquote).children(children()),
        NodeKind::Paragraph => Element::new(Tag::P).children(children()),
        NodeKind::CodeBlock { language, code } => {
            let mut code_el = Element::new(Tag::Code);
            if let Some(language) = language {
                code_el = code_el.attr("class", format!("language-{language}"));
            }
            Element::new(Tag::Pre).child(code_el.content(code.clone()))
        }
        NodeKind::InlineCode(value) => Element::new(Tag::Code).content(value.clone()),
        NodeKind::Emphasis { marker } => match marker.as_str() {
            "***" => Element::new(Tag::Strong).child(Element::new(Tag::Em).children(children())),
            "**" => Element::new(Tag::Strong).children(children()),
            _ => Element::new(Tag::Em).children(children()),
        },
        NodeKind::Strikethrough => Element::new(Tag::Del).children(children()),
        NodeKind::Link { text, url, title } => {
            let mut anchor = Element::new(Tag::A).attr("href", url.clone());
            if let Some(title) = title {
                anchor = anchor.attr("title", title.clone());
            }
            anchor.content(text.clone()).children(children())
        }
        NodeKind::Image { alt, src, title } => {
            let mut img = Element::self_closing(Tag::Img)
                .attr("src", src.clone())
                .attr("alt", alt.clone());
            if let Some(title) = title {
                img = img.attr("title", title.clone());
            }
            img
        }
        NodeKind::List { ordered, start } => {
            let tag = if *ordered { Tag::Ol } else { Tag::Ul };
            let mut list = Element::new(tag);
            if let Some(start) = start {
                list = list.attr("start", start.to_string());
            }
            list.children(children())
        }
        NodeKind::ListItem => Element::new(Tag::Li).children(children()),
        NodeKind::TaskList => Element::new(Tag::Ul)
            .attr("class", "task-list")
            .children(children()),
        NodeKind::TaskListItem { checked } => {
            let mut input = Element::self_closing(Tag::Input).attr("type", "checkbox");
            if *checked {
                input = input.attr("checked", "checked");
            }
            input = input.attr("disabled", "disabled");

            let mut label_children = vec![input];
            label_children.extend(children());
            Element::new(Tag::Li).child(Element::new(Tag::Label).children(label_children))
        }
        NodeKind::HorizontalRule => Element::self_closing(Tag::Hr),
        NodeKind::LineBreak => Element::self_closing(Tag::Br),
        NodeKind::Text(value) => Element::new(Tag::Span).content(value.clone()),
    }
}
