// Strikethrough assembly. Plain inner text stays a single leaf; inner
// block-level markers trigger a bounded re-tokenization.

use crate::builder::ast::{Node, NodeKind};
use crate::builder::DocumentBuilder;
use crate::segmenter::Segment;

pub fn build(builder: &DocumentBuilder, segment: &Segment, depth: usize) -> Node {
    let content = &segment.content;
    let inner = &content[2..content.len() - 2];

    let children = if depth + 1 >= builder.max_depth() || !has_block_markers(inner) {
        vec![Node::text(inner)]
    } else {
        flatten_paragraph(builder.reparse(inner, depth + 1), inner)
    };
    Node::with_children(NodeKind::Strikethrough, children)
}

// A lone paragraph wrapper around the re-tokenized content is unwrapped so
// the inline children hang directly off the strikethrough node.
fn flatten_paragraph(mut children: Vec<Node>, fallback: &str) -> Vec<Node> {
    if children.is_empty() {
        return vec![Node::text(fallback)];
    }
    if children.len() == 1 && children[0].kind == NodeKind::Paragraph {
        return children.remove(0).children;
    }
    children
}

// Block constructs that justify re-tokenizing the inner text.
fn has_block_markers(inner: &str) -> bool {
    if inner.contains("```") {
        return true;
    }
    inner.lines().any(|line| {
        let line = line.trim_start();
        line.starts_with('#')
            || line.starts_with('>')
            || line.starts_with("- ")
            || line.starts_with("* ")
            || is_horizontal_rule(line)
            || is_ordered_marker(line)
    })
}

fn is_horizontal_rule(line: &str) -> bool {
    let line = line.trim();
    let Some(marker) = line.chars().next() else {
        return false;
    };
    matches!(marker, '-' | '*' | '_')
        && line.chars().filter(|&c| c == marker).count() >= 3
        && line.chars().all(|c| c == marker || c.is_whitespace())
}

fn is_ordered_marker(line: &str) -> bool {
    let digits = line.chars().take_while(char::is_ascii_digit).count();
    digits > 0 && line[digits..].starts_with(". ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::ParserOptions;
    use crate::segmenter::SegmentKind;

    fn strike(content: &str) -> Segment {
        Segment::new(SegmentKind::Strikethrough, content)
    }

    #[test]
    fn test_plain_inner_stays_flat() {
        let builder = DocumentBuilder::new(ParserOptions::default());
        let node = build(&builder, &strike("~~gone~~"), 0);
        assert_eq!(node.kind, NodeKind::Strikethrough);
        assert_eq!(node.children, vec![Node::text("gone")]);
    }

    #[test]
    fn test_block_markers_trigger_reparse() {
        let builder = DocumentBuilder::new(ParserOptions::default());
        let node = build(&builder, &strike("~~# gone~~"), 0);
        assert!(matches!(
            node.children[0].kind,
            NodeKind::Header { level: 1 }
        ));
    }

    #[test]
    fn test_near_depth_cap_skips_reparse() {
        let options = ParserOptions {
            max_depth: 1,
            ..Default::default()
        };
        let builder = DocumentBuilder::new(options);
        let node = build(&builder, &strike("~~# gone~~"), 0);
        assert_eq!(node.children, vec![Node::text("# gone")]);
    }
}
