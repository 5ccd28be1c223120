// Emphasis assembly: strip the delimiter pair, keep the form in the node

use crate::builder::ast::{Node, NodeKind};
use crate::segmenter::{Segment, SegmentKind};

pub fn build(segment: &Segment) -> Node {
    let marker = match &segment.kind {
        SegmentKind::Emphasis { marker } => marker.clone(),
        _ => "*".to_string(),
    };
    let content = &segment.content;
    let inner = &content[marker.len()..content.len() - marker.len()];

    // Multi-line emphasis renders its lines separated by explicit breaks.
    let lines: Vec<&str> = inner
        .split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    let children = if lines.len() > 1 {
        let mut children = Vec::with_capacity(lines.len() * 2 - 1);
        for (i, line) in lines.iter().enumerate() {
            if i > 0 {
                children.push(Node::new(NodeKind::LineBreak));
            }
            children.push(Node::text(*line));
        }
        children
    } else {
        vec![Node::text(inner)]
    };

    Node::with_children(NodeKind::Emphasis { marker }, children)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn emphasis(content: &str, marker: &str) -> Segment {
        Segment::new(
            SegmentKind::Emphasis {
                marker: marker.to_string(),
            },
            content,
        )
    }

    #[test]
    fn test_delimiters_stripped() {
        let node = build(&emphasis("**bold**", "**"));
        assert_eq!(
            node.kind,
            NodeKind::Emphasis {
                marker: "**".to_string()
            }
        );
        assert_eq!(node.children, vec![Node::text("bold")]);
    }

    #[test]
    fn test_multiline_inner_interleaves_breaks() {
        let node = build(&emphasis("*one\ntwo*", "*"));
        assert_eq!(
            node.children,
            vec![
                Node::text("one"),
                Node::new(NodeKind::LineBreak),
                Node::text("two"),
            ]
        );
    }
}
