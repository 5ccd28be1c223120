// Paragraph assembly: greedily collect inline segments up to the next
// block-level boundary, joining adjacent inline children with one space

use crate::builder::ast::{Node, NodeKind};
use crate::builder::{DocumentBuilder, SegmentCursor};
use crate::segmenter::SegmentKind;

use super::{emphasis, strikethrough};

pub fn build(
    builder: &DocumentBuilder,
    cursor: &mut SegmentCursor,
    depth: usize,
) -> Option<Node> {
    let mut children = Vec::new();

    while let Some(segment) = cursor.peek() {
        let accepted = segment.is_inline() || matches!(segment.kind, SegmentKind::LineBreak { .. });
        if !accepted {
            break;
        }
        let segment = cursor.advance()?;
        let node = match &segment.kind {
            SegmentKind::Text => Node::text(&segment.content),
            SegmentKind::InlineCode => {
                // The code value keeps its backticks.
                Node::new(NodeKind::InlineCode(segment.content.clone()))
            }
            SegmentKind::Emphasis { .. } => emphasis::build(&segment),
            SegmentKind::Strikethrough => strikethrough::build(builder, &segment, depth),
            SegmentKind::Link {
                text, url, title, ..
            } => Node::new(NodeKind::Link {
                text: text.clone(),
                url: url.clone(),
                title: title.clone(),
            }),
            SegmentKind::LineBreak { .. } => Node::new(NodeKind::LineBreak),
            _ => break,
        };
        children.push(node);
    }

    if children.is_empty() {
        return None;
    }
    Some(Node::with_children(
        NodeKind::Paragraph,
        with_separators(children),
    ))
}

// Insert a TEXT(" ") between adjacent inline children; explicit line breaks
// are left untouched on either side.
fn with_separators(children: Vec<Node>) -> Vec<Node> {
    let mut out: Vec<Node> = Vec::with_capacity(children.len() * 2);
    for child in children {
        let join = matches!(out.last(), Some(prev) if separator_eligible(prev))
            && separator_eligible(&child);
        if join {
            out.push(Node::text(" "));
        }
        out.push(child);
    }
    out
}

fn separator_eligible(node: &Node) -> bool {
    !matches!(node.kind, NodeKind::LineBreak)
}
