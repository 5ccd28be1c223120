// Blockquote assembly: the stripped inner text is re-tokenized as a
// document of its own

use crate::builder::ast::{Node, NodeKind};
use crate::builder::DocumentBuilder;
use crate::segmenter::{Segment, SegmentKind};

pub fn build(builder: &DocumentBuilder, segment: &Segment, depth: usize) -> Node {
    let level = match segment.kind {
        SegmentKind::Blockquote { level } => level,
        _ => 1,
    };
    let children = builder.reparse(&segment.content, depth + 1);
    Node::with_children(NodeKind::Blockquote { level }, children)
}
