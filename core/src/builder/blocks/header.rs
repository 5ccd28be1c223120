// ATX header assembly

use crate::builder::ast::{Node, NodeKind};
use crate::segmenter::Segment;

/// Parse the `#` run (capped at 6) and wrap the stripped text as the single
/// TEXT child.
pub fn build(segment: &Segment) -> Node {
    let run = segment.content.chars().take_while(|&c| c == '#').count();
    let level = run.min(6) as u8;
    let text = segment.content[run..].trim();
    Node::with_children(NodeKind::Header { level }, vec![Node::text(text)])
}
