// Fenced code block assembly: strip the fences, split off the language line

use crate::builder::ast::{Node, NodeKind};
use crate::segmenter::Segment;

pub fn build(segment: &Segment) -> Node {
    let inner = segment
        .content
        .strip_prefix("```")
        .unwrap_or(&segment.content);
    // The closing fence is absent when the block ran to end of input.
    let inner = inner.strip_suffix("```").unwrap_or(inner);

    let (language, code) = match inner.find('\n') {
        Some(i) => (inner[..i].trim(), inner[i + 1..].trim()),
        None => (inner.trim(), ""),
    };
    let language = if language.is_empty() {
        None
    } else {
        Some(language.to_string())
    };

    Node::new(NodeKind::CodeBlock {
        language,
        code: code.to_string(),
    })
}
