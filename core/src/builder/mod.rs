// Document builder: recursive descent over the segment stream

pub mod ast;
pub mod blocks;
pub mod inlines;

pub use ast::{Document, Node, NodeKind};

use crate::options::ParserOptions;
use crate::segmenter::{Segment, SegmentKind, Segmenter};
use anyhow::Result;
use std::iter::Peekable;
use std::vec::IntoIter;

/// Forward-only cursor over the segment stream.
pub struct SegmentCursor {
    iter: Peekable<IntoIter<Segment>>,
}

impl SegmentCursor {
    pub fn new(segments: Vec<Segment>) -> Self {
        Self {
            iter: segments.into_iter().peekable(),
        }
    }

    pub fn peek(&mut self) -> Option<&Segment> {
        self.iter.peek()
    }

    pub fn advance(&mut self) -> Option<Segment> {
        self.iter.next()
    }

    pub fn at_end(&mut self) -> bool {
        self.iter.peek().is_none()
    }
}

/// Assembles the AST, re-tokenizing container content with a bounded depth.
pub struct DocumentBuilder {
    options: ParserOptions,
}

impl DocumentBuilder {
    pub fn new(options: ParserOptions) -> Self {
        Self { options }
    }

    pub fn max_depth(&self) -> usize {
        self.options.max_depth
    }

    pub fn build(&self, segments: Vec<Segment>) -> Result<Document> {
        log::debug!("building document from {} segments", segments.len());
        let mut cursor = SegmentCursor::new(segments);
        let children = self.build_nodes(&mut cursor, 0);
        log::debug!("built {} top-level nodes", children.len());
        Ok(Document { children })
    }

    pub(crate) fn build_nodes(&self, cursor: &mut SegmentCursor, depth: usize) -> Vec<Node> {
        let mut nodes = Vec::new();

        while let Some(segment) = cursor.peek() {
            match segment.kind {
                SegmentKind::Header { .. } => {
                    if let Some(segment) = cursor.advance() {
                        nodes.push(blocks::header::build(&segment));
                    }
                }
                SegmentKind::Blockquote { .. } => {
                    if let Some(segment) = cursor.advance() {
                        nodes.push(blocks::blockquote::build(self, &segment, depth));
                    }
                }
                SegmentKind::CodeBlock => {
                    if let Some(segment) = cursor.advance() {
                        nodes.push(blocks::code_block::build(&segment));
                    }
                }
                SegmentKind::ListItem { .. } | SegmentKind::TaskListItem { .. } => {
                    match blocks::list::build(self, cursor, depth) {
                        Some(node) => nodes.push(node),
                        None => {
                            cursor.advance();
                        }
                    }
                }
                SegmentKind::HorizontalRule { .. } => {
                    cursor.advance();
                    nodes.push(Node::new(NodeKind::HorizontalRule));
                }
                SegmentKind::Image { .. } => {
                    if let Some(segment) = cursor.advance() {
                        if let SegmentKind::Image {
                            alt, src, title, ..
                        } = segment.kind
                        {
                            nodes.push(Node::new(NodeKind::Image { alt, src, title }));
                        }
                    }
                }
                SegmentKind::LineBreak { .. } => {
                    cursor.advance();
                    nodes.push(Node::new(NodeKind::LineBreak));
                }
                SegmentKind::ParagraphBreak => {
                    cursor.advance();
                }
                SegmentKind::Unknown => {
                    if let Some(segment) = cursor.advance() {
                        let trimmed = segment.content.trim();
                        if !trimmed.is_empty() {
                            nodes.push(Node::text(trimmed));
                        }
                    }
                }
                SegmentKind::Text
                | SegmentKind::Emphasis { .. }
                | SegmentKind::InlineCode
                | SegmentKind::Strikethrough
                | SegmentKind::Link { .. } => {
                    match inlines::paragraph::build(self, cursor, depth) {
                        Some(node) => nodes.push(node),
                        // Defensive: never stall on an unconsumed segment.
                        None => {
                            cursor.advance();
                        }
                    }
                }
            }
        }

        nodes
    }

    /// Re-tokenize container content. Counts one level of depth; at the cap
    /// the raw content is returned as a flat text leaf instead.
    pub(crate) fn reparse(&self, content: &str, depth: usize) -> Vec<Node> {
        if depth >= self.options.max_depth {
            log::debug!("max depth {} reached, flattening", self.options.max_depth);
            if content.trim().is_empty() {
                return Vec::new();
            }
            return vec![Node::text(content)];
        }
        let mut segmenter = Segmenter::new(&self.options);
        let segments = segmenter.extract_segments(content, true);
        let mut cursor = SegmentCursor::new(segments);
        self.build_nodes(&mut cursor, depth)
    }
}
