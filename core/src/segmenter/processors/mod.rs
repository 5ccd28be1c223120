// Sub-processor registry: one module per construct, dispatched by priority
//
// Each processor answers two questions: can it start at the current
// character (`can_process`), and what does it make of the buffer from
// that position (`process`). The segmenter invokes them in descending
// priority and falls through on a decline.

pub mod shared;

pub mod blockquote;
pub mod code_block;
pub mod emphasis;
pub mod escape;
pub mod header;
pub mod horizontal_rule;
pub mod image;
pub mod inline_code;
pub mod link;
pub mod list;
pub mod strikethrough;
pub mod text;

use crate::options::ParserOptions;
use crate::segmenter::segment::Segment;

/// Scan-time context handed to processors alongside the buffer.
#[derive(Debug, Clone, Copy)]
pub struct ScanContext {
    /// Byte position of the cursor in the buffer.
    pub position: usize,
    /// True iff position is 0 or the previous byte is `\n`.
    pub line_start: bool,
    /// True on the final extraction of a document; no more input follows.
    pub is_end: bool,
}

/// Outcome of a successful `process` call.
#[derive(Debug)]
pub enum Scan {
    /// Tokens were produced (possibly none) and the cursor moves to `next`.
    Consumed { segments: Vec<Segment>, next: usize },
    /// The construct is unterminated and more input may follow: the tail
    /// from the processor's start position is buffered for the next chunk.
    Pending(String),
}

pub trait Processor {
    fn name(&self) -> &'static str;

    /// Dispatch priority, scaled by 10 (strikethrough sits between inline
    /// code at 30 and emphasis at 20).
    fn priority(&self) -> u16;

    fn can_process(&self, ch: char, ctx: &ScanContext) -> bool;

    /// Attempt to consume the buffer prefix at `start`. `None` declines the
    /// position and lets lower-priority processors try.
    fn process(&self, buffer: &str, start: usize, ctx: &ScanContext) -> Option<Scan>;
}

/// Build the processor list, highest priority first. The sort is stable, so
/// equal priorities keep their insertion order (blockquote before rule).
pub fn registry(options: &ParserOptions) -> Vec<Box<dyn Processor>> {
    let mut processors: Vec<Box<dyn Processor>> = vec![
        Box::new(escape::EscapeProcessor),
        Box::new(header::HeaderProcessor),
        Box::new(blockquote::BlockquoteProcessor),
        Box::new(horizontal_rule::HorizontalRuleProcessor),
        Box::new(code_block::CodeBlockProcessor),
        Box::new(list::ListProcessor),
        Box::new(image::ImageProcessor::new(options.sanitization)),
        Box::new(link::LinkProcessor::new(options.sanitization)),
        Box::new(inline_code::InlineCodeProcessor),
        Box::new(strikethrough::StrikethroughProcessor),
        Box::new(emphasis::EmphasisProcessor),
        Box::new(text::TextProcessor),
    ];
    processors.sort_by(|a, b| b.priority().cmp(&a.priority()));
    processors
}
