// Inline code spans (single backtick pair)

use super::shared::unterminated;
use super::{Processor, Scan, ScanContext};
use crate::segmenter::segment::{Segment, SegmentKind};

pub struct InlineCodeProcessor;

impl Processor for InlineCodeProcessor {
    fn name(&self) -> &'static str {
        "inline_code"
    }

    fn priority(&self) -> u16 {
        30
    }

    fn can_process(&self, ch: char, _ctx: &ScanContext) -> bool {
        ch == '`'
    }

    fn process(&self, buffer: &str, start: usize, ctx: &ScanContext) -> Option<Scan> {
        let input = &buffer[start..];
        if input.starts_with("```") {
            // Fence territory; the code block processor already declined.
            return None;
        }

        match input[1..].find('`') {
            // Empty span degrades through the text fallback.
            Some(0) => None,
            Some(i) => {
                let end = 1 + i + 1;
                Some(Scan::Consumed {
                    segments: vec![Segment::new(SegmentKind::InlineCode, &input[..end])],
                    next: start + end,
                })
            }
            None => Some(unterminated(buffer, start, ctx)),
        }
    }
}
