// Fenced code blocks

use super::{Processor, Scan, ScanContext};
use crate::segmenter::segment::{Segment, SegmentKind};

const FENCE: &str = "```";

pub struct CodeBlockProcessor;

impl Processor for CodeBlockProcessor {
    fn name(&self) -> &'static str {
        "code_block"
    }

    fn priority(&self) -> u16 {
        80
    }

    fn can_process(&self, ch: char, _ctx: &ScanContext) -> bool {
        ch == '`'
    }

    fn process(&self, buffer: &str, start: usize, ctx: &ScanContext) -> Option<Scan> {
        let input = &buffer[start..];
        if !input.starts_with(FENCE) {
            // A backtick run cut off at the buffer edge may still grow into
            // a fence.
            if !ctx.is_end && FENCE.starts_with(input) {
                return Some(Scan::Pending(input.to_string()));
            }
            return None;
        }

        match input[FENCE.len()..].find(FENCE) {
            Some(i) => {
                let end = FENCE.len() + i + FENCE.len();
                // Swallow the newline that closes the fence line, if present.
                let next = if input[end..].starts_with('\n') {
                    end + 1
                } else {
                    end
                };
                Some(Scan::Consumed {
                    segments: vec![Segment::new(SegmentKind::CodeBlock, &input[..end])],
                    next: start + next,
                })
            }
            // No closing fence yet: buffer mid-stream, close at EOF otherwise.
            None if !ctx.is_end => Some(Scan::Pending(input.to_string())),
            None => Some(Scan::Consumed {
                segments: vec![Segment::new(SegmentKind::CodeBlock, input)],
                next: buffer.len(),
            }),
        }
    }
}
