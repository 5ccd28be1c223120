// Strikethrough (GitHub extension): ~~text~~

use super::shared::unterminated;
use super::{Processor, Scan, ScanContext};
use crate::segmenter::segment::{Segment, SegmentKind};

pub struct StrikethroughProcessor;

impl Processor for StrikethroughProcessor {
    fn name(&self) -> &'static str {
        "strikethrough"
    }

    fn priority(&self) -> u16 {
        25
    }

    fn can_process(&self, ch: char, _ctx: &ScanContext) -> bool {
        ch == '~'
    }

    fn process(&self, buffer: &str, start: usize, ctx: &ScanContext) -> Option<Scan> {
        let input = &buffer[start..];
        if !input.starts_with("~~") {
            return if input.len() == 1 && !ctx.is_end {
                Some(Scan::Pending(input.to_string()))
            } else {
                None
            };
        }

        match input[2..].find("~~") {
            Some(0) => None,
            Some(i) => {
                let end = 2 + i + 2;
                Some(Scan::Consumed {
                    segments: vec![Segment::new(SegmentKind::Strikethrough, &input[..end])],
                    next: start + end,
                })
            }
            None => Some(unterminated(buffer, start, ctx)),
        }
    }
}
