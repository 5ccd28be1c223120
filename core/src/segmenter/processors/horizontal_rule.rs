// Thematic breaks: ---, ***, ___ (whitespace allowed between markers)

use super::shared::take_line;
use super::{Processor, Scan, ScanContext};
use crate::segmenter::segment::{Segment, SegmentKind};

pub struct HorizontalRuleProcessor;

impl Processor for HorizontalRuleProcessor {
    fn name(&self) -> &'static str {
        "horizontal_rule"
    }

    fn priority(&self) -> u16 {
        90
    }

    fn can_process(&self, ch: char, ctx: &ScanContext) -> bool {
        ctx.line_start && matches!(ch, '-' | '*' | '_')
    }

    fn process(&self, buffer: &str, start: usize, ctx: &ScanContext) -> Option<Scan> {
        let input = &buffer[start..];
        let (line, consumed, terminated) = take_line(input);

        let marker = line.chars().next()?;
        let mut count = 0;
        for ch in line.chars() {
            if ch == marker {
                count += 1;
            } else if !ch.is_whitespace() {
                return None;
            }
        }

        if !terminated && !ctx.is_end {
            // Still only markers and whitespace; the line may yet grow into
            // a rule (or into a list item, which re-scans from this tail).
            return Some(Scan::Pending(input.to_string()));
        }
        if count < 3 {
            return None;
        }

        Some(Scan::Consumed {
            segments: vec![Segment::new(SegmentKind::HorizontalRule { marker }, line)],
            next: start + consumed,
        })
    }
}
