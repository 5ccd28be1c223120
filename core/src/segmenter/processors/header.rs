// ATX headers

use super::shared::take_line;
use super::{Processor, Scan, ScanContext};
use crate::segmenter::segment::{Segment, SegmentKind};
use nom::bytes::complete::take_while1;
use nom::{IResult, Parser};

// Leading `#` run of an ATX header line
fn hash_run(input: &str) -> IResult<&str, &str> {
    take_while1(|c| c == '#').parse(input)
}

pub struct HeaderProcessor;

impl Processor for HeaderProcessor {
    fn name(&self) -> &'static str {
        "header"
    }

    fn priority(&self) -> u16 {
        100
    }

    fn can_process(&self, ch: char, ctx: &ScanContext) -> bool {
        ctx.line_start && ch == '#'
    }

    fn process(&self, buffer: &str, start: usize, ctx: &ScanContext) -> Option<Scan> {
        let input = &buffer[start..];
        let (line, consumed, terminated) = take_line(input);
        if !terminated && !ctx.is_end {
            // The header line may still be growing.
            return Some(Scan::Pending(input.to_string()));
        }

        let run = hash_run(line).map(|(_, run)| run.len()).unwrap_or(0);
        let level = run.min(6) as u8;
        log::trace!("header level {} at {}", level, start);
        Some(Scan::Consumed {
            segments: vec![Segment::new(SegmentKind::Header { level }, line)],
            next: start + consumed,
        })
    }
}
