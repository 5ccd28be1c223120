// Blockquotes: absorb the whole run of quoted lines, strip the markers and
// hand the inner text to the builder for re-tokenization

use super::shared::{leading_run, take_line};
use super::{Processor, Scan, ScanContext};
use crate::segmenter::segment::{Segment, SegmentKind};

const MAX_LEVEL: usize = 6;

pub struct BlockquoteProcessor;

impl Processor for BlockquoteProcessor {
    fn name(&self) -> &'static str {
        "blockquote"
    }

    fn priority(&self) -> u16 {
        90
    }

    fn can_process(&self, ch: char, ctx: &ScanContext) -> bool {
        ctx.line_start && ch == '>'
    }

    fn process(&self, buffer: &str, start: usize, ctx: &ScanContext) -> Option<Scan> {
        let input = &buffer[start..];
        let mut offset = 0;
        let mut level = 0usize;
        let mut inner: Vec<String> = Vec::new();

        loop {
            if offset >= input.len() {
                // Ran off the buffer while still absorbing.
                if !ctx.is_end {
                    return Some(Scan::Pending(input.to_string()));
                }
                break;
            }

            let (line, consumed, terminated) = take_line(&input[offset..]);
            let markers = leading_run(line, '>');

            if offset == 0 {
                level = markers.min(MAX_LEVEL);
                inner.push(strip_markers(line, level));
            } else if line.trim().is_empty() {
                inner.push(String::new());
            } else if markers >= level {
                inner.push(strip_markers(line, level));
            } else {
                break;
            }

            offset += consumed;
            if !terminated {
                if !ctx.is_end {
                    return Some(Scan::Pending(input.to_string()));
                }
                break;
            }
        }

        log::trace!("blockquote level {} over {} lines", level, inner.len());
        Some(Scan::Consumed {
            segments: vec![Segment::new(
                SegmentKind::Blockquote { level: level as u8 },
                inner.join("\n"),
            )],
            next: start + offset,
        })
    }
}

// Remove `level` markers and the single space that conventionally follows.
fn strip_markers(line: &str, level: usize) -> String {
    let stripped = &line[level..];
    stripped.strip_prefix(' ').unwrap_or(stripped).to_string()
}
