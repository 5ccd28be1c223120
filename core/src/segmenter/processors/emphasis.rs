// Emphasis: ***bold italic***, **bold**, *italic*, _italic_
//
// The opening run decides the form; the closing marker is the next literal
// occurrence of the same delimiter string. No flanking rules are applied,
// so intraword delimiters open emphasis.

use super::shared::{leading_run, unterminated};
use super::{Processor, Scan, ScanContext};
use crate::segmenter::segment::{Segment, SegmentKind};

pub struct EmphasisProcessor;

impl Processor for EmphasisProcessor {
    fn name(&self) -> &'static str {
        "emphasis"
    }

    fn priority(&self) -> u16 {
        20
    }

    fn can_process(&self, ch: char, _ctx: &ScanContext) -> bool {
        ch == '*' || ch == '_'
    }

    fn process(&self, buffer: &str, start: usize, ctx: &ScanContext) -> Option<Scan> {
        let input = &buffer[start..];
        let marker = if input.starts_with('_') {
            "_"
        } else {
            match leading_run(input, '*').min(3) {
                1 => "*",
                2 => "**",
                _ => "***",
            }
        };

        match input[marker.len()..].find(marker) {
            // Empty inner content is not emphasis.
            Some(0) => None,
            Some(i) => {
                let end = marker.len() + i + marker.len();
                Some(Scan::Consumed {
                    segments: vec![Segment::new(
                        SegmentKind::Emphasis {
                            marker: marker.to_string(),
                        },
                        &input[..end],
                    )],
                    next: start + end,
                })
            }
            None => Some(unterminated(buffer, start, ctx)),
        }
    }
}
