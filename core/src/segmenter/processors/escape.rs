// Backslash escapes

use super::{Processor, Scan, ScanContext};
use crate::segmenter::segment::Segment;
use nom::character::complete::{char, one_of};
use nom::{IResult, Parser};

// Characters a backslash may escape; anything else leaves the backslash
// literal (it then falls through to the text processor).
const ESCAPABLE: &str = "*_`[](){}#+-.!|";

fn escaped_char(input: &str) -> IResult<&str, char> {
    let (rest, _) = char('\\').parse(input)?;
    one_of(ESCAPABLE).parse(rest)
}

pub struct EscapeProcessor;

impl Processor for EscapeProcessor {
    fn name(&self) -> &'static str {
        "escape"
    }

    fn priority(&self) -> u16 {
        150
    }

    fn can_process(&self, ch: char, _ctx: &ScanContext) -> bool {
        ch == '\\'
    }

    fn process(&self, buffer: &str, start: usize, ctx: &ScanContext) -> Option<Scan> {
        let input = &buffer[start..];
        match escaped_char(input) {
            Ok((_, ch)) => Some(Scan::Consumed {
                segments: vec![Segment::text(ch.to_string())],
                next: start + 1 + ch.len_utf8(),
            }),
            // A trailing backslash mid-stream may become an escape once the
            // next chunk arrives.
            Err(_) if input.len() == 1 && !ctx.is_end => Some(Scan::Pending(input.to_string())),
            Err(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::segmenter::segment::SegmentKind;

    fn ctx(is_end: bool) -> ScanContext {
        ScanContext {
            position: 0,
            line_start: true,
            is_end,
        }
    }

    #[test]
    fn test_escaped_star_becomes_text() {
        let scan = EscapeProcessor.process("\\*bold", 0, &ctx(true)).unwrap();
        match scan {
            Scan::Consumed { segments, next } => {
                assert_eq!(next, 2);
                assert_eq!(segments[0].kind, SegmentKind::Text);
                assert_eq!(segments[0].content, "*");
            }
            Scan::Pending(_) => panic!("unexpected pending"),
        }
    }

    #[test]
    fn test_non_escapable_declines() {
        assert!(EscapeProcessor.process("\\q", 0, &ctx(true)).is_none());
    }

    #[test]
    fn test_trailing_backslash_pends_mid_stream() {
        match EscapeProcessor.process("\\", 0, &ctx(false)) {
            Some(Scan::Pending(tail)) => assert_eq!(tail, "\\"),
            other => panic!("expected pending, got {other:?}"),
        }
    }
}
