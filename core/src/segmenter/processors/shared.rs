// Helpers shared by the sub-processors

use super::{Scan, ScanContext};
use crate::segmenter::segment::Segment;

/// Resolve an unterminated construct that reaches the end of the buffer.
///
/// Mid-stream the tail is buffered for the next chunk; at true end of input
/// it degrades to one literal TEXT segment so nothing is lost.
pub fn unterminated(buffer: &str, start: usize, ctx: &ScanContext) -> Scan {
    let tail = &buffer[start..];
    if ctx.is_end {
        Scan::Consumed {
            segments: vec![Segment::text(tail)],
            next: buffer.len(),
        }
    } else {
        Scan::Pending(tail.to_string())
    }
}

/// Split off the first line of `input`. Returns the line without its
/// newline, the bytes consumed including the newline, and whether a
/// newline terminated it.
pub fn take_line(input: &str) -> (&str, usize, bool) {
    match input.find('\n') {
        Some(i) => (&input[..i], i + 1, true),
        None => (input, input.len(), false),
    }
}

/// Length of the leading run of `ch` in `input`, in chars (all callers use
/// ASCII markers, so bytes and chars coincide).
pub fn leading_run(input: &str, ch: char) -> usize {
    input.chars().take_while(|&c| c == ch).count()
}

/// Leading indentation as (columns, bytes consumed); tabs count 4 columns.
pub fn indentation(input: &str) -> (usize, usize) {
    let mut columns = 0;
    let mut bytes = 0;
    for ch in input.chars() {
        match ch {
            ' ' => columns += 1,
            '\t' => columns += 4,
            _ => break,
        }
        bytes += ch.len_utf8();
    }
    (columns, bytes)
}

/// Position of the `]` matching an already-consumed `[`, in a slice that
/// starts just after the opening bracket. Nested bracket pairs are skipped.
pub fn balanced_bracket_end(input: &str) -> Option<usize> {
    let mut depth = 1usize;
    for (i, ch) in input.char_indices() {
        match ch {
            '[' => depth += 1,
            ']' => {
                depth -= 1;
                if depth == 0 {
                    return Some(i);
                }
            }
            _ => {}
        }
    }
    None
}

/// Split the parenthesized part of an inline link/image into destination and
/// optional quoted title.
pub fn parse_destination(inner: &str) -> (String, Option<String>) {
    let inner = inner.trim();
    match inner.find(char::is_whitespace) {
        Some(i) => {
            let url = &inner[..i];
            let rest = inner[i..].trim();
            let title = rest
                .strip_prefix('"')
                .and_then(|r| r.strip_suffix('"'))
                .map(str::to_string);
            (url.to_string(), title)
        }
        None => (inner.to_string(), None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_take_line() {
        assert_eq!(take_line("ab\ncd"), ("ab", 3, true));
        assert_eq!(take_line("ab"), ("ab", 2, false));
        assert_eq!(take_line("\nx"), ("", 1, true));
    }

    #[test]
    fn test_indentation_counts_tabs_as_four() {
        assert_eq!(indentation("    x"), (4, 4));
        assert_eq!(indentation("\tx"), (4, 1));
        assert_eq!(indentation("x"), (0, 0));
    }

    #[test]
    fn test_balanced_bracket_end_skips_nested_pairs() {
        assert_eq!(balanced_bracket_end("a[b]c]rest"), Some(6));
        assert_eq!(balanced_bracket_end("plain]"), Some(5));
        assert_eq!(balanced_bracket_end("open["), None);
    }

    #[test]
    fn test_parse_destination_with_title() {
        assert_eq!(
            parse_destination("/img.png \"A title\""),
            ("/img.png".to_string(), Some("A title".to_string()))
        );
        assert_eq!(parse_destination("/img.png"), ("/img.png".to_string(), None));
    }

    #[test]
    fn test_unterminated_degrades_to_text_at_end() {
        let ctx = ScanContext {
            position: 0,
            line_start: true,
            is_end: true,
        };
        match unterminated("**abc", 0, &ctx) {
            Scan::Consumed { segments, next } => {
                assert_eq!(next, 5);
                assert_eq!(segments[0].content, "**abc");
            }
            Scan::Pending(_) => panic!("expected literal text at end of input"),
        }
    }
}
