// Inline and reference links

use super::shared::{balanced_bracket_end, parse_destination, unterminated};
use super::{Processor, Scan, ScanContext};
use crate::render::sanitize::sanitize_url;
use crate::segmenter::segment::{Segment, SegmentKind};

pub struct LinkProcessor {
    sanitize: bool,
}

impl LinkProcessor {
    pub fn new(sanitize: bool) -> Self {
        Self { sanitize }
    }
}

impl Processor for LinkProcessor {
    fn name(&self) -> &'static str {
        "link"
    }

    fn priority(&self) -> u16 {
        40
    }

    fn can_process(&self, ch: char, _ctx: &ScanContext) -> bool {
        ch == '['
    }

    fn process(&self, buffer: &str, start: usize, ctx: &ScanContext) -> Option<Scan> {
        let input = &buffer[start..];
        let text_end = match balanced_bracket_end(&input[1..]) {
            Some(i) => i,
            None => return Some(unterminated(buffer, start, ctx)),
        };
        let text = &input[1..1 + text_end];
        let after = &input[1 + text_end + 1..];
        let after_offset = 1 + text_end + 1;

        match after.chars().next() {
            Some('(') => {
                let close = match after[1..].find(')') {
                    Some(j) => j,
                    None => return Some(unterminated(buffer, start, ctx)),
                };
                let (url, title) = parse_destination(&after[1..1 + close]);
                let end = after_offset + 1 + close + 1;
                Some(Scan::Consumed {
                    segments: vec![Segment::new(
                        SegmentKind::Link {
                            text: text.to_string(),
                            url: sanitize_url(&url, self.sanitize),
                            title,
                            is_reference: false,
                        },
                        &input[..end],
                    )],
                    next: start + end,
                })
            }
            Some('[') => {
                let close = match after[1..].find(']') {
                    Some(j) => j,
                    None => return Some(unterminated(buffer, start, ctx)),
                };
                // Reference labels are kept unresolved.
                let label = &after[1..1 + close];
                let end = after_offset + 1 + close + 1;
                Some(Scan::Consumed {
                    segments: vec![Segment::new(
                        SegmentKind::Link {
                            text: text.to_string(),
                            url: sanitize_url(label, self.sanitize),
                            title: None,
                            is_reference: true,
                        },
                        &input[..end],
                    )],
                    next: start + end,
                })
            }
            // Bracketed text with no destination is not a link.
            Some(_) => None,
            None if !ctx.is_end => Some(Scan::Pending(input.to_string())),
            None => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx(is_end: bool) -> ScanContext {
        ScanContext {
            position: 0,
            line_start: true,
            is_end,
        }
    }

    fn single(scan: Option<Scan>) -> (Segment, usize) {
        match scan {
            Some(Scan::Consumed { mut segments, next }) => (segments.remove(0), next),
            other => panic!("expected segment, got {other:?}"),
        }
    }

    #[test]
    fn test_inline_link() {
        let processor = LinkProcessor::new(false);
        let (segment, next) = single(processor.process("[a](https://x.dev) tail", 0, &ctx(true)));
        assert_eq!(next, 18);
        assert_eq!(segment.content, "[a](https://x.dev)");
        match segment.kind {
            SegmentKind::Link {
                text,
                url,
                title,
                is_reference,
            } => {
                assert_eq!(text, "a");
                assert_eq!(url, "https://x.dev");
                assert_eq!(title, None);
                assert!(!is_reference);
            }
            other => panic!("expected link, got {other:?}"),
        }
    }

    #[test]
    fn test_link_with_title() {
        let processor = LinkProcessor::new(false);
        let (segment, _) = single(processor.process("[a](/b \"B page\")", 0, &ctx(true)));
        match segment.kind {
            SegmentKind::Link { url, title, .. } => {
                assert_eq!(url, "/b");
                assert_eq!(title.as_deref(), Some("B page"));
            }
            other => panic!("expected link, got {other:?}"),
        }
    }

    #[test]
    fn test_reference_link_unresolved() {
        let processor = LinkProcessor::new(false);
        let (segment, _) = single(processor.process("[a][ref]", 0, &ctx(true)));
        match segment.kind {
            SegmentKind::Link {
                url, is_reference, ..
            } => {
                assert_eq!(url, "ref");
                assert!(is_reference);
            }
            other => panic!("expected link, got {other:?}"),
        }
    }

    #[test]
    fn test_javascript_url_collapses_when_sanitizing() {
        let processor = LinkProcessor::new(true);
        let (segment, _) = single(processor.process("[a](javascript:x)", 0, &ctx(true)));
        match segment.kind {
            SegmentKind::Link { url, .. } => assert_eq!(url, "#"),
            other => panic!("expected link, got {other:?}"),
        }
    }

    #[test]
    fn test_bare_brackets_decline() {
        let processor = LinkProcessor::new(false);
        assert!(processor.process("[note] only", 0, &ctx(true)).is_none());
    }

    #[test]
    fn test_split_construct_pends() {
        let processor = LinkProcessor::new(false);
        match processor.process("[a](htt", 0, &ctx(false)) {
            Some(Scan::Pending(tail)) => assert_eq!(tail, "[a](htt"),
            other => panic!("expected pending, got {other:?}"),
        }
    }
}
