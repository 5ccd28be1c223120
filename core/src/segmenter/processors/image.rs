// Inline and reference images

use super::shared::{balanced_bracket_end, parse_destination, unterminated};
use super::{Processor, Scan, ScanContext};
use crate::render::sanitize::sanitize_url;
use crate::segmenter::segment::{Segment, SegmentKind};

pub struct ImageProcessor {
    sanitize: bool,
}

impl ImageProcessor {
    pub fn new(sanitize: bool) -> Self {
        Self { sanitize }
    }
}

impl Processor for ImageProcessor {
    fn name(&self) -> &'static str {
        "image"
    }

    fn priority(&self) -> u16 {
        50
    }

    fn can_process(&self, ch: char, _ctx: &ScanContext) -> bool {
        ch == '!'
    }

    fn process(&self, buffer: &str, start: usize, ctx: &ScanContext) -> Option<Scan> {
        let input = &buffer[start..];
        if !input.starts_with("![") {
            // A lone bang may still grow into `![` on the next chunk.
            return if input.len() == 1 && !ctx.is_end {
                Some(Scan::Pending(input.to_string()))
            } else {
                None
            };
        }

        let alt_end = match balanced_bracket_end(&input[2..]) {
            Some(i) => i,
            None => return Some(unterminated(buffer, start, ctx)),
        };
        let alt = &input[2..2 + alt_end];
        let after = &input[2 + alt_end + 1..];
        let after_offset = 2 + alt_end + 1;

        match after.chars().next() {
            Some('(') => {
                let close = match after[1..].find(')') {
                    Some(j) => j,
                    None => return Some(unterminated(buffer, start, ctx)),
                };
                let (src, title) = parse_destination(&after[1..1 + close]);
                let end = after_offset + 1 + close + 1;
                Some(Scan::Consumed {
                    segments: vec![Segment::new(
                        SegmentKind::Image {
                            alt: alt.to_string(),
                            src: sanitize_url(&src, self.sanitize),
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
                let label = &after[1..1 + close];
                let end = after_offset + 1 + close + 1;
                Some(Scan::Consumed {
                    segments: vec![Segment::new(
                        SegmentKind::Image {
                            alt: alt.to_string(),
                            src: sanitize_url(label, self.sanitize),
                            title: None,
                            is_reference: true,
                        },
                        &input[..end],
                    )],
                    next: start + end,
                })
            }
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

    #[test]
    fn test_inline_image() {
        let processor = ImageProcessor::new(false);
        match processor.process("![logo](/logo.png \"Logo\")", 0, &ctx(true)) {
            Some(Scan::Consumed { segments, next }) => {
                assert_eq!(next, 25);
                match &segments[0].kind {
                    SegmentKind::Image {
                        alt, src, title, ..
                    } => {
                        assert_eq!(alt, "logo");
                        assert_eq!(src, "/logo.png");
                        assert_eq!(title.as_deref(), Some("Logo"));
                    }
                    other => panic!("expected image, got {other:?}"),
                }
            }
            other => panic!("expected image, got {other:?}"),
        }
    }

    #[test]
    fn test_reference_image_flagged() {
        let processor = ImageProcessor::new(false);
        match processor.process("![a][pic]", 0, &ctx(true)) {
            Some(Scan::Consumed { segments, .. }) => {
                assert!(matches!(
                    segments[0].kind,
                    SegmentKind::Image {
                        is_reference: true,
                        ..
                    }
                ));
            }
            other => panic!("expected image, got {other:?}"),
        }
    }

    #[test]
    fn test_plain_bang_declines_at_end() {
        let processor = ImageProcessor::new(false);
        assert!(processor.process("!not an image", 0, &ctx(true)).is_none());
    }
}
