// Text catch-all: runs between constructs, newline collapsing, hard breaks
//
// Runs are trimmed and whitespace-only runs vanish; the paragraph builder
// re-inserts single spaces between inline children. One newline separates
// segments silently (soft break), a blank line becomes PARAGRAPH_BREAK, and
// a run ending in two-or-more spaces before a newline becomes LINE_BREAK.

use super::{Processor, Scan, ScanContext};
use crate::segmenter::segment::{Segment, SegmentKind};

pub struct TextProcessor;

impl Processor for TextProcessor {
    fn name(&self) -> &'static str {
        "text"
    }

    fn priority(&self) -> u16 {
        10
    }

    fn can_process(&self, _ch: char, _ctx: &ScanContext) -> bool {
        true
    }

    fn process(&self, buffer: &str, start: usize, ctx: &ScanContext) -> Option<Scan> {
        let input = &buffer[start..];
        let first = input.chars().next()?;

        if first == '\n' {
            return Some(consume_newlines(input, start, ctx));
        }
        if is_boundary(input.as_bytes(), 0) {
            // A construct starter nobody claimed: one literal character.
            let len = first.len_utf8();
            return Some(Scan::Consumed {
                segments: vec![Segment::text(&input[..len])],
                next: start + len,
            });
        }
        Some(consume_run(input, start, ctx))
    }
}

// Collapse a newline run. Interior whitespace-only lines count as blank;
// two or more newlines make a paragraph break.
fn consume_newlines(input: &str, start: usize, ctx: &ScanContext) -> Scan {
    let bytes = input.as_bytes();
    let mut offset = 0;
    let mut newlines = 0;

    loop {
        if offset >= bytes.len() {
            break;
        }
        if bytes[offset] == b'\n' {
            offset += 1;
            newlines += 1;
            continue;
        }
        let mut probe = offset;
        while probe < bytes.len() && (bytes[probe] == b' ' || bytes[probe] == b'\t') {
            probe += 1;
        }
        if probe > offset && probe < bytes.len() && bytes[probe] == b'\n' {
            offset = probe;
            continue;
        }
        if probe >= bytes.len() && !ctx.is_end {
            // Trailing whitespace may turn out to be a blank line.
            return Scan::Pending(input.to_string());
        }
        break;
    }

    if offset >= bytes.len() && !ctx.is_end {
        return Scan::Pending(input.to_string());
    }

    let segments = if newlines >= 2 {
        vec![Segment::new(SegmentKind::ParagraphBreak, &input[..offset])]
    } else {
        Vec::new()
    };
    Scan::Consumed {
        segments,
        next: start + offset,
    }
}

// Consume a run up to the next construct boundary or newline.
fn consume_run(input: &str, start: usize, ctx: &ScanContext) -> Scan {
    let bytes = input.as_bytes();
    let mut end = input.len();
    let mut hit_newline = false;

    for (i, ch) in input.char_indices() {
        if i == 0 {
            continue;
        }
        if ch == '\n' {
            end = i;
            hit_newline = true;
            break;
        }
        if is_boundary(bytes, i) {
            end = i;
            break;
        }
    }

    if end == input.len() && !ctx.is_end {
        // No terminator in sight; the run may keep growing.
        return Scan::Pending(input.to_string());
    }

    let run = &input[..end];
    if hit_newline {
        let trailing_spaces = run.len() - run.trim_end_matches(' ').len();
        let after_newline = &input[end + 1..];
        if trailing_spaces >= 2 {
            if after_newline.is_empty() && !ctx.is_end {
                // The next chunk decides between hard break and blank line.
                return Scan::Pending(input.to_string());
            }
            if !after_newline.starts_with('\n') {
                let mut segments = Vec::new();
                push_trimmed(&mut segments, run);
                segments.push(Segment::new(
                    SegmentKind::LineBreak {
                        spaces: trailing_spaces,
                    },
                    &input[end - trailing_spaces..=end],
                ));
                return Scan::Consumed {
                    segments,
                    next: start + end + 1,
                };
            }
        }
    }

    let mut segments = Vec::new();
    push_trimmed(&mut segments, run);
    Scan::Consumed {
        segments,
        next: start + end,
    }
}

fn push_trimmed(segments: &mut Vec<Segment>, run: &str) {
    let trimmed = run.trim();
    if !trimmed.is_empty() {
        segments.push(Segment::text(trimmed));
    }
}

// Construct starters a run must stop at. `-` splits runs by design even
// mid-word; `!` and `~` only matter when they could open their construct.
fn is_boundary(bytes: &[u8], i: usize) -> bool {
    match bytes[i] {
        b'\\' | b'`' | b'*' | b'_' | b'[' | b'-' => true,
        b'~' => bytes.get(i + 1) == Some(&b'~'),
        b'!' => bytes.get(i + 1) == Some(&b'['),
        _ => false,
    }
}
