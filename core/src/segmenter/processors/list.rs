// List items: unordered, ordered and task markers, one item per line.
// Grouping into lists happens in the builder.

use super::shared::{indentation, take_line};
use super::{Processor, Scan, ScanContext};
use crate::segmenter::segment::{ListType, Segment, SegmentKind};
use nom::bytes::complete::tag;
use nom::character::complete::{digit1, one_of};
use nom::{IResult, Parser};

pub struct ListProcessor;

impl Processor for ListProcessor {
    fn name(&self) -> &'static str {
        "list"
    }

    fn priority(&self) -> u16 {
        70
    }

    fn can_process(&self, ch: char, ctx: &ScanContext) -> bool {
        ctx.line_start && (ch == ' ' || ch == '\t' || ch == '-' || ch == '*' || ch.is_ascii_digit())
    }

    fn process(&self, buffer: &str, start: usize, ctx: &ScanContext) -> Option<Scan> {
        let input = &buffer[start..];
        let (columns, marker_offset) = indentation(input);
        let indent = columns / 4;

        let after_indent = &input[marker_offset..];
        let (line, line_len, terminated) = take_line(after_indent);

        if !terminated && !ctx.is_end {
            // An item line that is still growing must not be committed early.
            if line.starts_with('-') || line.starts_with('*') || starts_with_digit(line) {
                return Some(Scan::Pending(input.to_string()));
            }
            return None;
        }

        let segment = task_item(line, indent)
            .or_else(|| unordered_item(line, indent))
            .or_else(|| ordered_item(line, indent))?;

        Some(Scan::Consumed {
            segments: vec![segment],
            next: start + marker_offset + line_len,
        })
    }
}

fn starts_with_digit(line: &str) -> bool {
    line.chars().next().is_some_and(|c| c.is_ascii_digit())
}

// `- [ ] ` / `- [x] ` / `- [X] `, returning the checkbox mark
fn task_marker(input: &str) -> IResult<&str, char> {
    let (rest, _) = tag("- [").parse(input)?;
    let (rest, mark) = one_of(" xX").parse(rest)?;
    let (rest, _) = tag("] ").parse(rest)?;
    Ok((rest, mark))
}

fn task_item(line: &str, indent: usize) -> Option<Segment> {
    let (content, mark) = task_marker(line).ok()?;
    Some(Segment::new(
        SegmentKind::TaskListItem {
            checked: mark != ' ',
            indent,
        },
        content,
    ))
}

// `- ` / `* `, returning the marker character
fn unordered_marker(input: &str) -> IResult<&str, char> {
    let (rest, marker) = one_of("-*").parse(input)?;
    let (rest, _) = tag(" ").parse(rest)?;
    Ok((rest, marker))
}

fn unordered_item(line: &str, indent: usize) -> Option<Segment> {
    let (content, marker) = unordered_marker(line).ok()?;
    Some(Segment::new(
        SegmentKind::ListItem {
            marker: marker.to_string(),
            ordinal: None,
            indent,
            list_type: ListType::Unordered,
        },
        content,
    ))
}

// `1. `, returning the digit run
fn ordered_marker(input: &str) -> IResult<&str, &str> {
    let (rest, digits) = digit1(input)?;
    let (rest, _) = tag(". ").parse(rest)?;
    Ok((rest, digits))
}

fn ordered_item(line: &str, indent: usize) -> Option<Segment> {
    let (content, digits) = ordered_marker(line).ok()?;
    let ordinal = digits.parse::<u64>().ok()?;
    Some(Segment::new(
        SegmentKind::ListItem {
            marker: format!("{digits}."),
            ordinal: Some(ordinal),
            indent,
            list_type: ListType::Ordered,
        },
        content,
    ))
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
            Some(Scan::Consumed { mut segments, next }) => {
                assert_eq!(segments.len(), 1);
                (segments.remove(0), next)
            }
            other => panic!("expected one segment, got {other:?}"),
        }
    }

    #[test]
    fn test_unordered_item() {
        let (segment, next) = single(ListProcessor.process("- apples\n- pears", 0, &ctx(true)));
        assert_eq!(next, 9);
        assert_eq!(segment.content, "apples");
        assert!(matches!(
            segment.kind,
            SegmentKind::ListItem {
                list_type: ListType::Unordered,
                indent: 0,
                ..
            }
        ));
    }

    #[test]
    fn test_ordered_item_keeps_ordinal() {
        let (segment, _) = single(ListProcessor.process("12. twelfth\n", 0, &ctx(true)));
        match segment.kind {
            SegmentKind::ListItem {
                ordinal,
                list_type,
                ref marker,
                ..
            } => {
                assert_eq!(ordinal, Some(12));
                assert_eq!(list_type, ListType::Ordered);
                assert_eq!(marker, "12.");
            }
            other => panic!("expected ordered item, got {other:?}"),
        }
    }

    #[test]
    fn test_task_item_checked_forms() {
        let (segment, _) = single(ListProcessor.process("- [X] done\n", 0, &ctx(true)));
        assert!(matches!(
            segment.kind,
            SegmentKind::TaskListItem { checked: true, .. }
        ));
        assert_eq!(segment.content, "done");

        let (segment, _) = single(ListProcessor.process("- [ ] todo\n", 0, &ctx(true)));
        assert!(matches!(
            segment.kind,
            SegmentKind::TaskListItem { checked: false, .. }
        ));
    }

    #[test]
    fn test_indentation_divides_by_four() {
        let (segment, _) = single(ListProcessor.process("    - nested\n", 0, &ctx(true)));
        assert!(matches!(
            segment.kind,
            SegmentKind::ListItem { indent: 1, .. }
        ));

        let (segment, _) = single(ListProcessor.process("\t- nested\n", 0, &ctx(true)));
        assert!(matches!(
            segment.kind,
            SegmentKind::ListItem { indent: 1, .. }
        ));
    }

    #[test]
    fn test_marker_without_space_declines() {
        assert!(ListProcessor.process("-item\n", 0, &ctx(true)).is_none());
        assert!(ListProcessor.process("1.item\n", 0, &ctx(true)).is_none());
    }
}
