// List assembly: group consecutive item segments of one kind, nest deeper
// indents under the previous item

use crate::builder::ast::{Node, NodeKind};
use crate::builder::{DocumentBuilder, SegmentCursor};
use crate::segmenter::{ListType, SegmentKind};

#[derive(Debug, Clone, Copy, PartialEq)]
enum Group {
    Plain(ListType),
    Task,
}

/// Build one list group starting at the cursor. The caller guarantees the
/// current segment is a (task) list item.
pub fn build(builder: &DocumentBuilder, cursor: &mut SegmentCursor, depth: usize) -> Option<Node> {
    let (base_indent, group) = classify(cursor.peek()?)?;
    let mut items: Vec<Node> = Vec::new();
    let mut first_ordinal: Option<u64> = None;

    while let Some(segment) = cursor.peek() {
        let (indent, item_group) = match classify(segment) {
            Some(found) => found,
            None => break,
        };

        if indent > base_indent && !items.is_empty() && depth + 1 < builder.max_depth() {
            // A deeper item opens a nested group under the previous item.
            if let Some(nested) = build(builder, cursor, depth + 1) {
                if let Some(last) = items.last_mut() {
                    last.children.push(nested);
                }
                continue;
            }
            break;
        }
        if indent < base_indent || item_group != group {
            break;
        }

        let segment = cursor.advance()?;
        let mut children = builder.reparse(&segment.content, depth + 1);
        let kind = match segment.kind {
            SegmentKind::TaskListItem { checked, .. } => {
                // Flatten the paragraph wrapper so inline content sits
                // directly under the label.
                children = unwrap_paragraph(children);
                NodeKind::TaskListItem { checked }
            }
            SegmentKind::ListItem { ordinal, .. } => {
                if first_ordinal.is_none() {
                    first_ordinal = ordinal;
                }
                NodeKind::ListItem
            }
            _ => break,
        };
        items.push(Node::with_children(kind, children));
    }

    let node = match group {
        Group::Plain(list_type) => {
            let ordered = list_type == ListType::Ordered;
            let start = if ordered {
                first_ordinal.filter(|&n| n != 1)
            } else {
                None
            };
            Node::with_children(NodeKind::List { ordered, start }, items)
        }
        Group::Task => Node::with_children(NodeKind::TaskList, items),
    };
    Some(node)
}

fn classify(segment: &crate::segmenter::Segment) -> Option<(usize, Group)> {
    match segment.kind {
        SegmentKind::ListItem {
            indent, list_type, ..
        } => Some((indent, Group::Plain(list_type))),
        SegmentKind::TaskListItem { indent, .. } => Some((indent, Group::Task)),
        _ => None,
    }
}

fn unwrap_paragraph(mut children: Vec<Node>) -> Vec<Node> {
    if children.len() == 1 && children[0].kind == NodeKind::Paragraph {
        children.remove(0).children
    } else {
        children
    }
}
