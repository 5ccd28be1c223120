// Segment definitions: the flat token stream between segmenter and builder

/// Which family of list a list-item segment belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListType {
    Unordered,
    Ordered,
    Task,
}

/// All segment kinds. Kind-specific metadata lives directly on the variant.
#[derive(Debug, Clone, PartialEq)]
pub enum SegmentKind {
    Text,
    Header {
        level: u8,
    },
    Blockquote {
        level: u8,
    },
    CodeBlock,
    InlineCode,
    Emphasis {
        // Delimiter form: "*", "**", "***" or "_"
        marker: String,
    },
    Strikethrough,
    Link {
        text: String,
        url: String,
        title: Option<String>,
        is_reference: bool,
    },
    Image {
        alt: String,
        src: String,
        title: Option<String>,
        is_reference: bool,
    },
    ListItem {
        marker: String,
        ordinal: Option<u64>,
        indent: usize,
        list_type: ListType,
    },
    TaskListItem {
        checked: bool,
        indent: usize,
    },
    HorizontalRule {
        marker: char,
    },
    LineBreak {
        spaces: usize,
    },
    ParagraphBreak,
    Unknown,
}

/// Flat typed token produced by the segmenter.
///
/// `content` is always the exact source slice including delimiters, so
/// builders can re-tokenize container content.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    pub kind: SegmentKind,
    pub content: String,
}

impl Segment {
    pub fn new(kind: SegmentKind, content: impl Into<String>) -> Self {
        Self {
            kind,
            content: content.into(),
        }
    }

    pub fn text(content: impl Into<String>) -> Self {
        Self::new(SegmentKind::Text, content)
    }

    /// Inline kinds participate in paragraph assembly.
    pub fn is_inline(&self) -> bool {
        matches!(
            self.kind,
            SegmentKind::Text
                | SegmentKind::Emphasis { .. }
                | SegmentKind::InlineCode
                | SegmentKind::Strikethrough
                | SegmentKind::Link { .. }
        )
    }
}
