// mdstream - streaming Markdown to HTML renderer
//
// Pipeline: segmenter → document builder → element-tree mapper → renderer.
// Supports a CommonMark subset plus GitHub extensions (task lists,
// strikethrough), with one-shot and chunked streaming surfaces.

pub mod builder;
pub mod options;
pub mod render;
pub mod segmenter;
pub mod stream;

// Re-export main API
pub use builder::{Document, DocumentBuilder, Node, NodeKind};
pub use options::{ParserOptions, StreamOptions};
pub use render::{map_document, render_html, Element, Tag};
pub use segmenter::{ListType, Segment, SegmentKind, Segmenter};
pub use stream::MarkdownStream;

use anyhow::Result;

/// One-shot conversion of markdown text to an HTML string.
pub fn parse(markdown: &str) -> Result<String> {
    parse_with_options(markdown, ParserOptions::default())
}

/// One-shot conversion with explicit options.
pub fn parse_with_options(markdown: &str, options: ParserOptions) -> Result<String> {
    MarkdownStream::new(options).process_string(markdown)
}

/// Construct a streaming instance, feed it `markdown` in chunks, flush, and
/// return the instance for further use. Output arrives through the handler;
/// the chunking granularity comes from `options.chunk_size` and never
/// affects the produced HTML.
pub fn stream(
    markdown: &str,
    options: StreamOptions,
    output_handler: impl FnMut(&str) + 'static,
) -> Result<MarkdownStream> {
    let chunk_size = options.effective_chunk_size();
    let mut instance = MarkdownStream::new(options.parser);
    instance.set_output_handler(output_handler);

    let mut index = 0;
    while index < markdown.len() {
        let mut end = (index + chunk_size).min(markdown.len());
        while !markdown.is_char_boundary(end) {
            end -= 1;
        }
        if end == index {
            // A single char longer than the chunk size; take it whole.
            end = index + 1;
            while !markdown.is_char_boundary(end) {
                end += 1;
            }
        }
        instance.process(&markdown[index..end]);
        index = end;
    }

    instance.flush()?;
    Ok(instance)
}
