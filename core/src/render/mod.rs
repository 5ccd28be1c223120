// HTML renderer: AST → element tree → string

pub mod element;
pub mod html;
pub mod mapper;
pub mod sanitize;

pub use element::{Element, Tag};
pub use html::render_html;
pub use mapper::{map_document, map_node};

use crate::builder::ast::Document;
use crate::options::ParserOptions;

/// Render a document AST to an HTML string.
pub fn render(document: &Document, options: &ParserOptions) -> String {
    log::debug!("rendering {} nodes to HTML", document.len());
    let tree = map_document(document);
    let output = render_html(&tree, options);
    log::debug!("generated {} bytes of HTML", output.len());
    output
}
