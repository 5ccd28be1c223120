// HTML serializer: depth-first emission of the element tree

use super::element::Element;
use super::sanitize::{encode_content, escape_minimal};
use crate::options::ParserOptions;
use std::fmt::Write;

pub fn render_html(root: &Element, options: &ParserOptions) -> String {
    let mut out = String::new();
    render_element(root, options, &mut out);
    out
}

fn render_element(element: &Element, options: &ParserOptions, out: &mut String) {
    let _ = write!(out, "<{}", element.tag);
    for (key, value) in &element.attributes {
        let _ = write!(out, " {}=\"{}\"", key, encode(value, options));
    }

    if element.self_closing {
        out.push_str(" />");
        return;
    }

    out.push('>');
    if let Some(content) = &element.content {
        out.push_str(&encode(content, options));
    }
    for child in &element.children {
        render_element(child, options, out);
    }
    let _ = write!(out, "</{}>", element.tag);
}

fn encode(text: &str, options: &ParserOptions) -> String {
    if options.sanitization {
        encode_content(text)
    } else {
        escape_minimal(text)
    }
}
