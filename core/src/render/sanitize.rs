// Output sanitization: minimal entity escaping (always on), the full
// content encoder, and URL scheme filtering

use regex::Regex;
use std::sync::OnceLock;

/// Minimal entity set applied to all content and attribute values even with
/// sanitization disabled; keeps the output well-formed.
pub fn escape_minimal(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

fn event_handler_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"(?i)on\w+\s*=\s*(?:"[^"]*"|'[^']*'|[^\s>]+)?"#)
            .expect("event handler pattern")
    })
}

fn javascript_scheme_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)javascript:").expect("javascript scheme pattern"))
}

/// Full content encoder used when sanitization is enabled: strips inline
/// event handlers and `javascript:` occurrences, then entity-encodes every
/// character in the dangerous set.
pub fn encode_content(input: &str) -> String {
    let stripped = event_handler_pattern().replace_all(input, "");
    let stripped = javascript_scheme_pattern().replace_all(&stripped, "");

    let mut out = String::with_capacity(stripped.len());
    for ch in stripped.chars() {
        match dangerous_entity(ch) {
            Some(entity) => out.push_str(entity),
            None => out.push(ch),
        }
    }
    out
}

fn dangerous_entity(ch: char) -> Option<&'static str> {
    let entity = match ch {
        '&' => "&amp;",
        '<' => "&lt;",
        '>' => "&gt;",
        '"' => "&quot;",
        '\'' => "&#39;",
        '`' => "&#96;",
        '\t' => "&#9;",
        '=' => "&#61;",
        '(' => "&#40;",
        ')' => "&#41;",
        ';' => "&#59;",
        ':' => "&#58;",
        '%' => "&#37;",
        '\\' => "&#92;",
        '[' => "&#91;",
        ']' => "&#93;",
        '{' => "&#123;",
        '}' => "&#125;",
        '!' => "&#33;",
        '@' => "&#64;",
        '#' => "&#35;",
        '$' => "&#36;",
        '^' => "&#94;",
        '*' => "&#42;",
        '+' => "&#43;",
        '|' => "&#124;",
        '?' => "&#63;",
        '~' => "&#126;",
        '/' => "&#47;",
        '-' => "&#45;",
        _ => return None,
    };
    Some(entity)
}

const ALLOWED_SCHEMES: [&str; 4] = ["http:", "https:", "mailto:", "tel:"];

/// Filter a link/image destination. An empty destination is `#` regardless
/// of the toggle; with sanitization off everything else passes through.
pub fn sanitize_url(url: &str, enabled: bool) -> String {
    if url.is_empty() {
        return "#".to_string();
    }
    if !enabled {
        return url.to_string();
    }

    let lower = url.to_ascii_lowercase();
    if ALLOWED_SCHEMES
        .iter()
        .any(|scheme| lower.starts_with(scheme))
    {
        return url.to_string();
    }
    if url.starts_with("./") && !url.contains("../") {
        return url.to_string();
    }
    "#".to_string()
}
