// Streaming driver tests: chunk invariance and handler discipline

use mdstream::{parse, stream, MarkdownStream, ParserOptions, StreamOptions};
use pretty_assertions::assert_eq;
use std::cell::RefCell;
use std::rc::Rc;

fn render_chunked(chunks: &[&str]) -> String {
    let outputs: Rc<RefCell<Vec<String>>> = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&outputs);
    let mut stream = MarkdownStream::new(ParserOptions::default());
    stream.set_output_handler(move |html| sink.borrow_mut().push(html.to_string()));

    for chunk in chunks {
        stream.process(chunk);
    }
    stream.flush().expect("flush failed");

    let outputs = outputs.borrow();
    assert!(outputs.len() <= 1, "one handler invocation per flush");
    outputs.join("")
}

#[test]
fn test_two_way_splits_match_one_shot() {
    let text = "# Title\n**a** *b* and `code`\n\n- item one\n- item two\n\n> quoted  \ntail";
    let expected = parse(text).expect("parse failed");

    for split in 0..=text.len() {
        if !text.is_char_boundary(split) {
            continue;
        }
        let chunked = render_chunked(&[&text[..split], &text[split..]]);
        assert_eq!(chunked, expected, "split at byte {split}");
    }
}

#[test]
fn test_many_way_split_matches_one_shot() {
    let text = "para one\n\n```js\nlet a=1\n```\n\n- [x] done\n- [ ] todo\n\n***final***";
    let expected = parse(text).expect("parse failed");

    let chunks: Vec<&str> = text
        .as_bytes()
        .chunks(3)
        .map(|c| std::str::from_utf8(c).expect("ascii input"))
        .collect();
    assert_eq!(render_chunked(&chunks), expected);
}

#[test]
fn test_multibyte_input_survives_chunking() {
    let text = "héllo **wörld** — ünïcode";
    let expected = parse(text).expect("parse failed");

    let mid = text
        .char_indices()
        .nth(text.chars().count() / 2)
        .map(|(i, _)| i)
        .expect("non-empty");
    assert_eq!(render_chunked(&[&text[..mid], &text[mid..]]), expected);
}

#[test]
fn test_stream_facade_chunks_by_option() {
    let text = "x".repeat(5_000);
    let expected = parse(&text).expect("parse failed");

    let outputs: Rc<RefCell<Vec<String>>> = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&outputs);
    let options = StreamOptions {
        chunk_size: 1_000,
        ..Default::default()
    };
    stream(&text, options, move |html| {
        sink.borrow_mut().push(html.to_string())
    })
    .expect("stream failed");

    assert_eq!(outputs.borrow().join(""), expected);
}

#[test]
fn test_process_bytes_equals_process_str() {
    let text = "**bytes** in, `html` out";
    let expected = parse(text).expect("parse failed");

    let outputs: Rc<RefCell<Vec<String>>> = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&outputs);
    let mut stream = MarkdownStream::new(ParserOptions::default());
    stream.set_output_handler(move |html| sink.borrow_mut().push(html.to_string()));

    stream.process_bytes(text.as_bytes()).expect("decode failed");
    stream.flush().expect("flush failed");
    assert_eq!(outputs.borrow().join(""), expected);
}

#[test]
fn test_flushes_are_independent() {
    let outputs: Rc<RefCell<Vec<String>>> = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&outputs);
    let mut stream = MarkdownStream::new(ParserOptions::default());
    stream.set_output_handler(move |html| sink.borrow_mut().push(html.to_string()));

    stream.process("# one");
    stream.flush().expect("flush failed");
    stream.process("# two");
    stream.flush().expect("flush failed");

    let outputs = outputs.borrow();
    assert_eq!(outputs.len(), 2);
    assert_eq!(outputs[0], parse("# one").expect("parse failed"));
    assert_eq!(outputs[1], parse("# two").expect("parse failed"));
}

#[test]
fn test_driver_usable_after_error_and_reset() {
    let errors: Rc<RefCell<usize>> = Rc::new(RefCell::new(0));
    let seen = Rc::clone(&errors);
    let outputs: Rc<RefCell<Vec<String>>> = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&outputs);

    let mut stream = MarkdownStream::new(ParserOptions::default());
    stream.set_error_handler(move |_| *seen.borrow_mut() += 1);
    stream.set_output_handler(move |html| sink.borrow_mut().push(html.to_string()));

    stream.process_bytes(&[0xf0, 0x28]).expect("routed to handler");
    assert_eq!(*errors.borrow(), 1);

    stream.reset();
    stream.process("recovered");
    stream.flush().expect("flush failed");
    assert!(outputs.borrow()[0].contains("recovered"));
}

#[test]
fn test_process_string_ignores_buffer() {
    let mut stream = MarkdownStream::new(ParserOptions::default());
    stream.process("buffered");
    let html = stream.process_string("# direct").expect("parse failed");
    assert_eq!(html, parse("# direct").expect("parse failed"));

    // The buffered content is still there for the next flush.
    let outputs: Rc<RefCell<Vec<String>>> = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&outputs);
    stream.set_output_handler(move |html| sink.borrow_mut().push(html.to_string()));
    stream.flush().expect("flush failed");
    assert!(outputs.borrow()[0].contains("buffered"));
}
