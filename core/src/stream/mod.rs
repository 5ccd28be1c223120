// Streaming driver: accumulate chunks, run the full pipeline on flush

pub mod input;

use crate::builder::DocumentBuilder;
use crate::options::ParserOptions;
use crate::render;
use crate::segmenter::Segmenter;
use anyhow::Result;

pub type OutputHandler = Box<dyn FnMut(&str)>;
pub type ErrorHandler = Box<dyn FnMut(&anyhow::Error)>;

/// Chunked markdown-to-HTML driver.
///
/// `process` only accumulates; `flush` runs segmenter, builder, mapper and
/// renderer over everything buffered since the previous flush and emits the
/// result as a single chunk through the output handler. The driver stays
/// usable after an error; callers typically `reset`.
pub struct MarkdownStream {
    buffer: String,
    segmenter: Segmenter,
    builder: DocumentBuilder,
    options: ParserOptions,
    output_handler: Option<OutputHandler>,
    error_handler: Option<ErrorHandler>,
}

impl MarkdownStream {
    pub fn new(options: ParserOptions) -> Self {
        Self {
            buffer: String::new(),
            segmenter: Segmenter::new(&options),
            builder: DocumentBuilder::new(options.clone()),
            options,
            output_handler: None,
            error_handler: None,
        }
    }

    pub fn set_output_handler(&mut self, handler: impl FnMut(&str) + 'static) {
        self.output_handler = Some(Box::new(handler));
    }

    pub fn set_error_handler(&mut self, handler: impl FnMut(&anyhow::Error) + 'static) {
        self.error_handler = Some(Box::new(handler));
    }

    /// Append a chunk to the buffer. Nothing is emitted until `flush`.
    pub fn process(&mut self, chunk: &str) {
        log::trace!("buffering {} bytes", chunk.len());
        self.buffer.push_str(chunk);
    }

    /// Byte-sequence variant of `process`; a decode failure is routed like
    /// any other streaming error.
    pub fn process_bytes(&mut self, bytes: &[u8]) -> Result<()> {
        match input::decode_chunk(bytes) {
            Ok(chunk) => {
                self.process(chunk);
                Ok(())
            }
            Err(err) => self.report(err),
        }
    }

    /// Run the pipeline over the accumulated buffer and emit the HTML.
    pub fn flush(&mut self) -> Result<()> {
        if self.buffer.is_empty() {
            return Ok(());
        }
        let text = std::mem::take(&mut self.buffer);
        match self.render_text(&text) {
            Ok(html) => {
                if !html.is_empty() {
                    if let Some(handler) = &mut self.output_handler {
                        handler(&html);
                    }
                }
                Ok(())
            }
            Err(err) => self.report(err),
        }
    }

    /// One-shot conversion; does not touch the buffer and always propagates
    /// errors to the caller.
    pub fn process_string(&mut self, text: &str) -> Result<String> {
        log::info!("one-shot parse of {} bytes", text.len());
        let mut segmenter = Segmenter::new(&self.options);
        let segments = segmenter.extract_segments(text, true);
        let document = self.builder.build(segments)?;
        Ok(render::render(&document, &self.options))
    }

    /// Drop buffered input and rebuild segmenter and builder.
    pub fn reset(&mut self) {
        log::debug!("stream reset");
        self.buffer.clear();
        self.segmenter = Segmenter::new(&self.options);
        self.builder = DocumentBuilder::new(self.options.clone());
    }

    fn render_text(&mut self, text: &str) -> Result<String> {
        let segments = self.segmenter.extract_segments(text, true);
        let document = self.builder.build(segments)?;
        Ok(render::render(&document, &self.options))
    }

    fn report(&mut self, err: anyhow::Error) -> Result<()> {
        log::warn!("stream error: {err:#}");
        match &mut self.error_handler {
            Some(handler) => {
                handler(&err);
                Ok(())
            }
            None => Err(err),
        }
    }
}
