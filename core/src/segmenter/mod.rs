// Segmenter: single-pass, priority-dispatched scanner over a growing buffer

pub mod processors;
pub mod segment;

pub use segment::{ListType, Segment, SegmentKind};

use crate::options::ParserOptions;
use processors::{registry, Processor, Scan, ScanContext};

/// Scans buffered markdown into a flat segment stream.
///
/// The segmenter is reused across chunks: a construct left unterminated at
/// a chunk boundary is held as pending content and prepended to the next
/// chunk, so no partial match is ever committed early.
pub struct Segmenter {
    processors: Vec<Box<dyn Processor>>,
    pending: String,
}

impl Segmenter {
    pub fn new(options: &ParserOptions) -> Self {
        Self {
            processors: registry(options),
            pending: String::new(),
        }
    }

    /// Unconsumed tail carried over from the previous chunk.
    pub fn pending_content(&self) -> &str {
        &self.pending
    }

    /// Tokenize `chunk` (prefixed by any pending tail). With `is_end` unset,
    /// an unterminated construct at the buffer edge is saved as pending
    /// instead of being emitted; with `is_end` set everything is flushed.
    pub fn extract_segments(&mut self, chunk: &str, is_end: bool) -> Vec<Segment> {
        let buffer = if self.pending.is_empty() {
            chunk.to_string()
        } else {
            let mut merged = std::mem::take(&mut self.pending);
            merged.push_str(chunk);
            merged
        };

        log::debug!("segmenting {} bytes (is_end: {})", buffer.len(), is_end);

        let mut segments = Vec::new();
        let mut position = 0;
        let mut failures = 0;
        let failure_limit = self.processors.len() + 1;

        while position < buffer.len() {
            let ch = match buffer[position..].chars().next() {
                Some(ch) => ch,
                None => break,
            };
            let ctx = ScanContext {
                position,
                line_start: position == 0 || buffer.as_bytes()[position - 1] == b'\n',
                is_end,
            };

            let mut advanced = false;
            for processor in &self.processors {
                if !processor.can_process(ch, &ctx) {
                    continue;
                }
                match processor.process(&buffer, position, &ctx) {
                    Some(Scan::Consumed { segments: out, next }) if next > position => {
                        log::trace!(
                            "{} consumed {}..{} ({} segments)",
                            processor.name(),
                            position,
                            next,
                            out.len()
                        );
                        segments.extend(out);
                        position = next;
                        failures = 0;
                        advanced = true;
                        break;
                    }
                    Some(Scan::Pending(tail)) => {
                        debug_assert!(!is_end, "pending returned on final extraction");
                        log::debug!(
                            "{} pending {} bytes at {}",
                            processor.name(),
                            tail.len(),
                            position
                        );
                        self.pending = tail;
                        return segments;
                    }
                    // A decline, or zero-progress output: fall through.
                    _ => {}
                }
            }

            if !advanced {
                failures += 1;
                position += ch.len_utf8();
                if failures > failure_limit {
                    log::warn!("segmenter made no progress {} times, stopping", failures);
                    break;
                }
            }
        }

        log::debug!("extracted {} segments", segments.len());
        segments
    }
}
