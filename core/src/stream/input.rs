// Strict UTF-8 decoding for byte-sequence chunks

use anyhow::{Context, Result};

/// Decode a raw chunk. Invalid UTF-8 is a reported error, not a silent
/// replacement, so no garbled text ever reaches the segmenter.
pub fn decode_chunk(bytes: &[u8]) -> Result<&str> {
    std::str::from_utf8(bytes).context("input chunk is not valid UTF-8")
}
