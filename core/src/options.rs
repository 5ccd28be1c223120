// Parser configuration shared by every pipeline stage

use serde::{Deserialize, Serialize};

/// Limits accepted for `StreamOptions::chunk_size`.
pub const MIN_CHUNK_SIZE: usize = 1_000;
pub const MAX_CHUNK_SIZE: usize = 100_000;
const DEFAULT_CHUNK_SIZE: usize = 10_000;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParserOptions {
    /// Enables URL sanitization in the link/image processors and content
    /// sanitization in the renderer.
    pub sanitization: bool,
    /// Caps builder recursion; at the cap content degrades to a flat text leaf.
    pub max_depth: usize,
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            sanitization: false,
            max_depth: 10,
        }
    }
}

/// Options for the `stream` facade.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StreamOptions {
    /// Size of the pieces the facade feeds through `process`. Informational
    /// only: output is identical for any chunking.
    pub chunk_size: usize,
    pub parser: ParserOptions,
}

impl Default for StreamOptions {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
            parser: ParserOptions::default(),
        }
    }
}

impl StreamOptions {
    /// Chunk size clamped to the accepted range.
    pub fn effective_chunk_size(&self) -> usize {
        self.chunk_size.clamp(MIN_CHUNK_SIZE, MAX_CHUNK_SIZE)
    }
}
