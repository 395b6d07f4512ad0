// Public API exports
pub mod boundary;
pub mod chunker;
pub mod config;
pub mod embedder;
pub mod pipeline;
pub mod segmenter;

// Re-export main types for convenience
pub use segmenter::{Paragraph, segment_paragraphs};

pub use boundary::{BoundaryDetector, BoundaryError, BoundarySet};

pub use chunker::{
    CharRatioEstimator, Chunk, ChunkPacker, DEFAULT_OVERLAP_RATIO, DEFAULT_TARGET_TOKENS,
    TokenEstimator, attach_titles, estimate_tokens, pack_chunks,
};

pub use embedder::{EmbedError, EmbeddingModelInfo, EmbeddingProvider, HttpEmbeddingClient};

pub use config::{ConfigError, SegmenterConfig};

pub use pipeline::{DocumentSegmenter, PipelineError, chunk_document};
