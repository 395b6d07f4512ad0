mod chunk;
mod packer;
mod title;
mod tokens;


pub use chunk::Chunk;
pub use packer::{ChunkPacker, pack_chunks};
pub use title::{TITLE_MAX_CHARS, attach_titles, find_title, looks_like_heading};
pub use tokens::{CharRatioEstimator, TokenEstimator, estimate_tokens};

/// Target tokens per chunk
pub const DEFAULT_TARGET_TOKENS: usize = 400;

/// Fraction of the previous chunk's paragraphs to repeat in the next one
pub const DEFAULT_OVERLAP_RATIO: f64 = 0.10;

/// Once a chunk holds this fraction of the budget, a boundary ends it early
pub const DEFAULT_BOUNDARY_STOP_RATIO: f64 = 0.85;
