mod paragraph;
mod scanner;


pub use paragraph::{CODE_EMBED_PREFIX, FENCE_MARKER, Paragraph};
pub use scanner::segment_paragraphs;
