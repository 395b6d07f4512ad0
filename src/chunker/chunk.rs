use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// A contiguous run of paragraphs ready for embedding/indexing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chunk {
    /// First paragraph index (inclusive)
    pub start_para: usize,
    /// Last paragraph index (exclusive)
    pub end_para: usize,
    /// Estimated token count of `text`
    pub tokens_est: usize,
    /// Paragraph texts joined by a blank line
    pub text: String,
    /// Nearest heading at or before `start_para`, if any
    pub title: Option<String>,
}

impl Chunk {
    /// Number of paragraphs covered
    pub fn paragraph_count(&self) -> usize {
        self.end_para - self.start_para
    }

    /// Whether paragraph `para` falls inside this chunk's range
    pub fn contains(&self, para: usize) -> bool {
        (self.start_para..self.end_para).contains(&para)
    }

    /// Hex SHA-256 of the chunk text, stable across runs
    pub fn content_hash(&self) -> String {
        let mut hasher = Sha256::new();
        hasher.update(self.text.as_bytes());
        hex::encode(hasher.finalize())
    }
}
