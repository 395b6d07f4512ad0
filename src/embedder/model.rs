// model.rs - shape of what the embedding server is expected to return
use super::provider::EmbedError;
use serde::{Deserialize, Serialize};

/// Vector dimension and per-request batch limit of an embedding model
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmbeddingModelInfo {
    pub name: String,
    pub dim: usize,
    pub max_batch: usize,
}

impl EmbeddingModelInfo {
    pub fn new(name: impl Into<String>, dim: usize, max_batch: usize) -> Self {
        Self {
            name: name.into(),
            dim,
            max_batch,
        }
    }

    /// Model served by the reference embedding server
    pub fn gemma_300m() -> Self {
        Self::new("google/embeddinggemma-300m", 768, 32)
    }

    /// Reject a vector whose length differs from the model dimension
    pub fn check_dimension(&self, index: usize, vector: &[f32]) -> Result<(), EmbedError> {
        if vector.len() == self.dim {
            return Ok(());
        }

        Err(EmbedError::DimensionMismatch {
            index,
            expected: self.dim,
            found: vector.len(),
        })
    }
}

impl Default for EmbeddingModelInfo {
    fn default() -> Self {
        Self::gemma_300m()
    }
}
