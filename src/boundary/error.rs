use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BoundaryError {
    #[error("Embedding count mismatch: {paragraphs} paragraphs but {embeddings} embeddings")]
    CountMismatch { paragraphs: usize, embeddings: usize },

    #[error("Embedding {index} has dimension {found} (expected {expected})")]
    DimensionMismatch {
        index: usize,
        expected: usize,
        found: usize,
    },
}
