use crate::segmenter::Paragraph;
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum EmbedError {
    #[error("Embedding request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Embedding server returned HTTP {0}")]
    Status(u16),

    #[error("Embedding count mismatch: sent {expected} texts, got {found} vectors")]
    CountMismatch { expected: usize, found: usize },

    #[error("Embedding {index} has dimension {found} (expected {expected})")]
    DimensionMismatch {
        index: usize,
        expected: usize,
        found: usize,
    },

    #[error("Embedding {index} is a zero vector and cannot be normalized")]
    ZeroVector { index: usize },
}

/// Turns texts into unit-normalized vectors.
///
/// Implementations must return exactly one vector per input, in input order,
/// all of the same dimension.
pub trait EmbeddingProvider: Send + Sync {
    fn embed(&self, texts: &[String]) -> Result<Vec<Vec<f32>>, EmbedError>;
}

impl<F> EmbeddingProvider for F
where
    F: Fn(&[String]) -> Result<Vec<Vec<f32>>, EmbedError> + Send + Sync,
{
    fn embed(&self, texts: &[String]) -> Result<Vec<Vec<f32>>, EmbedError> {
        self(texts)
    }
}

/// Embed every paragraph in one logical request.
///
/// Code blocks are sent with a context prefix (see [`Paragraph::embedding_input`]).
pub fn embed_paragraphs<P>(provider: &P, paragraphs: &[Paragraph]) -> Result<Vec<Vec<f32>>, EmbedError>
where
    P: EmbeddingProvider + ?Sized,
{
    if paragraphs.is_empty() {
        return Ok(Vec::new());
    }

    let inputs: Vec<String> = paragraphs.iter().map(Paragraph::embedding_input).collect();
    let embeddings = provider.embed(&inputs)?;
    validate_embeddings(inputs.len(), &embeddings)?;

    debug!(
        paragraphs = paragraphs.len(),
        dim = embeddings.first().map(Vec::len).unwrap_or(0),
        "embedded paragraphs"
    );

    Ok(embeddings)
}

/// Check count and uniform dimension of a provider response
pub fn validate_embeddings(expected: usize, embeddings: &[Vec<f32>]) -> Result<(), EmbedError> {
    if embeddings.len() != expected {
        return Err(EmbedError::CountMismatch {
            expected,
            found: embeddings.len(),
        });
    }

    if let Some(first) = embeddings.first() {
        let dim = first.len();
        if let Some((index, bad)) = embeddings.iter().enumerate().find(|(_, e)| e.len() != dim) {
            return Err(EmbedError::DimensionMismatch {
                index,
                expected: dim,
                found: bad.len(),
            });
        }
    }

    Ok(())
}

/// Scale a vector to unit L2 norm. Returns false (leaving it untouched) for zero vectors.
pub fn normalize_in_place(vector: &mut [f32]) -> bool {
    let norm = vector.iter().map(|x| x * x).sum::<f32>().sqrt();
    if norm == 0.0 || !norm.is_finite() {
        return false;
    }

    for x in vector.iter_mut() {
        *x /= norm;
    }
    true
}
