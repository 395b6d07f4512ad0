use super::{BoundaryError, BoundarySet, adjacent_similarities, smooth, z_scores};
use tracing::debug;

/// z-score below which a local similarity minimum counts as a topic shift
pub const DEFAULT_Z_THRESHOLD: f32 = -0.75;

/// Added to sigma so a flat similarity series never divides by zero
pub const DEFAULT_SIGMA_EPSILON: f32 = 1e-6;

/// Finds paragraph gaps where adjacent-embedding similarity dips well below trend.
///
/// The threshold is a sensitivity knob, not a derived statistic: lower values
/// (more negative) yield fewer boundaries.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundaryDetector {
    pub z_threshold: f32,
    pub epsilon: f32,
}

impl BoundaryDetector {
    pub fn new(z_threshold: f32) -> Self {
        Self {
            z_threshold,
            epsilon: DEFAULT_SIGMA_EPSILON,
        }
    }

    /// Detect boundaries from one embedding per paragraph.
    ///
    /// # Errors
    /// Fails if the embedding count differs from `paragraph_count` or if the
    /// vectors do not share one dimension. Misaligned input is never padded
    /// or truncated.
    pub fn detect(
        &self,
        paragraph_count: usize,
        embeddings: &[Vec<f32>],
    ) -> Result<BoundarySet, BoundaryError> {
        if paragraph_count != embeddings.len() {
            return Err(BoundaryError::CountMismatch {
                paragraphs: paragraph_count,
                embeddings: embeddings.len(),
            });
        }
        check_dimensions(embeddings)?;

        if embeddings.len() < 2 {
            return Ok(BoundarySet::new());
        }

        let sims = adjacent_similarities(embeddings);
        Ok(self.detect_from_similarities(&sims))
    }

    /// Detect boundaries from a precomputed adjacent-similarity series.
    ///
    /// Index `i` of the result refers to the gap between paragraphs `i` and `i + 1`.
    pub fn detect_from_similarities(&self, sims: &[f32]) -> BoundarySet {
        if sims.is_empty() {
            return BoundarySet::new();
        }

        let smoothed = smooth(sims);
        let z = z_scores(&smoothed, self.epsilon);

        let boundaries: BoundarySet = (0..smoothed.len())
            .filter(|&i| is_local_minimum(&smoothed, i) && z[i] < self.z_threshold)
            .collect();

        debug!(
            similarities = sims.len(),
            boundaries = boundaries.len(),
            z_threshold = self.z_threshold,
            "detected topic boundaries"
        );

        boundaries
    }
}

impl Default for BoundaryDetector {
    fn default() -> Self {
        Self::new(DEFAULT_Z_THRESHOLD)
    }
}

/// Edge indices are compared only against their single neighbor
fn is_local_minimum(values: &[f32], i: usize) -> bool {
    let below_left = i == 0 || values[i] <= values[i - 1];
    let below_right = i + 1 >= values.len() || values[i] <= values[i + 1];
    below_left && below_right
}

fn check_dimensions(embeddings: &[Vec<f32>]) -> Result<(), BoundaryError> {
    let Some(first) = embeddings.first() else {
        return Ok(());
    };

    let expected = first.len();
    for (index, embedding) in embeddings.iter().enumerate() {
        if embedding.len() != expected {
            return Err(BoundaryError::DimensionMismatch {
                index,
                expected,
                found: embedding.len(),
            });
        }
    }

    Ok(())
}
