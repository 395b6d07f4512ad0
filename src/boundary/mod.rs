mod detector;
mod error;
mod similarity;
mod smoothing;


pub use detector::{BoundaryDetector, DEFAULT_SIGMA_EPSILON, DEFAULT_Z_THRESHOLD};
pub use error::BoundaryError;
pub use similarity::{adjacent_similarities, dot};
pub use smoothing::{SMOOTHING_KERNEL, mean_and_std, smooth, z_scores};

use std::collections::BTreeSet;

/// Paragraph indices `i` where a topic shift sits between `i` and `i + 1`
pub type BoundarySet = BTreeSet<usize>;
