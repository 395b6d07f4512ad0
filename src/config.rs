use crate::boundary::{BoundaryDetector, DEFAULT_Z_THRESHOLD};
use crate::chunker::{
    ChunkPacker, DEFAULT_BOUNDARY_STOP_RATIO, DEFAULT_OVERLAP_RATIO, DEFAULT_TARGET_TOKENS,
    TITLE_MAX_CHARS, TokenEstimator,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("target_tokens must be positive")]
    InvalidTargetTokens,

    #[error("overlap_ratio must be in [0, 1), got {0}")]
    InvalidOverlapRatio(f64),

    #[error("boundary_stop_ratio must be in [0, 1], got {0}")]
    InvalidBoundaryStopRatio(f64),

    #[error("z_threshold must be finite, got {0}")]
    InvalidZThreshold(f32),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Tuning knobs for the segmentation pipeline.
///
/// Every field has a default, so a partial JSON document is a valid config.
/// The boundary stop ratio and z threshold are heuristics, not derived
/// values; adjust them per corpus.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SegmenterConfig {
    /// Token budget per chunk
    pub target_tokens: usize,
    /// Share of a chunk's paragraphs to repeat in the next one, in `[0, 1)`
    pub overlap_ratio: f64,
    /// Budget fraction after which a topic boundary ends a chunk
    pub boundary_stop_ratio: f64,
    /// Similarity dips with a z-score below this become boundaries
    pub z_threshold: f32,
    /// Whether to back-scan for chunk titles
    pub attach_titles: bool,
    /// Headings at or above this length (in characters) are not titles
    pub title_max_chars: usize,
    /// Model the embedding provider is expected to serve
    pub embedding_model: String,
}

impl Default for SegmenterConfig {
    fn default() -> Self {
        Self {
            target_tokens: DEFAULT_TARGET_TOKENS,
            overlap_ratio: DEFAULT_OVERLAP_RATIO,
            boundary_stop_ratio: DEFAULT_BOUNDARY_STOP_RATIO,
            z_threshold: DEFAULT_Z_THRESHOLD,
            attach_titles: true,
            title_max_chars: TITLE_MAX_CHARS,
            embedding_model: "google/embeddinggemma-300m".to_string(),
        }
    }
}

impl SegmenterConfig {
    /// Parse and validate a JSON config
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.target_tokens == 0 {
            return Err(ConfigError::InvalidTargetTokens);
        }
        if !(0.0..1.0).contains(&self.overlap_ratio) {
            return Err(ConfigError::InvalidOverlapRatio(self.overlap_ratio));
        }
        if !(0.0..=1.0).contains(&self.boundary_stop_ratio) {
            return Err(ConfigError::InvalidBoundaryStopRatio(
                self.boundary_stop_ratio,
            ));
        }
        if !self.z_threshold.is_finite() {
            return Err(ConfigError::InvalidZThreshold(self.z_threshold));
        }
        Ok(())
    }

    pub fn detector(&self) -> BoundaryDetector {
        BoundaryDetector::new(self.z_threshold)
    }

    pub fn packer<E: TokenEstimator>(&self, estimator: E) -> ChunkPacker<E> {
        ChunkPacker::with_estimator(estimator)
            .target_tokens(self.target_tokens)
            .overlap_ratio(self.overlap_ratio)
            .boundary_stop_ratio(self.boundary_stop_ratio)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SegmenterConfig::default();
        assert_eq!(config.target_tokens, 400);
        assert!((config.overlap_ratio - 0.10).abs() < f64::EPSILON);
        assert!((config.boundary_stop_ratio - 0.85).abs() < f64::EPSILON);
        assert!((config.z_threshold + 0.75).abs() < f32::EPSILON);
        assert_eq!(config.title_max_chars, 180);
        assert!(config.attach_titles);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = SegmenterConfig::from_json(r#"{"target_tokens": 250, "z_threshold": -1.0}"#)
            .unwrap();
        assert_eq!(config.target_tokens, 250);
        assert_eq!(config.z_threshold, -1.0);
        assert_eq!(config.title_max_chars, 180);
    }

    #[test]
    fn test_invalid_overlap() {
        for ratio in [1.0, 1.5, -0.1, f64::NAN] {
            let config = SegmenterConfig {
                overlap_ratio: ratio,
                ..Default::default()
            };
            assert!(matches!(
                config.validate(),
                Err(ConfigError::InvalidOverlapRatio(_))
            ));
        }
    }

    #[test]
    fn test_invalid_budget_and_threshold() {
        let config = SegmenterConfig {
            target_tokens: 0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidTargetTokens)
        ));

        let config = SegmenterConfig {
            z_threshold: f32::NEG_INFINITY,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidZThreshold(_))
        ));

        let config = SegmenterConfig {
            boundary_stop_ratio: 1.2,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidBoundaryStopRatio(_))
        ));
    }

    #[test]
    fn test_malformed_json() {
        let err = SegmenterConfig::from_json("{not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));

        let err = SegmenterConfig::from_json(r#"{"overlap_ratio": 2.0}"#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidOverlapRatio(_)));
    }
}
