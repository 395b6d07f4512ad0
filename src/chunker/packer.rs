use super::{
    CharRatioEstimator, Chunk, DEFAULT_BOUNDARY_STOP_RATIO, DEFAULT_OVERLAP_RATIO,
    DEFAULT_TARGET_TOKENS, TokenEstimator,
};
use crate::boundary::BoundarySet;
use crate::segmenter::Paragraph;
use tracing::{debug, trace};

/// Separator placed between paragraphs inside a chunk
const PARAGRAPH_SEPARATOR: &str = "\n\n";

/// Greedy single-pass packer merging paragraphs into budgeted chunks.
///
/// Rules:
/// - Paragraphs are never split; an oversized paragraph becomes its own chunk
/// - A chunk past `boundary_stop_ratio` of the budget ends at the next boundary
/// - Consecutive chunks overlap by at most one paragraph
/// - A chunk followed by a code block hands its last paragraph to the next
///   chunk as lead-in context
#[derive(Debug, Clone)]
pub struct ChunkPacker<E = CharRatioEstimator> {
    target_tokens: usize,
    overlap_ratio: f64,
    boundary_stop_ratio: f64,
    estimator: E,
}

impl ChunkPacker<CharRatioEstimator> {
    /// Create a packer with the default budget, overlap and estimator
    pub fn new() -> Self {
        Self::with_estimator(CharRatioEstimator::default())
    }
}

impl Default for ChunkPacker<CharRatioEstimator> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: TokenEstimator> ChunkPacker<E> {
    /// Create a packer with default tuning and a custom estimator
    pub fn with_estimator(estimator: E) -> Self {
        Self {
            target_tokens: DEFAULT_TARGET_TOKENS,
            overlap_ratio: DEFAULT_OVERLAP_RATIO,
            boundary_stop_ratio: DEFAULT_BOUNDARY_STOP_RATIO,
            estimator,
        }
    }

    /// Set the token budget per chunk
    pub fn target_tokens(mut self, tokens: usize) -> Self {
        self.target_tokens = tokens;
        self
    }

    /// Set the overlap ratio; expected in `[0, 1)`
    pub fn overlap_ratio(mut self, ratio: f64) -> Self {
        self.overlap_ratio = ratio;
        self
    }

    /// Set the budget fraction after which a boundary stops the chunk
    pub fn boundary_stop_ratio(mut self, ratio: f64) -> Self {
        self.boundary_stop_ratio = ratio;
        self
    }

    pub fn estimator(&self) -> &E {
        &self.estimator
    }

    /// Pack paragraphs into chunks in one left-to-right pass
    pub fn pack(&self, paragraphs: &[Paragraph], boundaries: &BoundarySet) -> Vec<Chunk> {
        let n = paragraphs.len();
        let mut chunks = Vec::new();
        if n == 0 {
            return chunks;
        }

        let stop_at = self.boundary_stop_ratio * self.target_tokens as f64;
        let mut i = 0;

        while i < n {
            let start = i;
            let mut tokens = 0;

            while i < n {
                let para_tokens = self.estimator.estimate(&paragraphs[i].text);

                // First paragraph always goes in, even over budget
                if i > start && tokens + para_tokens > self.target_tokens {
                    break;
                }

                tokens += para_tokens;
                i += 1;

                if tokens as f64 >= stop_at && boundaries.contains(&(i - 1)) {
                    break;
                }
            }

            let end = i;
            if let Some(chunk) = self.build_chunk(paragraphs, start, end) {
                trace!(
                    start_para = chunk.start_para,
                    end_para = chunk.end_para,
                    paragraphs = chunk.paragraph_count(),
                    tokens = chunk.tokens_est,
                    "emitted chunk"
                );
                chunks.push(chunk);
            }

            if end >= n {
                break;
            }

            i = self.resume_point(paragraphs, start, end);
        }

        debug!(
            paragraphs = n,
            chunks = chunks.len(),
            boundaries = boundaries.len(),
            target_tokens = self.target_tokens,
            "packed chunks"
        );

        chunks
    }

    /// Where the next chunk starts after `[start, end)`.
    ///
    /// Never earlier than `end - 1` and always past `start`, so every chunk
    /// begins strictly after the previous one.
    fn resume_point(&self, paragraphs: &[Paragraph], start: usize, end: usize) -> usize {
        let span = end - start;
        let overlap = (self.overlap_ratio.max(0.0) * span as f64).floor() as usize;

        let mut back = end - overlap.min(span);
        while back > start && paragraphs[back].is_code_block {
            back -= 1;
        }

        back.max(end - 1).max(start + 1)
    }

    fn build_chunk(&self, paragraphs: &[Paragraph], start: usize, end: usize) -> Option<Chunk> {
        let text = paragraphs[start..end]
            .iter()
            .map(|p| p.text.as_str())
            .collect::<Vec<_>>()
            .join(PARAGRAPH_SEPARATOR);

        let text = text.trim();
        if text.is_empty() {
            return None;
        }

        Some(Chunk {
            start_para: start,
            end_para: end,
            tokens_est: self.estimator.estimate(text),
            text: text.to_string(),
            title: None,
        })
    }
}

/// Pack paragraphs with an explicit budget, overlap and estimator
pub fn pack_chunks<E: TokenEstimator>(
    paragraphs: &[Paragraph],
    boundaries: &BoundarySet,
    target_tokens: usize,
    overlap_ratio: f64,
    estimator: E,
) -> Vec<Chunk> {
    ChunkPacker::with_estimator(estimator)
        .target_tokens(target_tokens)
        .overlap_ratio(overlap_ratio)
        .pack(paragraphs, boundaries)
}
