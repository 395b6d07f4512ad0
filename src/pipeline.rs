use crate::boundary::{BoundaryDetector, BoundaryError};
use crate::chunker::{CharRatioEstimator, Chunk, ChunkPacker, TokenEstimator, attach_titles};
use crate::config::{ConfigError, SegmenterConfig};
use crate::embedder::{EmbedError, EmbeddingProvider, embed_paragraphs};
use crate::segmenter::{Paragraph, segment_paragraphs};
use thiserror::Error;
use tracing::{debug, info};

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("Embedding failed: {0}")]
    Embed(#[from] EmbedError),

    #[error("Boundary detection failed: {0}")]
    Boundary(#[from] BoundaryError),
}

/// Text in, titled chunks out.
///
/// Holds no state between calls; the same input and embeddings always give
/// the same chunks.
pub struct DocumentSegmenter<E = CharRatioEstimator> {
    config: SegmenterConfig,
    detector: BoundaryDetector,
    packer: ChunkPacker<E>,
}

impl DocumentSegmenter<CharRatioEstimator> {
    pub fn new(config: SegmenterConfig) -> Result<Self, ConfigError> {
        Self::with_estimator(config, CharRatioEstimator::default())
    }
}

impl<E: TokenEstimator> DocumentSegmenter<E> {
    /// Build a segmenter with a custom token estimator
    pub fn with_estimator(config: SegmenterConfig, estimator: E) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            detector: config.detector(),
            packer: config.packer(estimator),
            config,
        })
    }

    pub fn config(&self) -> &SegmenterConfig {
        &self.config
    }

    /// Segment raw text, embedding its paragraphs through `provider`.
    ///
    /// Blank input returns no chunks without calling the provider.
    pub fn segment<P>(&self, text: &str, provider: &P) -> Result<Vec<Chunk>, PipelineError>
    where
        P: EmbeddingProvider + ?Sized,
    {
        let paragraphs = segment_paragraphs(text);
        if paragraphs.is_empty() {
            debug!("no paragraphs in input");
            return Ok(Vec::new());
        }

        debug!(
            paragraphs = paragraphs.len(),
            model = %self.config.embedding_model,
            "requesting paragraph embeddings"
        );
        let embeddings = embed_paragraphs(provider, &paragraphs)?;

        self.segment_with_embeddings(&paragraphs, &embeddings)
    }

    /// Chunk already-segmented paragraphs with caller-supplied embeddings
    pub fn segment_with_embeddings(
        &self,
        paragraphs: &[Paragraph],
        embeddings: &[Vec<f32>],
    ) -> Result<Vec<Chunk>, PipelineError> {
        let boundaries = self.detector.detect(paragraphs.len(), embeddings)?;
        let mut chunks = self.packer.pack(paragraphs, &boundaries);

        if self.config.attach_titles {
            attach_titles(&mut chunks, paragraphs, self.config.title_max_chars);
        }

        info!(
            paragraphs = paragraphs.len(),
            boundaries = boundaries.len(),
            chunks = chunks.len(),
            "segmented document"
        );

        Ok(chunks)
    }
}

/// One-shot helper: segment `text` with `config` and the default estimator
pub fn chunk_document<P>(
    text: &str,
    provider: &P,
    config: SegmenterConfig,
) -> Result<Vec<Chunk>, PipelineError>
where
    P: EmbeddingProvider + ?Sized,
{
    DocumentSegmenter::new(config)?.segment(text, provider)
}
