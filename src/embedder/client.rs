// client.rs - the HTTP embedder
use super::batcher::Batcher;
use super::model::EmbeddingModelInfo;
use super::provider::{EmbedError, EmbeddingProvider, normalize_in_place};
use super::types::{EmbeddingRequest, EmbeddingResponse};
use reqwest::blocking::Client;
use tracing::{debug, warn};

/// Talks to a local embedding server exposing `POST <endpoint>/embed`
pub struct HttpEmbeddingClient {
    http: Client,
    endpoint: String,
    model: EmbeddingModelInfo,
    batcher: Batcher,
}

impl HttpEmbeddingClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        let model = EmbeddingModelInfo::default();
        Self {
            http: Client::new(),
            endpoint: endpoint.into(),
            batcher: Batcher::new(model.max_batch),
            model,
        }
    }

    /// Expect a specific model (dimension and batch limit)
    pub fn with_model(mut self, model: EmbeddingModelInfo) -> Self {
        self.batcher = Batcher::new(model.max_batch);
        self.model = model;
        self
    }

    pub fn model(&self) -> &EmbeddingModelInfo {
        &self.model
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn embed_batch(&self, texts: &[String]) -> Result<Vec<Vec<f32>>, EmbedError> {
        let url = format!("{}/embed", self.endpoint.trim_end_matches('/'));
        let response = self
            .http
            .post(&url)
            .json(&EmbeddingRequest { texts })
            .send()?;

        if !response.status().is_success() {
            warn!(status = %response.status(), url = %url, "embedding server rejected batch");
            return Err(EmbedError::Status(response.status().as_u16()));
        }

        let body: EmbeddingResponse = response.json()?;
        if body.embeddings.len() != texts.len() {
            return Err(EmbedError::CountMismatch {
                expected: texts.len(),
                found: body.embeddings.len(),
            });
        }

        Ok(body.embeddings)
    }
}

impl EmbeddingProvider for HttpEmbeddingClient {
    fn embed(&self, texts: &[String]) -> Result<Vec<Vec<f32>>, EmbedError> {
        if texts.is_empty() {
            return Ok(Vec::new());
        }

        debug!(
            texts = texts.len(),
            requests = self.batcher.batch_count(texts.len()),
            "sending embedding batches"
        );

        let mut embeddings = Vec::with_capacity(texts.len());
        for batch in self.batcher.split(texts) {
            embeddings.extend(self.embed_batch(batch)?);
        }

        for (index, vector) in embeddings.iter_mut().enumerate() {
            self.model.check_dimension(index, vector)?;
            if !normalize_in_place(vector) {
                return Err(EmbedError::ZeroVector { index });
            }
        }

        debug!(
            vectors = embeddings.len(),
            model = %self.model.name,
            "received embeddings"
        );

        Ok(embeddings)
    }
}
