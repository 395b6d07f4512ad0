// the embedding server contract
use serde::{Deserialize, Serialize};

#[derive(Serialize)]
pub struct EmbeddingRequest<'a> {
    pub texts: &'a [String],
}

#[derive(Deserialize)]
pub struct EmbeddingResponse {
    pub embeddings: Vec<Vec<f32>>,
}
