pub mod batcher;
pub mod client;
pub mod model;
pub mod provider;
pub mod types;

#[cfg(test)]
mod tests;

pub use batcher::Batcher;
pub use client::HttpEmbeddingClient;
pub use model::EmbeddingModelInfo;
pub use provider::{
    EmbedError, EmbeddingProvider, embed_paragraphs, normalize_in_place, validate_embeddings,
};
pub use types::{EmbeddingRequest, EmbeddingResponse};
