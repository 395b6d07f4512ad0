/// Dot product of two equal-length vectors.
///
/// For unit-normalized embeddings this is the cosine similarity.
pub fn dot(a: &[f32], b: &[f32]) -> f32 {
    a.iter().zip(b.iter()).map(|(x, y)| x * y).sum()
}

/// `sims[i] = dot(emb[i], emb[i + 1])` for every adjacent pair
pub fn adjacent_similarities(embeddings: &[Vec<f32>]) -> Vec<f32> {
    embeddings
        .windows(2)
        .map(|pair| dot(&pair[0], &pair[1]))
        .collect()
}
