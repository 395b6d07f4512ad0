/// Cheap proxy for the model cost of a piece of text
pub trait TokenEstimator {
    fn estimate(&self, text: &str) -> usize;
}

impl<F> TokenEstimator for F
where
    F: Fn(&str) -> usize,
{
    fn estimate(&self, text: &str) -> usize {
        self(text)
    }
}

/// Heuristic estimator: one token per `chars_per_token` characters, minimum 1
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharRatioEstimator {
    pub chars_per_token: usize,
}

impl Default for CharRatioEstimator {
    fn default() -> Self {
        Self { chars_per_token: 4 }
    }
}

impl TokenEstimator for CharRatioEstimator {
    fn estimate(&self, text: &str) -> usize {
        (text.chars().count() / self.chars_per_token.max(1)).max(1)
    }
}

/// Estimate token count for a piece of text
/// Uses a simple heuristic: 1 token ≈ 4 characters
pub fn estimate_tokens(text: &str) -> usize {
    CharRatioEstimator::default().estimate(text)
}
