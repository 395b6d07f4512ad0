use serde::{Deserialize, Serialize};

/// Marker that opens and closes a fenced code block
pub const FENCE_MARKER: &str = "```";

/// Context hint prepended to code blocks before they are embedded
pub const CODE_EMBED_PREFIX: &str = "Code:\n";

/// Smallest unit produced by the segmenter: prose or one fenced code block
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paragraph {
    /// Zero-based position in the document
    pub index: usize,
    /// Paragraph content (trimmed prose, or verbatim fenced block)
    pub text: String,
    /// Whether this paragraph is an atomic fenced code block
    pub is_code_block: bool,
}

impl Paragraph {
    pub fn text(index: usize, text: impl Into<String>) -> Self {
        Self {
            index,
            text: text.into(),
            is_code_block: false,
        }
    }

    pub fn code(index: usize, text: impl Into<String>) -> Self {
        Self {
            index,
            text: text.into(),
            is_code_block: true,
        }
    }

    /// Text to send to an embedding provider.
    ///
    /// Code blocks get a short context prefix; the stored text is untouched.
    pub fn embedding_input(&self) -> String {
        if self.is_code_block {
            format!("{}{}", CODE_EMBED_PREFIX, self.text)
        } else {
            self.text.clone()
        }
    }

    /// Returns true if the line opens or closes a fence
    pub fn is_fence_line(line: &str) -> bool {
        line.trim().starts_with(FENCE_MARKER)
    }
}
