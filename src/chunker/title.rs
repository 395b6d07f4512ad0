use super::Chunk;
use crate::segmenter::Paragraph;

/// Titles must be strictly shorter than this many characters
pub const TITLE_MAX_CHARS: usize = 180;

/// Longest line (in words) still treated as a capitalized heading
const HEADING_MAX_WORDS: usize = 12;

/// Fill in each chunk's title from the nearest heading at or before its start.
///
/// Chunks with no heading behind them keep `title: None`.
pub fn attach_titles(chunks: &mut [Chunk], paragraphs: &[Paragraph], max_chars: usize) {
    for chunk in chunks.iter_mut() {
        chunk.title = find_title(paragraphs, chunk.start_para, max_chars);
    }
}

/// Scan from `start` down to 0 for the first heading-like prose paragraph
pub fn find_title(paragraphs: &[Paragraph], start: usize, max_chars: usize) -> Option<String> {
    let last = paragraphs.len().checked_sub(1)?;

    paragraphs[..=start.min(last)]
        .iter()
        .rev()
        .filter(|p| !p.is_code_block)
        .map(|p| p.text.trim())
        .find(|text| text.chars().count() < max_chars && looks_like_heading(text))
        .map(str::to_string)
}

/// Markdown heading, or a short single capitalized line without closing punctuation
pub fn looks_like_heading(text: &str) -> bool {
    let text = text.trim();
    if text.is_empty() {
        return false;
    }

    is_markdown_heading(text) || is_capitalized_line(text)
}

fn is_markdown_heading(text: &str) -> bool {
    let hash_count = text.chars().take_while(|c| *c == '#').count();
    if hash_count == 0 || hash_count > 6 {
        return false;
    }

    let rest = &text[hash_count..];
    rest.starts_with(char::is_whitespace) && !rest.trim().is_empty()
}

fn is_capitalized_line(text: &str) -> bool {
    if text.contains('\n') {
        return false;
    }

    let starts_upper = text.chars().next().is_some_and(char::is_uppercase);
    let ends_like_sentence = text.ends_with(&['.', ',', ';'][..]);
    let word_count = text.split_whitespace().count();

    starts_upper && !ends_like_sentence && word_count <= HEADING_MAX_WORDS
}

#[cfg(test)]
mod title_tests {
    use super::*;

    #[test]
    fn test_markdown_headings() {
        assert!(looks_like_heading("# Intro"));
        assert!(looks_like_heading("### Deeply nested section"));
        assert!(!looks_like_heading("####### too deep"));
        assert!(!looks_like_heading("#hashtag"));
        assert!(!looks_like_heading("#   "));
    }

    #[test]
    fn test_capitalized_lines() {
        assert!(looks_like_heading("Installation Guide"));
        assert!(looks_like_heading("Why chunk at all?"));
        assert!(!looks_like_heading("lowercase start"));
        assert!(!looks_like_heading("This is a full sentence."));
        assert!(!looks_like_heading("Two lines\nof text"));
        assert!(!looks_like_heading(
            "A capitalized line that simply keeps going well past twelve words before it ends"
        ));
    }

    #[test]
    fn test_empty_is_not_heading() {
        assert!(!looks_like_heading(""));
        assert!(!looks_like_heading("   "));
    }
}
