use super::Paragraph;
use tracing::debug;

/// Split raw text into ordered paragraphs.
///
/// Rules:
/// - A blank line outside a fence ends the current prose paragraph
/// - A fence line ends any open prose and starts a code block
/// - Everything up to and including the closing fence is one atomic paragraph
/// - An unterminated fence swallows the rest of the input
/// - Whitespace-only paragraphs are dropped
pub fn segment_paragraphs(text: &str) -> Vec<Paragraph> {
    let mut paragraphs = Vec::new();
    let mut prose: Vec<&str> = Vec::new();
    let mut code: Option<Vec<&str>> = None;

    for line in text.lines() {
        if let Some(mut block) = code.take() {
            block.push(line);
            if Paragraph::is_fence_line(line) {
                push_code(&mut paragraphs, &block);
            } else {
                code = Some(block);
            }
            continue;
        }

        if Paragraph::is_fence_line(line) {
            flush_prose(&mut paragraphs, &mut prose);
            code = Some(vec![line]);
        } else if line.trim().is_empty() {
            flush_prose(&mut paragraphs, &mut prose);
        } else {
            prose.push(line);
        }
    }

    // Unterminated fence: keep what we have as one block
    if let Some(block) = code {
        push_code(&mut paragraphs, &block);
    }
    flush_prose(&mut paragraphs, &mut prose);

    debug!(
        paragraphs = paragraphs.len(),
        code_blocks = paragraphs.iter().filter(|p| p.is_code_block).count(),
        "segmented document"
    );

    paragraphs
}

fn flush_prose(paragraphs: &mut Vec<Paragraph>, prose: &mut Vec<&str>) {
    if prose.is_empty() {
        return;
    }

    let joined = prose.join("\n");
    prose.clear();

    let trimmed = joined.trim();
    if !trimmed.is_empty() {
        let index = paragraphs.len();
        paragraphs.push(Paragraph::text(index, trimmed));
    }
}

fn push_code(paragraphs: &mut Vec<Paragraph>, block: &[&str]) {
    let joined = block.join("\n");
    let trimmed = joined.trim();
    if !trimmed.is_empty() {
        let index = paragraphs.len();
        paragraphs.push(Paragraph::code(index, trimmed));
    }
}
