//! Whitespace word spans.

use std::ops::Range;

/// Byte ranges of the whitespace-delimited words in `text`.
///
/// Splits on runs of Unicode whitespace like [`str::split_whitespace`], and
/// also on the ASCII information separators U+001C..=U+001F, which many
/// tokenizers treat as whitespace. Punctuation stays attached to the word it
/// touches.
pub fn word_spans(text: &str) -> Vec<Range<usize>> {
    let mut spans = Vec::new();
    let mut start = None;

    for (offset, ch) in text.char_indices() {
        match (is_separator(ch), start) {
            (true, Some(begin)) => {
                spans.push(begin..offset);
                start = None;
            }
            (false, None) => start = Some(offset),
            _ => {}
        }
    }

    if let Some(begin) = start {
        spans.push(begin..text.len());
    }

    spans
}

fn is_separator(ch: char) -> bool {
    ch.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&ch)
}
