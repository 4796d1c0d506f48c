//! Text helpers for result snippets.

#[cfg(test)]
#[path = "text_test.rs"]
mod text_test;

/// Truncate `text` to at most `max_chars` characters without splitting a
/// multi-byte character.
pub fn snippet(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((byte_index, _)) => &text[..byte_index],
        None => text,
    }
}
