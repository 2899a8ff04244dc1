//! Mention context extraction.
//!
//! The external ranker scores candidates against the sentence containing the
//! mention. Offsets are **character** offsets, not byte offsets: annotation
//! tooling counts characters, and slicing UTF-8 text at byte positions taken
//! from a char-counting caller would panic on multi-byte input.

/// Return the sentence containing the given character offset.
///
/// Sentences are delimited by `.`, `!`, `?` or a newline; the terminator
/// belongs to the sentence it ends. Leading and trailing whitespace is
/// trimmed from the returned slice.
///
/// Returns `None` for empty text, an offset at or past the end of the text,
/// or an offset that falls into whitespace-only filler between sentences.
///
/// # Example
///
/// ```
/// use annolink::context::sentence_at;
///
/// let text = "Paris is a city. It lies on the Seine.";
/// assert_eq!(sentence_at(text, 3), Some("Paris is a city."));
/// assert_eq!(sentence_at(text, 20), Some("It lies on the Seine."));
/// assert_eq!(sentence_at(text, 500), None);
/// ```
#[must_use]
pub fn sentence_at(text: &str, char_offset: usize) -> Option<&str> {
    if text.is_empty() || char_offset >= text.chars().count() {
        return None;
    }

    let mut start_char = 0usize;
    let mut start_byte = 0usize;
    for (char_idx, (byte_idx, ch)) in text.char_indices().enumerate() {
        if matches!(ch, '.' | '!' | '?' | '\n') {
            let end_char = char_idx + 1;
            let end_byte = byte_idx + ch.len_utf8();
            if char_offset >= start_char && char_offset < end_char {
                let sentence = text[start_byte..end_byte].trim();
                return if sentence.is_empty() {
                    None
                } else {
                    Some(sentence)
                };
            }
            start_char = end_char;
            start_byte = end_byte;
        }
    }

    // Trailing sentence without a terminator.
    let sentence = text[start_byte..].trim();
    if sentence.is_empty() {
        None
    } else {
        Some(sentence)
    }
}

/// Like [`sentence_at`], but degrades to an empty string.
///
/// Ranking context is best-effort: a mention without a recoverable sentence
/// is still rankable, just without context.
#[must_use]
pub fn context_at(text: &str, char_offset: usize) -> String {
    sentence_at(text, char_offset).unwrap_or_default().to_string()
}
