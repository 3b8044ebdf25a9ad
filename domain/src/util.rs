//! Shared utility functions.

/// Count whitespace-delimited tokens in `text`.
///
/// This is the single word-count definition used for chunk budgeting.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Truncate a string to approximately `max_bytes` without splitting a UTF-8
/// character boundary.
///
/// Returns a sub-slice of the original string. If the string is shorter than
/// `max_bytes`, the entire string is returned unchanged.
pub fn truncate_str(s: &str, max_bytes: usize) -> &str {
    if s.len() <= max_bytes {
        return s;
    }
    let mut end = max_bytes;
    while end > 0 && !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}
