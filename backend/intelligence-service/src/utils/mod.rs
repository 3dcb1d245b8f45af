// Utility functions for intelligence-service

/// Round to two decimals for presentation
pub fn round2(value: f32) -> f32 {
    (value * 100.0).round() / 100.0
}

/// Longest prefix of `text` holding at most `max_chars` characters
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

pub fn char_len(text: &str) -> usize {
    text.chars().count()
}
