use std::ops::Range;

/// Segments at or below this many characters are dropped
pub const MIN_SENTENCE_CHARS: usize = 20;

/// Trimmed sentence with its position in the source text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sentence {
    text: String,
    position: usize,
}

impl Sentence {
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Index among the kept sentences, in source order
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn words(&self) -> Vec<&str> {
        self.text.split_whitespace().collect()
    }

    /// Byte ranges of the whitespace-separated words, aligned with `words()`
    pub fn word_spans(&self) -> Vec<Range<usize>> {
        let mut spans = Vec::new();
        let mut start = None;
        for (idx, c) in self.text.char_indices() {
            match (c.is_whitespace(), start) {
                (true, Some(begin)) => {
                    spans.push(begin..idx);
                    start = None;
                }
                (false, None) => start = Some(idx),
                _ => {}
            }
        }
        if let Some(begin) = start {
            spans.push(begin..self.text.len());
        }
        spans
    }

    /// Replace the first whole-word occurrence of `word`; `None` when no word matches
    pub fn replace_word(&self, word: &str, replacement: &str) -> Option<String> {
        let span = self
            .word_spans()
            .into_iter()
            .find(|span| &self.text[span.clone()] == word)?;

        let mut replaced = String::with_capacity(self.text.len() + replacement.len());
        replaced.push_str(&self.text[..span.start]);
        replaced.push_str(replacement);
        replaced.push_str(&self.text[span.end..]);
        Some(replaced)
    }
}

fn is_terminator(c: char) -> bool {
    matches!(c, '.' | '!' | '?')
}

/// Split on runs of `.`, `!`, `?` and keep segments longer than 20 characters
pub fn split_into_sentences(content: &str) -> Vec<Sentence> {
    content
        .split(is_terminator)
        .map(str::trim)
        .filter(|segment| segment.chars().count() > MIN_SENTENCE_CHARS)
        .enumerate()
        .map(|(position, text)| Sentence {
            text: text.to_string(),
            position,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_basic() {
        let sentences = split_into_sentences(
            "Python is a popular programming language. It was created in 1991. Many developers use it today.",
        );

        let texts: Vec<&str> = sentences.iter().map(Sentence::text).collect();
        assert_eq!(
            texts,
            vec![
                "Python is a popular programming language",
                "It was created in 1991",
                "Many developers use it today",
            ]
        );
        assert_eq!(sentences[2].position(), 2);
    }

    #[test]
    fn test_drops_short_segments_and_runs() {
        let sentences =
            split_into_sentences("Hi! Ok?? This sentence is certainly long enough!!! Short one.");
        assert_eq!(sentences.len(), 1);
        assert_eq!(sentences[0].text(), "This sentence is certainly long enough");
        assert_eq!(sentences[0].position(), 0);
    }

    #[test]
    fn test_exactly_twenty_chars_is_dropped() {
        // 20 characters
        assert!(split_into_sentences("abcdefghij abcdefghi.").is_empty());
        // 21 characters
        assert_eq!(split_into_sentences("abcdefghij abcdefghij.").len(), 1);
    }

    #[test]
    fn test_word_spans_match_words() {
        let sentences = split_into_sentences("  Ownership  moves\tvalues between\nbindings  ");
        let sentence = &sentences[0];
        let from_spans: Vec<&str> = sentence
            .word_spans()
            .into_iter()
            .map(|span| &sentence.text()[span])
            .collect();
        assert_eq!(from_spans, sentence.words());
    }

    #[test]
    fn test_replace_word_skips_partial_matches() {
        let sentences = split_into_sentences("so we sat in a cabin in it.");
        let sentence = &sentences[0];

        assert_eq!(
            sentence.replace_word("a", "______").as_deref(),
            Some("so we sat in ______ cabin in it")
        );
        assert_eq!(
            sentence.replace_word("in", "______").as_deref(),
            Some("so we sat ______ a cabin in it")
        );
        assert_eq!(sentence.replace_word("cab", "______"), None);
    }

    #[test]
    fn test_empty_and_whitespace() {
        assert!(split_into_sentences("").is_empty());
        assert!(split_into_sentences("   \n\t  ...  ").is_empty());
    }

    #[test]
    fn test_trailing_text_without_terminator() {
        let sentences = split_into_sentences("Ownership moves values between bindings");
        assert_eq!(sentences.len(), 1);
    }
}
