// Sentence salience heuristics:
// - +2 for 10..=25 words (readable, self-contained)
// - +1 when a digit appears (likely factual)
// - +1 per capitalized word after the first, up to 3 (named-entity proxy)

use super::segmenter::Sentence;
use std::ops::RangeInclusive;

const READABLE_WORD_RANGE: RangeInclusive<usize> = 10..=25;
const READABLE_BONUS: u32 = 2;
const DIGIT_BONUS: u32 = 1;
const MAX_CAPITALIZED_BONUS: u32 = 3;

pub fn importance_score(sentence: &str) -> u32 {
    let words: Vec<&str> = sentence.split_whitespace().collect();
    let mut score = 0;

    if READABLE_WORD_RANGE.contains(&words.len()) {
        score += READABLE_BONUS;
    }

    if sentence.chars().any(|c| c.is_ascii_digit()) {
        score += DIGIT_BONUS;
    }

    let capitalized = words
        .iter()
        .skip(1)
        .filter(|word| is_capitalized(word))
        .count() as u32;
    score += capitalized.min(MAX_CAPITALIZED_BONUS);

    score
}

fn is_capitalized(word: &str) -> bool {
    let mut chars = word.chars();
    matches!(chars.next(), Some(first) if first.is_uppercase()) && chars.next().is_some()
}

/// All sentences, highest score first; equal scores keep source order
pub fn rank_by_importance(sentences: &[Sentence]) -> Vec<(&Sentence, u32)> {
    let mut ranked: Vec<(&Sentence, u32)> = sentences
        .iter()
        .map(|sentence| (sentence, importance_score(sentence.text())))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked
}

/// Top `count` sentences; fewer when the input is shorter
pub fn select_important(sentences: &[Sentence], count: usize) -> Vec<&Sentence> {
    rank_by_importance(sentences)
        .into_iter()
        .take(count)
        .map(|(sentence, _)| sentence)
        .collect()
}
