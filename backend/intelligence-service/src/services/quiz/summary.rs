use super::importance::rank_by_importance;
use super::segmenter::{split_into_sentences, Sentence};
use crate::models::Summary;
use crate::utils::{char_len, truncate_chars};

pub const KEY_POINT_COUNT: usize = 3;
const SEPARATOR: &str = ". ";

/// Extractive summary: keeps the most important sentences that fit `max_length`
/// characters and restores their source order.
pub fn summarize(content: &str, max_length: usize) -> Summary {
    let sentences = split_into_sentences(content);
    let ranked: Vec<&Sentence> = rank_by_importance(&sentences)
        .into_iter()
        .map(|(sentence, _)| sentence)
        .collect();

    let Some(best) = ranked.first() else {
        return Summary::default();
    };

    let key_points = ranked
        .iter()
        .take(KEY_POINT_COUNT)
        .map(|sentence| sentence.text().to_string())
        .collect();

    let mut accepted: Vec<&Sentence> = Vec::new();
    for &sentence in &ranked {
        let mut candidate = accepted.clone();
        candidate.push(sentence);
        if rendered_len(&candidate) > max_length {
            break;
        }
        accepted = candidate;
    }

    let summary = if accepted.is_empty() {
        truncate_chars(best.text(), max_length).to_string()
    } else {
        accepted.sort_by_key(|sentence| sentence.position());
        render(&accepted)
    };

    Summary {
        summary,
        key_points,
    }
}

fn render(sentences: &[&Sentence]) -> String {
    let joined = sentences
        .iter()
        .map(|sentence| sentence.text())
        .collect::<Vec<_>>()
        .join(SEPARATOR);
    format!("{joined}.")
}

fn rendered_len(sentences: &[&Sentence]) -> usize {
    char_len(&render(sentences))
}

#[cfg(test)]
mod tests {
    use super::*;

    const PYTHON: &str = "Python is a popular programming language. It was created in 1991. Many developers use it today.";

    #[test]
    fn test_everything_fits() {
        let summary = summarize(PYTHON, 500);

        assert_eq!(
            summary.summary,
            "Python is a popular programming language. It was created in 1991. Many developers use it today."
        );
        assert_eq!(summary.key_points.len(), 3);
        assert_eq!(summary.key_points[0], "It was created in 1991");
    }

    #[test]
    fn test_greedy_fit_in_importance_order() {
        // "It was created in 1991." is 23 characters
        let summary = summarize(PYTHON, 30);
        assert_eq!(summary.summary, "It was created in 1991.");
        assert!(char_len(&summary.summary) <= 30);
    }

    #[test]
    fn test_truncates_best_sentence_when_nothing_fits() {
        let summary = summarize(PYTHON, 10);
        assert_eq!(summary.summary, "It was cre");
    }

    #[test]
    fn test_empty_content() {
        let summary = summarize("   ", 200);
        assert!(summary.summary.is_empty());
        assert!(summary.key_points.is_empty());
    }
}
