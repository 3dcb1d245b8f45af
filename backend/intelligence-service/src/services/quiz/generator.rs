use super::blank::{select_blank_word, synthesize_distractors, BLANK_MARKER};
use super::importance::select_important;
use super::segmenter::{split_into_sentences, Sentence};
use super::{QuizError, Result};
use crate::models::{Language, QuestionType, QuizDifficulty, QuizOption, QuizQuestion};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use tracing::{debug, warn};
use uuid::Uuid;

const OPTION_LABELS: [&str; 4] = ["A", "B", "C", "D"];

/// Fill-in-the-blank multiple-choice generator
///
/// Without a seed the correct answer is always option `A`. With a seed, options
/// are shuffled by an RNG created per call, so the same seed and content always
/// produce the same option order.
#[derive(Debug, Clone, Default)]
pub struct QuizGenerator {
    shuffle_seed: Option<u64>,
}

impl QuizGenerator {
    pub fn new(shuffle_seed: Option<u64>) -> Self {
        Self { shuffle_seed }
    }

    pub fn generate(
        &self,
        content: &str,
        num_questions: usize,
        difficulty: QuizDifficulty,
        language: Language,
    ) -> Vec<QuizQuestion> {
        let sentences = split_into_sentences(content);

        if num_questions > sentences.len() {
            warn!(
                requested = num_questions,
                available = sentences.len(),
                "Not enough sentences, reducing question count"
            );
        }

        let mut rng = self.shuffle_seed.map(StdRng::seed_from_u64);

        select_important(&sentences, num_questions)
            .into_iter()
            .filter_map(|sentence| {
                match build_question(sentence, difficulty, language, rng.as_mut()) {
                    Ok(question) => Some(question),
                    Err(e) => {
                        warn!(position = sentence.position(), error = %e, "Skipping sentence");
                        None
                    }
                }
            })
            .collect()
    }
}

fn build_question(
    sentence: &Sentence,
    difficulty: QuizDifficulty,
    language: Language,
    rng: Option<&mut StdRng>,
) -> Result<QuizQuestion> {
    let words = sentence.words();
    let answer = select_blank_word(&words).ok_or(QuizError::EmptySentence)?;

    let text = sentence
        .replace_word(answer, BLANK_MARKER)
        .ok_or_else(|| QuizError::BlankNotFound(answer.to_string()))?;

    let mut choices: Vec<(String, bool)> = Vec::with_capacity(OPTION_LABELS.len());
    choices.push((answer.to_string(), true));
    choices.extend(
        synthesize_distractors(answer)
            .into_iter()
            .map(|distractor| (distractor, false)),
    );

    if let Some(rng) = rng {
        choices.shuffle(rng);
    }

    let options = OPTION_LABELS
        .iter()
        .zip(choices)
        .map(|(label, (text, is_correct))| QuizOption {
            id: (*label).to_string(),
            text,
            is_correct,
        })
        .collect();

    debug!(position = sentence.position(), answer = %answer, "Built question");

    Ok(QuizQuestion {
        id: Uuid::new_v4().to_string(),
        text,
        question_type: QuestionType::MultipleChoice,
        options,
        difficulty,
        explanation: language.explanation(answer),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const PYTHON: &str = "Python is a popular programming language. It was created in 1991. Many developers use it today.";

    fn option_texts(question: &QuizQuestion) -> Vec<&str> {
        question.options.iter().map(|o| o.text.as_str()).collect()
    }

    #[test]
    fn test_generate_scenario() {
        let questions = QuizGenerator::default().generate(
            PYTHON,
            2,
            QuizDifficulty::Medium,
            Language::Fr,
        );

        assert_eq!(questions.len(), 2);

        let first = &questions[0];
        assert_eq!(first.text, "It was created in ______");
        assert_eq!(option_texts(first), vec!["1991", "1990", "1992", "3982"]);
        assert_eq!(first.correct_option().map(|o| o.id.as_str()), Some("A"));
        assert_eq!(first.explanation, "La réponse correcte est '1991'.");

        let second = &questions[1];
        assert_eq!(second.text, "______ is a popular programming language");
        assert_eq!(second.correct_option().map(|o| o.text.as_str()), Some("Python"));
    }

    #[test]
    fn test_every_question_has_one_correct_of_four() {
        let questions = QuizGenerator::new(Some(7)).generate(
            PYTHON,
            5,
            QuizDifficulty::Hard,
            Language::En,
        );

        assert_eq!(questions.len(), 3);
        for question in &questions {
            assert_eq!(question.options.len(), 4);
            assert_eq!(question.options.iter().filter(|o| o.is_correct).count(), 1);
            assert!(question.text.contains(BLANK_MARKER));
            assert_eq!(question.difficulty, QuizDifficulty::Hard);
            assert_eq!(question.question_type, QuestionType::MultipleChoice);

            let labels: Vec<&str> = question.options.iter().map(|o| o.id.as_str()).collect();
            assert_eq!(labels, OPTION_LABELS.to_vec());
        }
    }

    #[test]
    fn test_same_seed_same_order() {
        let generator = QuizGenerator::new(Some(42));
        let first = generator.generate(PYTHON, 3, QuizDifficulty::Medium, Language::En);
        let second = generator.generate(PYTHON, 3, QuizDifficulty::Medium, Language::En);

        for (a, b) in first.iter().zip(&second) {
            assert_eq!(a.options, b.options);
            assert_ne!(a.id, b.id);
        }
    }

    #[test]
    fn test_correct_flag_follows_answer_after_shuffle() {
        for seed in 0..16 {
            let questions = QuizGenerator::new(Some(seed)).generate(
                PYTHON,
                1,
                QuizDifficulty::Medium,
                Language::En,
            );
            let correct = questions[0].correct_option().map(|o| o.text.as_str());
            assert_eq!(correct, Some("1991"), "seed {seed}");
            assert_eq!(questions[0].explanation, "The correct answer is '1991'.");
        }
    }

    #[test]
    fn test_no_usable_content() {
        let generator = QuizGenerator::default();
        assert!(generator
            .generate("", 5, QuizDifficulty::Easy, Language::Fr)
            .is_empty());
        assert!(generator
            .generate("Too short. Also short!", 5, QuizDifficulty::Easy, Language::Fr)
            .is_empty());
    }

    #[test]
    fn test_blank_never_lands_inside_another_word() {
        let questions = QuizGenerator::default().generate(
            "so we sat in a cabin in it.",
            1,
            QuizDifficulty::Medium,
            Language::En,
        );

        let question = &questions[0];
        assert_eq!(question.correct_option().map(|o| o.text.as_str()), Some("a"));
        assert_eq!(question.text, "so we sat in ______ cabin in it");
        assert!(question
            .text
            .split_whitespace()
            .all(|word| word == BLANK_MARKER || !word.contains(BLANK_MARKER)));
    }

    #[test]
    fn test_replaces_first_occurrence_only() {
        let questions = QuizGenerator::default().generate(
            "Rust guarantees memory safety and Rust avoids a garbage collector.",
            1,
            QuizDifficulty::Medium,
            Language::En,
        );

        assert_eq!(
            questions[0].text,
            "______ guarantees memory safety and Rust avoids a garbage collector"
        );
    }
}
