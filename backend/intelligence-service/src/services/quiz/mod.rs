/// Quiz Module
///
/// Turns raw lesson text into fill-in-the-blank questions and extractive summaries.
///
/// # Pipeline
/// 1. Segment text into sentences
/// 2. Rank sentences by heuristic importance
/// 3. Blank one word per selected sentence and synthesize three distractors
pub mod blank;
pub mod generator;
pub mod importance;
pub mod segmenter;
pub mod summary;

pub use blank::{select_blank_word, synthesize_distractors, BLANK_MARKER};
pub use generator::QuizGenerator;
pub use importance::{importance_score, rank_by_importance, select_important};
pub use segmenter::{split_into_sentences, Sentence};
pub use summary::summarize;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum QuizError {
    #[error("Sentence has no words")]
    EmptySentence,

    #[error("Blank word not found in sentence: {0}")]
    BlankNotFound(String),
}

pub type Result<T> = std::result::Result<T, QuizError>;
