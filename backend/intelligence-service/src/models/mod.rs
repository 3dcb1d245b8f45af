use serde::{Deserialize, Serialize};

// ============================================
// Catalog records
// ============================================

/// Course difficulty, ordered beginner < intermediate < advanced
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum DifficultyLevel {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
}

impl DifficultyLevel {
    pub fn ordinal(self) -> u8 {
        match self {
            DifficultyLevel::Beginner => 1,
            DifficultyLevel::Intermediate => 2,
            DifficultyLevel::Advanced => 3,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DifficultyLevel::Beginner => "beginner",
            DifficultyLevel::Intermediate => "intermediate",
            DifficultyLevel::Advanced => "advanced",
        }
    }

    /// Unknown labels fall back to beginner
    pub fn parse_lenient(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "intermediate" => DifficultyLevel::Intermediate,
            "advanced" => DifficultyLevel::Advanced,
            _ => DifficultyLevel::Beginner,
        }
    }
}

/// Canonical course snapshot, produced by `normalize`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: String,
    pub title: String,
    pub domain: String,
    pub difficulty_level: DifficultyLevel,
    pub students_count: u64,
    /// 0.0 - 5.0
    pub rating: f32,
    pub duration: f64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Enrollment {
    pub user_id: Option<String>,
    pub course_id: String,
    pub completed: bool,
}

// ============================================
// Recommendations
// ============================================

#[derive(Debug, Clone)]
pub struct ScoredCourse {
    pub course: Course,
    /// Always within [0, 1]
    pub score: f32,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseRecommendation {
    pub course_id: String,
    pub title: String,
    pub score: f32,
    pub reason: String,
    pub domain: String,
    pub difficulty_level: DifficultyLevel,
    pub estimated_duration: f64,
}

impl From<ScoredCourse> for CourseRecommendation {
    fn from(scored: ScoredCourse) -> Self {
        Self {
            course_id: scored.course.id,
            title: scored.course.title,
            score: crate::utils::round2(scored.score),
            reason: scored.reason,
            domain: scored.course.domain,
            difficulty_level: scored.course.difficulty_level,
            estimated_duration: scored.course.duration,
        }
    }
}

// ============================================
// Quiz
// ============================================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuizDifficulty {
    #[serde(alias = "beginner")]
    Easy,
    #[default]
    #[serde(alias = "intermediate")]
    Medium,
    #[serde(alias = "advanced")]
    Hard,
}

/// Explanation locale; `fr` is the platform's primary language
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Fr,
    En,
}

impl Language {
    /// Unrecognized tags resolve to the default locale
    pub fn from_tag(tag: &str) -> Self {
        match tag.trim().to_ascii_lowercase().as_str() {
            "en" | "en-us" | "en-gb" | "english" => Language::En,
            _ => Language::Fr,
        }
    }

    pub fn explanation(&self, answer: &str) -> String {
        match self {
            Language::Fr => format!("La réponse correcte est '{answer}'."),
            Language::En => format!("The correct answer is '{answer}'."),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QuestionType {
    MultipleChoice,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizOption {
    pub id: String,
    pub text: String,
    pub is_correct: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizQuestion {
    pub id: String,
    /// Sentence with the answer replaced by the blank marker
    pub text: String,
    #[serde(rename = "type")]
    pub question_type: QuestionType,
    pub options: Vec<QuizOption>,
    pub difficulty: QuizDifficulty,
    pub explanation: String,
}

impl QuizQuestion {
    pub fn correct_option(&self) -> Option<&QuizOption> {
        self.options.iter().find(|option| option.is_correct)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub summary: String,
    pub key_points: Vec<String>,
}

// ============================================
// Chat
// ============================================

/// Snippet returned by the retrieval collaborator; lower distance is closer
#[derive(Debug, Clone, PartialEq)]
pub struct ContentSnippet {
    pub content: String,
    pub lesson_id: String,
    pub lesson_title: String,
    pub distance: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatSource {
    pub lesson_id: String,
    pub lesson_title: String,
    pub excerpt: String,
}

/// Reply produced by either the FAQ matcher or the course assistant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatReply {
    pub message: String,
    pub sources: Vec<String>,
    pub confidence: f32,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub excerpts: Vec<ChatSource>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difficulty_ordering_and_ordinals() {
        assert!(DifficultyLevel::Beginner < DifficultyLevel::Intermediate);
        assert!(DifficultyLevel::Intermediate < DifficultyLevel::Advanced);
        assert_eq!(DifficultyLevel::Advanced.ordinal(), 3);
        assert_eq!(
            DifficultyLevel::parse_lenient(" Advanced "),
            DifficultyLevel::Advanced
        );
        assert_eq!(
            DifficultyLevel::parse_lenient("expert"),
            DifficultyLevel::Beginner
        );
    }

    #[test]
    fn test_quiz_difficulty_accepts_course_levels() {
        let parsed: QuizDifficulty = serde_json::from_str("\"advanced\"").unwrap();
        assert_eq!(parsed, QuizDifficulty::Hard);
        let parsed: QuizDifficulty = serde_json::from_str("\"easy\"").unwrap();
        assert_eq!(parsed, QuizDifficulty::Easy);
        assert_eq!(QuizDifficulty::default(), QuizDifficulty::Medium);
    }

    #[test]
    fn test_language_fallback() {
        assert_eq!(Language::from_tag("EN"), Language::En);
        assert_eq!(Language::from_tag("de"), Language::Fr);
        assert_eq!(
            Language::En.explanation("1991"),
            "The correct answer is '1991'."
        );
        assert_eq!(
            Language::Fr.explanation("Python"),
            "La réponse correcte est 'Python'."
        );
    }

    #[test]
    fn test_question_wire_format() {
        let question = QuizQuestion {
            id: "q1".to_string(),
            text: "It was created in ______".to_string(),
            question_type: QuestionType::MultipleChoice,
            options: vec![QuizOption {
                id: "A".to_string(),
                text: "1991".to_string(),
                is_correct: true,
            }],
            difficulty: QuizDifficulty::Medium,
            explanation: "The correct answer is '1991'.".to_string(),
        };

        let json = serde_json::to_value(&question).unwrap();
        assert_eq!(json["type"], "multiple-choice");
        assert_eq!(json["difficulty"], "medium");
        assert_eq!(json["options"][0]["isCorrect"], true);
    }
}
