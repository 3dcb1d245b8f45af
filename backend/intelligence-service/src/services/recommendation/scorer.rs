// ============================================
// Course Scorer
// ============================================
//
// Weighted multi-factor relevance score in [0, 1]:
// - Domain match (0.4): enrollments in the course's domain, saturating at 5
// - Difficulty progression (0.3): distance to the user's mean level
// - Popularity (0.2): students enrolled, saturating at 1000
// - Rating (0.1): average rating out of 5

use super::preference::DomainPreference;
use crate::models::{Course, DifficultyLevel, ScoredCourse};
use tracing::debug;

const DOMAIN_SATURATION: f32 = 5.0;
const POPULARITY_SATURATION: f32 = 1000.0;
const MAX_RATING: f32 = 5.0;
const POPULAR_THRESHOLD: u64 = 500;
const HIGHLY_RATED_THRESHOLD: f32 = 4.5;

/// Fixed scoring weights; they sum to 1.0
#[derive(Debug, Clone, Copy)]
pub struct ScoreWeights {
    pub domain_match: f32,
    pub difficulty: f32,
    pub popularity: f32,
    pub rating: f32,
}

pub const WEIGHTS: ScoreWeights = ScoreWeights {
    domain_match: 0.4,
    difficulty: 0.3,
    popularity: 0.2,
    rating: 0.1,
};

#[derive(Debug, Clone, Default)]
pub struct CourseScorer;

impl CourseScorer {
    pub fn new() -> Self {
        Self
    }

    /// Score and explain a candidate course
    pub fn score_course(
        &self,
        course: &Course,
        preferences: &DomainPreference,
        enrolled: &[&Course],
    ) -> ScoredCourse {
        ScoredCourse {
            course: course.clone(),
            score: self.score(course, preferences, enrolled),
            reason: self.reason(course, preferences, enrolled),
        }
    }

    pub fn score(
        &self,
        course: &Course,
        preferences: &DomainPreference,
        enrolled: &[&Course],
    ) -> f32 {
        let domain = self.domain_match(course, preferences);
        let difficulty = self.difficulty_progression(course.difficulty_level, enrolled);
        let popularity = self.popularity(course.students_count);
        let rating = self.rating(course.rating);

        let score = WEIGHTS.domain_match * domain
            + WEIGHTS.difficulty * difficulty
            + WEIGHTS.popularity * popularity
            + WEIGHTS.rating * rating;

        debug!(
            course_id = %course.id,
            domain = domain,
            difficulty = difficulty,
            popularity = popularity,
            rating = rating,
            score = score,
            "Recommendation score computed"
        );

        score.clamp(0.0, 1.0)
    }

    /// First applicable explanation wins
    pub fn reason(
        &self,
        course: &Course,
        preferences: &DomainPreference,
        enrolled: &[&Course],
    ) -> String {
        if preferences.contains(&course.domain) {
            return format!("Based on your interest in {}", course.domain);
        }
        if enrolled.is_empty() {
            return "Good starting point for your learning".to_string();
        }
        if course.students_count > POPULAR_THRESHOLD {
            return "Popular in your domain".to_string();
        }
        if course.rating >= HIGHLY_RATED_THRESHOLD {
            return "Highly rated by learners".to_string();
        }
        "Recommended for you".to_string()
    }

    fn domain_match(&self, course: &Course, preferences: &DomainPreference) -> f32 {
        preferences
            .count(&course.domain)
            .map(|count| (count as f32 / DOMAIN_SATURATION).min(1.0))
            .unwrap_or(0.0)
    }

    /// Rewards courses within one level of the user's mean; cold start favors beginners
    fn difficulty_progression(&self, level: DifficultyLevel, enrolled: &[&Course]) -> f32 {
        if enrolled.is_empty() {
            return if level == DifficultyLevel::Beginner {
                1.0
            } else {
                0.0
            };
        }

        let mean = enrolled
            .iter()
            .map(|c| c.difficulty_level.ordinal() as f32)
            .sum::<f32>()
            / enrolled.len() as f32;
        let diff = (level.ordinal() as f32 - mean).abs();

        if diff <= 1.0 {
            1.0 - diff / 2.0
        } else {
            0.0
        }
    }

    fn popularity(&self, students_count: u64) -> f32 {
        (students_count as f32 / POPULARITY_SATURATION).min(1.0)
    }

    fn rating(&self, rating: f32) -> f32 {
        if rating > 0.0 {
            rating / MAX_RATING
        } else {
            0.0
        }
    }
}
