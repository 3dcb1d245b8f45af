use super::preference::{enrolled_courses, enrolled_ids, DomainPreference};
use super::scorer::CourseScorer;
use crate::config::RecommendationConfig;
use crate::models::{Course, CourseRecommendation, Enrollment, ScoredCourse};
use std::cmp::Ordering;
use tracing::info;

const TRENDING_REASON: &str = "Popular this week";
const TRENDING_SATURATION: f32 = 1000.0;

/// Filters, scores, sorts and truncates candidate courses
pub struct RecommendationRanker {
    scorer: CourseScorer,
    min_score: f32,
    max_results: usize,
}

impl RecommendationRanker {
    pub fn new(config: &RecommendationConfig) -> Self {
        Self {
            scorer: CourseScorer::new(),
            min_score: config.min_score,
            max_results: config.max_results,
        }
    }

    /// Personalized top-N; enrolled courses are never returned
    ///
    /// Ties keep catalog order (stable sort, no secondary key).
    pub fn rank(
        &self,
        courses: &[Course],
        enrollments: &[Enrollment],
        limit: usize,
    ) -> Vec<CourseRecommendation> {
        let enrolled_set = enrolled_ids(enrollments);
        let enrolled = enrolled_courses(courses, &enrolled_set);
        let preferences = DomainPreference::from_courses(enrolled.iter().copied());

        let mut scored: Vec<ScoredCourse> = courses
            .iter()
            .filter(|course| !enrolled_set.contains(course.id.as_str()))
            .map(|course| self.scorer.score_course(course, &preferences, &enrolled))
            .filter(|scored| scored.score >= self.min_score)
            .collect();

        scored.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));

        let take = self.effective_limit(limit);
        let recommendations: Vec<CourseRecommendation> = scored
            .into_iter()
            .take(take)
            .map(CourseRecommendation::from)
            .collect();

        info!(
            catalog = courses.len(),
            enrolled = enrolled.len(),
            returned = recommendations.len(),
            "Personalized ranking completed"
        );

        recommendations
    }

    /// Most popular courses first
    pub fn trending(&self, courses: &[Course], limit: usize) -> Vec<CourseRecommendation> {
        let mut ordered: Vec<&Course> = courses.iter().collect();
        ordered.sort_by(|a, b| b.students_count.cmp(&a.students_count));

        ordered
            .into_iter()
            .take(self.effective_limit(limit))
            .map(|course| {
                CourseRecommendation::from(ScoredCourse {
                    course: course.clone(),
                    score: (course.students_count as f32 / TRENDING_SATURATION).min(1.0),
                    reason: TRENDING_REASON.to_string(),
                })
            })
            .collect()
    }

    /// Caller limits never exceed the configured maximum
    fn effective_limit(&self, requested: usize) -> usize {
        requested.min(self.max_results)
    }
}
