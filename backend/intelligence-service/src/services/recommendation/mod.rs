/// Recommendation Module
///
/// Rule-based course recommendations, no trained model involved.
///
/// # Workflow
/// 1. Fetch the catalog and the user's enrollments concurrently (timeouts degrade to empty)
/// 2. Normalize raw records into canonical courses/enrollments
/// 3. Derive domain preferences from enrolled courses
/// 4. Score, filter, sort and truncate the remaining candidates
pub mod preference;
pub mod ranker;
pub mod scorer;

pub use preference::DomainPreference;
pub use ranker::RecommendationRanker;
pub use scorer::{CourseScorer, ScoreWeights, WEIGHTS};

use crate::clients::{fetch_or_empty, BackendClient};
use crate::config::RecommendationConfig;
use crate::models::CourseRecommendation;
use crate::normalize::{normalize_courses, normalize_enrollments};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

pub struct RecommendationService {
    backend: Arc<dyn BackendClient>,
    ranker: RecommendationRanker,
    fetch_timeout: Duration,
}

impl RecommendationService {
    pub fn new(
        backend: Arc<dyn BackendClient>,
        config: &RecommendationConfig,
        fetch_timeout: Duration,
    ) -> Self {
        Self {
            backend,
            ranker: RecommendationRanker::new(config),
            fetch_timeout,
        }
    }

    /// Personalized recommendations; upstream failures yield fewer or no results, never an error
    pub async fn personalized(&self, user_id: &str, limit: usize) -> Vec<CourseRecommendation> {
        let (raw_enrollments, raw_courses) = tokio::join!(
            fetch_or_empty(
                "enrollments",
                self.fetch_timeout,
                self.backend.get_user_enrollments(user_id)
            ),
            fetch_or_empty("courses", self.fetch_timeout, self.backend.get_courses()),
        );

        let enrollments = normalize_enrollments(raw_enrollments);
        let courses = normalize_courses(raw_courses);

        info!(
            user_id = %user_id,
            courses = courses.len(),
            enrollments = enrollments.len(),
            "Generating personalized recommendations"
        );

        self.ranker.rank(&courses, &enrollments, limit)
    }

    pub async fn trending(&self, limit: usize) -> Vec<CourseRecommendation> {
        let raw_courses =
            fetch_or_empty("courses", self.fetch_timeout, self.backend.get_courses()).await;
        let courses = normalize_courses(raw_courses);

        self.ranker.trending(&courses, limit)
    }
}
