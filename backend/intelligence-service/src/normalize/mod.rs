//! Record normalization
//!
//! Upstream services disagree on field naming (`_id` vs `id`,
//! `difficultyLevel` vs `difficulty_level`, ...) and leave fields out.
//! Everything is mapped onto the canonical `Course` / `Enrollment` shapes
//! here so scoring never sees raw JSON.

use crate::models::{Course, DifficultyLevel, Enrollment};
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

const DEFAULT_DOMAIN: &str = "general";
const DEFAULT_TITLE: &str = "Unknown Course";
const MAX_RATING: f64 = 5.0;

// Each spelling gets its own field: serde aliases reject records that
// carry two spellings of the same key (`_id` and `id`, `domain` and
// `category`) as duplicates. Precedence is resolved in `into_course`.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawCourseRecord {
    #[serde(rename = "_id")]
    object_id: Option<Value>,
    id: Option<Value>,
    title: Option<String>,
    domain: Option<String>,
    category: Option<String>,
    #[serde(rename = "difficultyLevel")]
    difficulty_level_camel: Option<String>,
    difficulty_level: Option<String>,
    difficulty: Option<String>,
    #[serde(rename = "studentsCount")]
    students_count_camel: Option<f64>,
    students_count: Option<f64>,
    rating: Option<f64>,
    #[serde(rename = "estimatedDuration")]
    estimated_duration: Option<f64>,
    duration: Option<f64>,
}

/// First non-blank label, trimmed
fn first_label(candidates: impl IntoIterator<Item = Option<String>>) -> Option<String> {
    candidates
        .into_iter()
        .flatten()
        .map(|label| label.trim().to_string())
        .find(|label| !label.is_empty())
}

impl RawCourseRecord {
    fn into_course(self) -> Option<Course> {
        let id = self
            .object_id
            .as_ref()
            .and_then(identifier)
            .or_else(|| self.id.as_ref().and_then(identifier))?;
        let domain = first_label([self.domain, self.category])
            .unwrap_or_else(|| DEFAULT_DOMAIN.to_string());
        let difficulty_level = first_label([
            self.difficulty_level_camel,
            self.difficulty_level,
            self.difficulty,
        ])
        .as_deref()
        .map(DifficultyLevel::parse_lenient)
        .unwrap_or_default();
        let students = self.students_count_camel.or(self.students_count);
        let duration = self.estimated_duration.or(self.duration);

        Some(Course {
            id,
            title: self.title.unwrap_or_else(|| DEFAULT_TITLE.to_string()),
            domain,
            difficulty_level,
            students_count: students.unwrap_or(0.0).max(0.0) as u64,
            rating: self.rating.unwrap_or(0.0).clamp(0.0, MAX_RATING) as f32,
            duration: duration.unwrap_or(0.0).max(0.0),
        })
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawEnrollmentRecord {
    #[serde(rename = "userId")]
    user_id_camel: Option<Value>,
    user_id: Option<Value>,
    #[serde(rename = "courseId")]
    course_id_camel: Option<Value>,
    course_id: Option<Value>,
    course: Option<Value>,
    completed: Option<bool>,
}

impl RawEnrollmentRecord {
    fn into_enrollment(self) -> Option<Enrollment> {
        let user_id = [self.user_id_camel, self.user_id]
            .iter()
            .flatten()
            .find_map(identifier);
        let course_id = [self.course_id_camel, self.course_id, self.course]
            .iter()
            .flatten()
            .find_map(identifier)?;

        Some(Enrollment {
            user_id,
            course_id,
            completed: self.completed.unwrap_or(false),
        })
    }
}

/// Extract an identifier from a string, a number, or a populated
/// document (`{"_id": ...}`)
fn identifier(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::Object(map) => map.get("_id").or_else(|| map.get("id")).and_then(identifier),
        _ => None,
    }
}

/// Normalize raw course records; records without an identifier are skipped
pub fn normalize_courses(records: Vec<Value>) -> Vec<Course> {
    let total = records.len();
    let courses: Vec<Course> = records
        .into_iter()
        .filter_map(|record| match serde_json::from_value::<RawCourseRecord>(record) {
            Ok(raw) => raw.into_course(),
            Err(e) => {
                debug!(error = %e, "Skipping malformed course record");
                None
            }
        })
        .collect();

    if courses.len() < total {
        warn!(
            total = total,
            kept = courses.len(),
            "Dropped course records that could not be normalized"
        );
    }

    courses
}

/// Normalize raw enrollment records; records without a course reference are skipped
pub fn normalize_enrollments(records: Vec<Value>) -> Vec<Enrollment> {
    let total = records.len();
    let enrollments: Vec<Enrollment> = records
        .into_iter()
        .filter_map(|record| {
            serde_json::from_value::<RawEnrollmentRecord>(record)
                .ok()
                .and_then(RawEnrollmentRecord::into_enrollment)
        })
        .collect();

    if enrollments.len() < total {
        warn!(
            total = total,
            kept = enrollments.len(),
            "Dropped enrollment records that could not be normalized"
        );
    }

    enrollments
}
