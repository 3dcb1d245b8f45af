use crate::models::{Course, Enrollment};
use std::collections::{HashMap, HashSet};

/// Domain affinities derived from a user's enrolled courses
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DomainPreference {
    counts: HashMap<String, u32>,
}

impl DomainPreference {
    /// Count enrolled courses per domain
    pub fn from_courses<'a>(courses: impl IntoIterator<Item = &'a Course>) -> Self {
        let mut counts: HashMap<String, u32> = HashMap::new();
        for course in courses {
            *counts.entry(course.domain.clone()).or_insert(0) += 1;
        }
        Self { counts }
    }

    pub fn count(&self, domain: &str) -> Option<u32> {
        self.counts.get(domain).copied()
    }

    pub fn contains(&self, domain: &str) -> bool {
        self.counts.contains_key(domain)
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

/// Enrolled course ids, borrowed from the enrollment list
pub fn enrolled_ids(enrollments: &[Enrollment]) -> HashSet<&str> {
    enrollments.iter().map(|e| e.course_id.as_str()).collect()
}

/// Catalog entries the user is enrolled in, in catalog order
pub fn enrolled_courses<'a>(courses: &'a [Course], enrolled: &HashSet<&str>) -> Vec<&'a Course> {
    courses
        .iter()
        .filter(|course| enrolled.contains(course.id.as_str()))
        .collect()
}
