// ============================================
// FAQ Matcher
// ============================================
//
// Answers common platform questions from an ordered pattern table:
// 1. Every entry pattern is tested case-insensitively against the message
// 2. Among matches the longest pattern source wins (ties: earliest entry)
// 3. No match: rotate through fallback replies by conversation length
//
// The table is compiled once at startup and shared read-only.

pub mod defaults;

use crate::models::ChatReply;
use crate::utils::char_len;
use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

pub const FALLBACK_CONFIDENCE: f32 = 0.3;

// ============================================
// Error Types
// ============================================

#[derive(Debug, Error)]
pub enum FaqError {
    #[error("Invalid FAQ pattern {pattern:?}: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
    #[error("Failed to read FAQ table: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse FAQ table: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("FAQ table has no fallback replies")]
    NoFallbacks,
}

pub type Result<T> = std::result::Result<T, FaqError>;

// ============================================
// Table
// ============================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FaqEntry {
    pub pattern: String,
    pub answer: String,
    pub confidence: f32,
    #[serde(default)]
    pub sources: Vec<String>,
}

/// On-disk layout of a custom FAQ table
#[derive(Debug, Deserialize)]
struct FaqTableFile {
    entries: Vec<FaqEntry>,
    #[serde(default = "defaults::builtin_fallbacks")]
    fallbacks: Vec<String>,
}

#[derive(Debug)]
struct CompiledEntry {
    entry: FaqEntry,
    regex: Regex,
}

#[derive(Debug)]
pub struct FaqTable {
    entries: Vec<CompiledEntry>,
    fallbacks: Vec<String>,
}

impl FaqTable {
    /// Compile every pattern; the first invalid one aborts
    pub fn new(entries: Vec<FaqEntry>, fallbacks: Vec<String>) -> Result<Self> {
        if fallbacks.is_empty() {
            return Err(FaqError::NoFallbacks);
        }

        let entries = entries
            .into_iter()
            .map(|entry| {
                let regex = RegexBuilder::new(&entry.pattern)
                    .case_insensitive(true)
                    .build()
                    .map_err(|source| FaqError::InvalidPattern {
                        pattern: entry.pattern.clone(),
                        source,
                    })?;
                Ok(CompiledEntry { entry, regex })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { entries, fallbacks })
    }

    pub fn builtin() -> Result<Self> {
        Self::new(defaults::builtin_entries(), defaults::builtin_fallbacks())
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        let file: FaqTableFile = serde_json::from_str(&raw)?;
        Self::new(file.entries, file.fallbacks)
    }

    /// Custom table when a path is configured, built-in otherwise
    pub fn load(path: Option<&str>) -> Result<Self> {
        let table = match path {
            Some(path) => Self::from_json_file(path)?,
            None => Self::builtin()?,
        };

        info!(
            entries = table.len(),
            fallbacks = table.fallbacks.len(),
            custom = path.is_some(),
            "FAQ table loaded"
        );

        Ok(table)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// ============================================
// Matcher
// ============================================

#[derive(Debug, Clone)]
pub struct FaqMatcher {
    table: Arc<FaqTable>,
}

impl FaqMatcher {
    pub fn new(table: Arc<FaqTable>) -> Self {
        Self { table }
    }

    /// Longest matching pattern source, in characters; ties keep the earliest entry
    pub fn best_match(&self, message: &str) -> Option<&FaqEntry> {
        let mut best: Option<&CompiledEntry> = None;
        for compiled in &self.table.entries {
            if !compiled.regex.is_match(message) {
                continue;
            }
            let longer = best.map_or(true, |current| {
                char_len(&compiled.entry.pattern) > char_len(&current.entry.pattern)
            });
            if longer {
                best = Some(compiled);
            }
        }
        best.map(|compiled| &compiled.entry)
    }

    pub fn answer(&self, message: &str, conversation_length: usize) -> ChatReply {
        match self.best_match(message) {
            Some(entry) => {
                debug!(pattern = %entry.pattern, "FAQ entry matched");
                ChatReply {
                    message: entry.answer.clone(),
                    sources: entry.sources.clone(),
                    confidence: entry.confidence,
                    excerpts: Vec::new(),
                }
            }
            None => self.fallback(conversation_length),
        }
    }

    pub fn fallback(&self, conversation_length: usize) -> ChatReply {
        let fallbacks = &self.table.fallbacks;
        ChatReply {
            message: fallbacks[conversation_length % fallbacks.len()].clone(),
            sources: Vec::new(),
            confidence: FALLBACK_CONFIDENCE,
            excerpts: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn matcher() -> FaqMatcher {
        FaqMatcher::new(Arc::new(FaqTable::builtin().unwrap()))
    }

    #[test]
    fn test_builtin_table_compiles() {
        let table = FaqTable::builtin().unwrap();
        assert_eq!(table.len(), defaults::builtin_entries().len());
    }

    #[test]
    fn test_refund_pattern_is_longest() {
        let entries = defaults::builtin_entries();
        let refund = entries
            .iter()
            .find(|e| e.sources == vec!["Refund Policy".to_string()])
            .unwrap();
        assert!(entries
            .iter()
            .filter(|e| e.pattern != refund.pattern)
            .all(|e| char_len(&e.pattern) < char_len(&refund.pattern)));
    }

    #[test]
    fn test_refund_wins_over_other_matches() {
        let reply = matcher().answer("I paid for a course, how do I get a REFUND?", 0);
        assert_eq!(reply.sources, vec!["Refund Policy"]);
        assert!((reply.confidence - 0.85).abs() < f32::EPSILON);
    }

    #[test]
    fn test_case_insensitive_french() {
        let reply = matcher().answer("Comment obtenir mon Diplôme ?", 0);
        assert_eq!(reply.sources, vec!["Certificates"]);
    }

    #[test]
    fn test_fallback_rotates_with_conversation_length() {
        let matcher = matcher();
        let fallbacks = defaults::builtin_fallbacks();

        let first = matcher.answer("xyzzy", 0);
        let fourth = matcher.answer("xyzzy", fallbacks.len());
        let second = matcher.answer("xyzzy", 1);

        assert_eq!(first.message, fallbacks[0]);
        assert_eq!(fourth.message, fallbacks[0]);
        assert_eq!(second.message, fallbacks[1]);
        assert!(first.sources.is_empty());
        assert!((first.confidence - FALLBACK_CONFIDENCE).abs() < f32::EPSILON);
    }

    #[test]
    fn test_ties_keep_earliest_entry() {
        let entries = vec![
            FaqEntry {
                pattern: "abc".to_string(),
                answer: "first".to_string(),
                confidence: 0.5,
                sources: vec![],
            },
            FaqEntry {
                pattern: "b.c".to_string(),
                answer: "second".to_string(),
                confidence: 0.5,
                sources: vec![],
            },
        ];
        let table = FaqTable::new(entries, vec!["fallback".to_string()]).unwrap();
        let matcher = FaqMatcher::new(Arc::new(table));

        assert_eq!(matcher.answer("xabcx", 0).message, "first");
    }

    #[test]
    fn test_invalid_pattern_is_rejected() {
        let entries = vec![FaqEntry {
            pattern: "(unclosed".to_string(),
            answer: String::new(),
            confidence: 0.5,
            sources: vec![],
        }];
        let err = FaqTable::new(entries, vec!["fallback".to_string()]).unwrap_err();
        assert!(matches!(err, FaqError::InvalidPattern { .. }));
    }

    #[test]
    fn test_empty_fallbacks_are_rejected() {
        let err = FaqTable::new(vec![], vec![]).unwrap_err();
        assert!(matches!(err, FaqError::NoFallbacks));
    }

    #[test]
    fn test_load_from_json_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"entries": [{{"pattern": "deadline", "answer": "Friday", "confidence": 0.7}}]}}"#
        )
        .unwrap();

        let table = FaqTable::load(file.path().to_str()).unwrap();
        let matcher = FaqMatcher::new(Arc::new(table));

        let reply = matcher.answer("When is the DEADLINE?", 0);
        assert_eq!(reply.message, "Friday");
        assert!(reply.sources.is_empty());

        let reply = matcher.answer("unrelated", 2);
        assert_eq!(reply.message, defaults::builtin_fallbacks()[2]);
    }

    #[test]
    fn test_load_missing_file_fails() {
        let err = FaqTable::load(Some("/nonexistent/faq.json")).unwrap_err();
        assert!(matches!(err, FaqError::Io(_)));
    }
}
