use serde::Deserialize;
use std::env;
use std::str::FromStr;
use std::time::Duration;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub service: ServiceConfig,
    pub backend: BackendConfig,
    pub retrieval: RetrievalConfig,
    pub recommendation: RecommendationConfig,
    pub quiz: QuizConfig,
    pub faq: FaqConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServiceConfig {
    pub http_port: u16,
    pub service_name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BackendConfig {
    pub url: String,
    pub api_key: Option<String>,
    pub timeout_ms: u64,
}

impl BackendConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

/// Vector-store collaborator; disabled when no URL is configured
#[derive(Debug, Clone, Deserialize)]
pub struct RetrievalConfig {
    pub url: Option<String>,
    pub top_k: usize,
    pub timeout_ms: u64,
}

impl RetrievalConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct RecommendationConfig {
    pub min_score: f32,
    pub max_results: usize,
}

impl Default for RecommendationConfig {
    fn default() -> Self {
        Self {
            min_score: 0.5,
            max_results: 10,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct QuizConfig {
    /// Seed for option shuffling; options keep their natural order when unset
    pub shuffle_seed: Option<u64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FaqConfig {
    /// JSON file replacing the built-in FAQ table
    pub table_path: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, envy::Error> {
        dotenv::dotenv().ok();

        Ok(Config {
            service: ServiceConfig {
                http_port: parse_var("HTTP_PORT", 8001)?,
                service_name: env::var("SERVICE_NAME")
                    .unwrap_or_else(|_| "intelligence-service".to_string()),
            },
            backend: BackendConfig {
                url: env::var("BACKEND_URL")
                    .unwrap_or_else(|_| "http://localhost:8000".to_string()),
                api_key: optional_var("BACKEND_API_KEY"),
                timeout_ms: parse_var("BACKEND_TIMEOUT_MS", 10_000)?,
            },
            retrieval: RetrievalConfig {
                url: optional_var("RETRIEVAL_URL"),
                top_k: parse_var("RETRIEVAL_TOP_K", 3)?,
                timeout_ms: parse_var("RETRIEVAL_TIMEOUT_MS", 5_000)?,
            },
            recommendation: RecommendationConfig {
                min_score: parse_var("RECOMMENDATION_MIN_SCORE", 0.5)?,
                max_results: parse_var("RECOMMENDATION_MAX_RESULTS", 10)?,
            },
            quiz: QuizConfig {
                shuffle_seed: optional_var("QUIZ_SHUFFLE_SEED")
                    .map(|raw| parse_value("QUIZ_SHUFFLE_SEED", &raw))
                    .transpose()?,
            },
            faq: FaqConfig {
                table_path: optional_var("FAQ_TABLE_PATH"),
            },
        })
    }
}

/// Blank values count as unset
fn optional_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.trim().is_empty())
}

fn parse_var<T: FromStr>(key: &str, default: T) -> Result<T, envy::Error> {
    match optional_var(key) {
        Some(raw) => parse_value(key, &raw),
        None => Ok(default),
    }
}

fn parse_value<T: FromStr>(key: &str, raw: &str) -> Result<T, envy::Error> {
    raw.trim()
        .parse()
        .map_err(|_| envy::Error::Custom(format!("{key} has an invalid value: {raw}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_value_reports_key() {
        let err = parse_value::<u16>("HTTP_PORT", "not-a-port").unwrap_err();
        assert!(err.to_string().contains("HTTP_PORT"));
    }

    #[test]
    fn test_parse_value_trims_whitespace() {
        let value: f32 = parse_value("RECOMMENDATION_MIN_SCORE", " 0.25 ").unwrap();
        assert!((value - 0.25).abs() < f32::EPSILON);
    }

    #[test]
    fn test_recommendation_defaults() {
        let config = RecommendationConfig::default();
        assert_eq!(config.max_results, 10);
        assert!((config.min_score - 0.5).abs() < f32::EPSILON);
    }
}
