//! Content retrieval store client
//!
//! The store is opaque: it receives a free-text query scoped to a course and
//! answers with ranked snippets and their distances.

use super::{ClientError, Result};
use crate::config::RetrievalConfig;
use crate::models::ContentSnippet;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContentRetriever: Send + Sync {
    async fn search(
        &self,
        query: &str,
        course_id: &str,
        top_k: usize,
    ) -> Result<Vec<ContentSnippet>>;
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SearchRequest<'a> {
    query: &'a str,
    course_id: &'a str,
    top_k: usize,
}

#[derive(Debug, Deserialize)]
struct SearchEnvelope {
    data: SearchData,
}

#[derive(Debug, Deserialize)]
struct SearchData {
    #[serde(default)]
    results: Vec<RawSnippet>,
}

#[derive(Debug, Deserialize)]
struct RawSnippet {
    content: String,
    #[serde(default)]
    metadata: SnippetMetadata,
    /// Missing distances count as "far"
    #[serde(default = "default_distance")]
    distance: f32,
}

#[derive(Debug, Default, Deserialize)]
struct SnippetMetadata {
    #[serde(default, alias = "lessonId")]
    lesson_id: Option<String>,
    #[serde(default)]
    title: Option<String>,
}

fn default_distance() -> f32 {
    1.0
}

impl From<RawSnippet> for ContentSnippet {
    fn from(raw: RawSnippet) -> Self {
        Self {
            content: raw.content,
            lesson_id: raw
                .metadata
                .lesson_id
                .unwrap_or_else(|| "unknown".to_string()),
            lesson_title: raw.metadata.title.unwrap_or_else(|| "Unknown".to_string()),
            distance: raw.distance,
        }
    }
}

pub struct HttpContentRetriever {
    client: Client,
    search_url: String,
}

impl HttpContentRetriever {
    pub fn new(base_url: &str, config: &RetrievalConfig) -> Result<Self> {
        let client = Client::builder().timeout(config.timeout()).build()?;

        Ok(Self {
            client,
            search_url: format!("{}/search", base_url.trim_end_matches('/')),
        })
    }
}

#[async_trait]
impl ContentRetriever for HttpContentRetriever {
    async fn search(
        &self,
        query: &str,
        course_id: &str,
        top_k: usize,
    ) -> Result<Vec<ContentSnippet>> {
        let response = self
            .client
            .post(&self.search_url)
            .json(&SearchRequest {
                query,
                course_id,
                top_k,
            })
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ClientError::Status(response.status().as_u16()));
        }

        let envelope: SearchEnvelope = response.json().await?;
        Ok(envelope
            .data
            .results
            .into_iter()
            .take(top_k)
            .map(ContentSnippet::from)
            .collect())
    }
}
