//! Backend data API client
//!
//! Returns raw JSON records; `crate::normalize` maps them onto canonical types.

use super::{ClientError, Result};
use crate::config::BackendConfig;
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::debug;

const COURSE_PAGE_SIZE: &str = "100";

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BackendClient: Send + Sync {
    /// Published courses
    async fn get_courses(&self) -> Result<Vec<Value>>;

    async fn get_user_enrollments(&self, user_id: &str) -> Result<Vec<Value>>;
}

pub struct HttpBackendClient {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

impl HttpBackendClient {
    pub fn new(config: &BackendConfig) -> Result<Self> {
        let client = Client::builder().timeout(config.timeout()).build()?;

        Ok(Self {
            client,
            base_url: config.url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        })
    }

    async fn get_json(&self, path: &str, query: &[(&str, &str)]) -> Result<Value> {
        let url = format!("{}{}", self.base_url, path);
        debug!(url = %url, "Calling backend");

        let mut request = self.client.get(&url).query(query);
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        let response = request.send().await?;
        if !response.status().is_success() {
            return Err(ClientError::Status(response.status().as_u16()));
        }

        Ok(response.json::<Value>().await?)
    }
}

/// Pull `data.<field>` out of the backend envelope
fn extract_list(payload: Value, field: &str) -> Result<Vec<Value>> {
    match payload.pointer(&format!("/data/{field}")) {
        Some(Value::Array(items)) => Ok(items.clone()),
        Some(_) => Err(ClientError::Payload(format!("data.{field} is not an array"))),
        None => Err(ClientError::Payload(format!("missing data.{field}"))),
    }
}

#[async_trait]
impl BackendClient for HttpBackendClient {
    async fn get_courses(&self) -> Result<Vec<Value>> {
        let payload = self
            .get_json(
                "/api/v1/courses",
                &[("status", "published"), ("limit", COURSE_PAGE_SIZE)],
            )
            .await?;
        extract_list(payload, "courses")
    }

    async fn get_user_enrollments(&self, user_id: &str) -> Result<Vec<Value>> {
        let payload = self
            .get_json(&format!("/api/v1/enrollments/user/{user_id}"), &[])
            .await?;
        extract_list(payload, "enrollments")
    }
}
