use super::{ApiResponse, AppState};
use crate::error::Result;
use actix_web::{post, web, HttpResponse};
use serde::Deserialize;
use serde_json::Value;
use tracing::instrument;
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AskRequest {
    #[validate(length(min = 1, max = 2000))]
    pub message: String,
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub course_id: Option<String>,
    /// Prior turns are only counted (to rotate fallback replies), so any JSON shape is accepted
    #[serde(default)]
    pub conversation_history: Vec<Value>,
}

/// POST /api/v1/chatbot/ask
#[post("/ask")]
#[instrument(
    skip(state, body),
    fields(course_id = ?body.course_id, turns = body.conversation_history.len())
)]
pub async fn ask(state: web::Data<AppState>, body: web::Json<AskRequest>) -> Result<HttpResponse> {
    body.validate()?;

    let reply = state
        .chat
        .ask(
            &body.message,
            body.course_id.as_deref(),
            body.conversation_history.len(),
        )
        .await;

    Ok(ApiResponse::ok(reply))
}
