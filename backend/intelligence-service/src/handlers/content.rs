use super::{ApiResponse, AppState};
use crate::error::Result;
use crate::models::{Language, QuizDifficulty};
use crate::services::summarize;
use actix_web::{post, web, HttpResponse};
use serde::Deserialize;
use serde_json::json;
use tracing::{info, instrument};
use validator::Validate;

fn default_num_questions() -> usize {
    5
}

fn default_language() -> String {
    "fr".to_string()
}

fn default_max_length() -> usize {
    200
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct QuizRequest {
    #[validate(length(min = 1))]
    pub content: String,
    #[serde(default = "default_num_questions")]
    #[validate(range(min = 1, max = 20))]
    pub num_questions: usize,
    #[serde(default)]
    pub difficulty: QuizDifficulty,
    /// Free-form tag; unknown values fall back to French
    #[serde(default = "default_language")]
    pub language: String,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SummaryRequest {
    #[validate(length(min = 1))]
    pub content: String,
    #[serde(default = "default_max_length")]
    #[validate(range(min = 1))]
    pub max_length: usize,
}

/// POST /api/v1/content/quiz
#[post("/quiz")]
#[instrument(skip(state, body), fields(num_questions = body.num_questions))]
pub async fn generate_quiz(
    state: web::Data<AppState>,
    body: web::Json<QuizRequest>,
) -> Result<HttpResponse> {
    body.validate()?;

    let questions = state.quiz.generate(
        &body.content,
        body.num_questions,
        body.difficulty,
        Language::from_tag(&body.language),
    );

    info!(generated = questions.len(), "Quiz generated");

    Ok(ApiResponse::ok(json!({
        "total": questions.len(),
        "questions": questions,
    })))
}

/// POST /api/v1/content/summary
#[post("/summary")]
#[instrument(skip(body), fields(max_length = body.max_length))]
pub async fn generate_summary(body: web::Json<SummaryRequest>) -> Result<HttpResponse> {
    body.validate()?;

    let summary = summarize(&body.content, body.max_length);

    Ok(ApiResponse::ok(summary))
}
