// ============================================================================
// HTTP handlers
// ============================================================================
//
// JSON over actix-web. Successful responses use the `{success, data}`
// envelope; failures are rendered by `AppError` as `{error, code}`.

pub mod chatbot;
pub mod content;
pub mod health;
pub mod recommendations;

pub use chatbot::{ask, AskRequest};
pub use content::{generate_quiz, generate_summary, QuizRequest, SummaryRequest};
pub use health::health_check;
pub use recommendations::{personalized, trending, PersonalizedRequest, TrendingQuery};

use crate::error::AppError;
use crate::services::{ChatService, QuizGenerator, RecommendationService};
use actix_web::{web, HttpResponse};
use serde::Serialize;

/// Shared, read-only service graph handed to every worker
pub struct AppState {
    pub service_name: String,
    pub recommendations: RecommendationService,
    pub quiz: QuizGenerator,
    pub chat: ChatService,
}

#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn ok(data: T) -> HttpResponse {
        HttpResponse::Ok().json(Self {
            success: true,
            data,
        })
    }
}

/// Malformed bodies and query strings answer with the same `{error, code}` shape
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .error_handler(|err, _req| AppError::BadRequest(err.to_string()).into())
}

fn query_config() -> web::QueryConfig {
    web::QueryConfig::default()
        .error_handler(|err, _req| AppError::BadRequest(err.to_string()).into())
}

/// Register every route; `AppState` is expected as `web::Data` on the app
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .app_data(query_config())
        .service(health_check)
        .service(
            web::scope("/api/v1")
                .service(
                    web::scope("/recommendations")
                        .service(personalized)
                        .service(trending),
                )
                .service(
                    web::scope("/content")
                        .service(generate_quiz)
                        .service(generate_summary),
                )
                .service(web::scope("/chatbot").service(ask)),
        );
}
