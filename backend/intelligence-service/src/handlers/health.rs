use super::AppState;
use actix_web::{get, web, HttpResponse};
use serde_json::json;

/// GET /health
#[get("/health")]
pub async fn health_check(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": state.service_name,
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
