use super::{ApiResponse, AppState};
use crate::error::Result;
use actix_web::{get, post, web, HttpResponse};
use serde::Deserialize;
use serde_json::json;
use tracing::instrument;
use validator::Validate;

const RECOMMENDATION_SOURCE: &str = "rule-based";

fn default_personalized_limit() -> usize {
    5
}

fn default_trending_limit() -> usize {
    10
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PersonalizedRequest {
    #[validate(length(min = 1))]
    pub user_id: String,
    #[serde(default = "default_personalized_limit")]
    #[validate(range(min = 1, max = 20))]
    pub limit: usize,
}

#[derive(Debug, Deserialize, Validate)]
pub struct TrendingQuery {
    #[serde(default = "default_trending_limit")]
    #[validate(range(min = 1, max = 50))]
    pub limit: usize,
}

/// POST /api/v1/recommendations/personalized
///
/// Upstream outages degrade to an empty list, never to an error status.
#[post("/personalized")]
#[instrument(skip(state, body), fields(user_id = %body.user_id))]
pub async fn personalized(
    state: web::Data<AppState>,
    body: web::Json<PersonalizedRequest>,
) -> Result<HttpResponse> {
    body.validate()?;

    let recommendations = state
        .recommendations
        .personalized(&body.user_id, body.limit)
        .await;

    Ok(ApiResponse::ok(json!({
        "recommendations": recommendations,
        "source": RECOMMENDATION_SOURCE,
    })))
}

/// GET /api/v1/recommendations/trending
#[get("/trending")]
#[instrument(skip(state))]
pub async fn trending(
    state: web::Data<AppState>,
    query: web::Query<TrendingQuery>,
) -> Result<HttpResponse> {
    query.validate()?;

    let recommendations = state.recommendations.trending(query.limit).await;

    Ok(ApiResponse::ok(json!({ "recommendations": recommendations })))
}
