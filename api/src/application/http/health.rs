use axum::{Router, extract::State, routing::get};
use despensa_core::domain::health::{entities::HealthStatus, ports::HealthCheckService};
use serde::{Deserialize, Serialize};
use utoipa::{OpenApi, ToSchema};

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct HealthResponse {
    pub data: HealthStatus,
}

#[derive(OpenApi)]
#[openapi(paths(health_check))]
pub struct HealthApiDoc;

#[utoipa::path(
    get,
    path = "",
    tag = "health",
    summary = "Readiness check",
    description = "Reports whether the key-value store answers and how many pantry items it holds.",
    responses(
        (status = 200, body = HealthResponse),
        (status = 500, description = "Storage unavailable")
    ),
)]
pub async fn health_check(
    State(state): State<AppState>,
) -> Result<Response<HealthResponse>, ApiError> {
    let status = state.service.readness().await.map_err(ApiError::from)?;

    Ok(Response::OK(HealthResponse { data: status }))
}

pub fn health_routes(root_path: &str) -> Router<AppState> {
    Router::new().route(&format!("{root_path}/health"), get(health_check))
}
