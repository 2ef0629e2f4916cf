use axum::extract::State;
use despensa_core::domain::profile::ports::ProfileService;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    profile::validators::RecordViewValidator,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct RecordViewResult {
    /// False when the recipe was already in history.
    pub recorded: bool,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct RecordViewResponse {
    pub data: RecordViewResult,
}

#[utoipa::path(
    post,
    path = "",
    tag = "history",
    summary = "Record a viewed recipe",
    request_body = RecordViewValidator,
    responses(
        (status = 200, body = RecordViewResponse),
        (status = 422, description = "Invalid payload")
    ),
)]
pub async fn record_view(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<RecordViewValidator>,
) -> Result<Response<RecordViewResponse>, ApiError> {
    let recorded = state
        .service
        .record_view(payload.recipe)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(RecordViewResponse {
        data: RecordViewResult { recorded },
    }))
}
