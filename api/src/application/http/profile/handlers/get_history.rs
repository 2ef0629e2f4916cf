use axum::extract::State;
use despensa_core::domain::{profile::ports::ProfileService, recipe::entities::Recipe};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetHistoryResponse {
    pub data: Vec<Recipe>,
}

#[utoipa::path(
    get,
    path = "",
    tag = "history",
    summary = "List viewed recipes",
    description = "Most recent first, at most 20 entries.",
    responses(
        (status = 200, body = GetHistoryResponse)
    ),
)]
pub async fn get_history(
    State(state): State<AppState>,
) -> Result<Response<GetHistoryResponse>, ApiError> {
    let history = state.service.list_history().await.map_err(ApiError::from)?;

    Ok(Response::OK(GetHistoryResponse { data: history }))
}
