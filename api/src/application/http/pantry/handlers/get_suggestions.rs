use axum::extract::State;
use despensa_core::domain::pantry::{ports::PantryService, value_objects::IngredientSuggestion};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetSuggestionsResponse {
    pub data: Vec<IngredientSuggestion>,
}

#[utoipa::path(
    get,
    path = "/suggestions",
    tag = "pantry",
    summary = "List ingredient suggestions",
    description = "Starter ingredients not yet in the pantry.",
    responses(
        (status = 200, body = GetSuggestionsResponse)
    ),
)]
pub async fn get_suggestions(
    State(state): State<AppState>,
) -> Result<Response<GetSuggestionsResponse>, ApiError> {
    let suggestions = state.service.suggestions().await.map_err(ApiError::from)?;

    Ok(Response::OK(GetSuggestionsResponse { data: suggestions }))
}
