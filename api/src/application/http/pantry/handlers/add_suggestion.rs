use axum::extract::{Path, State};
use despensa_core::domain::pantry::{entities::Ingredient, ports::PantryService};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct AddSuggestionResponse {
    pub data: Ingredient,
}

#[utoipa::path(
    post,
    path = "/suggestions/{name}",
    tag = "pantry",
    summary = "Add a suggested ingredient",
    params(
        ("name" = String, Path, description = "Suggestion name, matched case-insensitively"),
    ),
    responses(
        (status = 201, body = AddSuggestionResponse),
        (status = 404, description = "Unknown suggestion")
    ),
)]
pub async fn add_suggestion(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Response<AddSuggestionResponse>, ApiError> {
    let ingredient = state
        .service
        .add_suggestion(name)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(AddSuggestionResponse { data: ingredient }))
}
