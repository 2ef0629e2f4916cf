use axum::extract::{Path, State};
use despensa_core::domain::pantry::{ports::PantryService, value_objects::RemoveIngredientInput};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct DeleteIngredientResponse {
    pub message: String,
}

#[utoipa::path(
    delete,
    path = "/ingredients/{ingredient_id}",
    tag = "pantry",
    summary = "Remove ingredient",
    params(
        ("ingredient_id" = Uuid, Path, description = "Ingredient ID"),
    ),
    responses(
        (status = 200, body = DeleteIngredientResponse),
        (status = 404, description = "Ingredient not in pantry")
    ),
)]
pub async fn delete_ingredient(
    State(state): State<AppState>,
    Path(ingredient_id): Path<Uuid>,
) -> Result<Response<DeleteIngredientResponse>, ApiError> {
    state
        .service
        .remove_ingredient(RemoveIngredientInput { ingredient_id })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(DeleteIngredientResponse {
        message: "Ingredient removed successfully".to_string(),
    }))
}
