use axum::extract::State;
use despensa_core::domain::profile::ports::ProfileService;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::http::{
    profile::validators::RecipeReferenceValidator,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteStatus {
    pub recipe_id: Uuid,
    pub title: String,
    pub is_favorite: bool,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ToggleFavoriteResponse {
    pub data: FavoriteStatus,
}

#[utoipa::path(
    post,
    path = "/toggle",
    tag = "favorites",
    summary = "Toggle favorite",
    description = "Adds the recipe to favorites, or removes it when already present.",
    request_body = RecipeReferenceValidator,
    responses(
        (status = 200, body = ToggleFavoriteResponse),
        (status = 422, description = "Invalid payload")
    ),
)]
pub async fn toggle_favorite(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<RecipeReferenceValidator>,
) -> Result<Response<ToggleFavoriteResponse>, ApiError> {
    let recipe_id = payload.recipe_id;
    let title = payload.title.clone();

    let is_favorite = state
        .service
        .toggle_favorite(payload.into())
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(ToggleFavoriteResponse {
        data: FavoriteStatus {
            recipe_id,
            title,
            is_favorite,
        },
    }))
}
