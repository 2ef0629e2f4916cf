use axum::extract::{Query, State};
use despensa_core::domain::profile::ports::ProfileService;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::toggle_favorite::FavoriteStatus;
use crate::application::http::{
    profile::validators::RecipeReferenceValidator,
    server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetFavoriteStatusResponse {
    pub data: FavoriteStatus,
}

#[utoipa::path(
    get,
    path = "/status",
    tag = "favorites",
    summary = "Check favorite",
    params(RecipeReferenceValidator),
    responses(
        (status = 200, body = GetFavoriteStatusResponse),
        (status = 422, description = "Invalid query")
    ),
)]
pub async fn get_favorite_status(
    State(state): State<AppState>,
    Query(query): Query<RecipeReferenceValidator>,
) -> Result<Response<GetFavoriteStatusResponse>, ApiError> {
    query
        .validate()
        .map_err(|errors| ApiError::ValidationError(errors.to_string()))?;

    let recipe_id = query.recipe_id;
    let title = query.title.clone();

    let is_favorite = state
        .service
        .is_favorite(query.into())
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetFavoriteStatusResponse {
        data: FavoriteStatus {
            recipe_id,
            title,
            is_favorite,
        },
    }))
}
