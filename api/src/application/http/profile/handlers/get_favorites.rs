use axum::extract::State;
use despensa_core::domain::{profile::ports::ProfileService, recipe::entities::RecipeReference};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetFavoritesResponse {
    pub data: Vec<RecipeReference>,
}

#[utoipa::path(
    get,
    path = "",
    tag = "favorites",
    summary = "List favorites",
    responses(
        (status = 200, body = GetFavoritesResponse)
    ),
)]
pub async fn get_favorites(
    State(state): State<AppState>,
) -> Result<Response<GetFavoritesResponse>, ApiError> {
    let favorites = state.service.list_favorites().await.map_err(ApiError::from)?;

    Ok(Response::OK(GetFavoritesResponse { data: favorites }))
}
