use axum::extract::{Query, State};
use despensa_core::domain::pantry::{
    entities::Ingredient, ports::PantryService, value_objects::ListIngredientsFilter,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    pantry::validators::IngredientSearchQuery,
    server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetIngredientsResponse {
    pub data: Vec<Ingredient>,
}

#[utoipa::path(
    get,
    path = "/ingredients",
    tag = "pantry",
    summary = "List pantry ingredients",
    params(IngredientSearchQuery),
    responses(
        (status = 200, body = GetIngredientsResponse)
    ),
)]
pub async fn get_ingredients(
    State(state): State<AppState>,
    Query(query): Query<IngredientSearchQuery>,
) -> Result<Response<GetIngredientsResponse>, ApiError> {
    let ingredients = state
        .service
        .list_ingredients(ListIngredientsFilter {
            search: query.search,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetIngredientsResponse { data: ingredients }))
}
