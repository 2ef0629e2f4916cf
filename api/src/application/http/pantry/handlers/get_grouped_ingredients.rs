use axum::extract::{Query, State};
use despensa_core::domain::pantry::{
    ports::PantryService,
    value_objects::{IngredientGroup, ListIngredientsFilter},
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
pub struct GetGroupedIngredientsResponse {
    pub data: Vec<IngredientGroup>,
}

#[utoipa::path(
    get,
    path = "/ingredients/grouped",
    tag = "pantry",
    summary = "List pantry ingredients by category",
    description = "Groups follow the fixed category order; empty categories are omitted.",
    params(IngredientSearchQuery),
    responses(
        (status = 200, body = GetGroupedIngredientsResponse)
    ),
)]
pub async fn get_grouped_ingredients(
    State(state): State<AppState>,
    Query(query): Query<IngredientSearchQuery>,
) -> Result<Response<GetGroupedIngredientsResponse>, ApiError> {
    let groups = state
        .service
        .grouped_ingredients(ListIngredientsFilter {
            search: query.search,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetGroupedIngredientsResponse { data: groups }))
}
