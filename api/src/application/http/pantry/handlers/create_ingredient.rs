use axum::extract::State;
use despensa_core::domain::pantry::{
    entities::Ingredient, ports::PantryService, value_objects::AddIngredientInput,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    pantry::validators::CreateIngredientValidator,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct CreateIngredientResponse {
    pub data: Ingredient,
}

#[utoipa::path(
    post,
    path = "/ingredients",
    tag = "pantry",
    summary = "Add ingredient",
    description = "Adds an ingredient to the pantry. The name is trimmed and must not be blank.",
    request_body = CreateIngredientValidator,
    responses(
        (status = 201, body = CreateIngredientResponse),
        (status = 400, description = "Blank name"),
        (status = 422, description = "Invalid payload")
    ),
)]
pub async fn create_ingredient(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<CreateIngredientValidator>,
) -> Result<Response<CreateIngredientResponse>, ApiError> {
    let ingredient = state
        .service
        .add_ingredient(AddIngredientInput {
            name: payload.name,
            category: payload.category,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(CreateIngredientResponse { data: ingredient }))
}
