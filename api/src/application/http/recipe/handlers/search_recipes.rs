use axum::extract::State;
use despensa_core::domain::recipe::{
    entities::Recipe,
    ports::RecipeService,
    value_objects::{FallbackReason, RecipeSource, SearchOutcome, SearchRecipesInput},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    recipe::validators::SearchRecipesValidator,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

const IMAGE_WIDTH: u32 = 400;
const IMAGE_HEIGHT: u32 = 300;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RecipeView {
    #[serde(flatten)]
    pub recipe: Recipe,
    pub image_url: String,
}

impl From<Recipe> for RecipeView {
    fn from(recipe: Recipe) -> Self {
        let image_url = recipe.image_url(IMAGE_WIDTH, IMAGE_HEIGHT);
        Self { recipe, image_url }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    pub recipes: Vec<RecipeView>,
    pub source: RecipeSource,
    pub fallback_reason: Option<FallbackReason>,
}

impl From<SearchOutcome> for SearchResult {
    fn from(outcome: SearchOutcome) -> Self {
        let source = outcome.source();
        let fallback_reason = outcome.fallback_reason().cloned();

        Self {
            recipes: outcome.into_recipes().into_iter().map(RecipeView::from).collect(),
            source,
            fallback_reason,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct SearchRecipesResponse {
    pub data: SearchResult,
}

#[utoipa::path(
    post,
    path = "/search",
    tag = "recipe",
    summary = "Search recipes",
    description = "Asks the language model for three recipes matching the filters and the current pantry. \
                   Model failures are answered with the fallback recipes and reported in `source`.",
    request_body = SearchRecipesValidator,
    responses(
        (status = 200, body = SearchRecipesResponse),
        (status = 400, description = "Neither a meal type nor a main ingredient was given"),
        (status = 422, description = "Invalid payload")
    ),
)]
pub async fn search_recipes(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<SearchRecipesValidator>,
) -> Result<Response<SearchRecipesResponse>, ApiError> {
    let outcome = state
        .service
        .search_recipes(SearchRecipesInput {
            filters: payload.filters(),
            sort: payload.sort,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(SearchRecipesResponse {
        data: SearchResult::from(outcome),
    }))
}
