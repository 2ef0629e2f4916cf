use despensa_core::domain::pantry::entities::IngredientCategory;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateIngredientValidator {
    #[validate(length(min = 1, max = 100, message = "name must be between 1 and 100 characters"))]
    pub name: String,

    #[serde(default)]
    pub category: IngredientCategory,
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct IngredientSearchQuery {
    /// Case-insensitive substring of the ingredient name.
    pub search: Option<String>,
}
