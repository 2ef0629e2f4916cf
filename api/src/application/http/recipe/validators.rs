use despensa_core::domain::recipe::{
    entities::{DietaryPreference, MealType},
    sort::SortMode,
    value_objects::SearchFilters,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SearchRecipesValidator {
    #[serde(default)]
    pub meal_type: Option<MealType>,

    #[serde(default)]
    #[validate(length(max = 100, message = "ingredientQuery must be at most 100 characters"))]
    pub ingredient_query: String,

    #[serde(default)]
    pub dietary_preferences: Vec<DietaryPreference>,

    #[serde(default)]
    pub sort: SortMode,
}

impl SearchRecipesValidator {
    pub fn filters(&self) -> SearchFilters {
        SearchFilters {
            meal_type: self.meal_type,
            ingredient_query: self.ingredient_query.clone(),
            dietary_preferences: Vec::new(),
        }
        .with_dietary_preferences(self.dietary_preferences.iter().copied())
    }
}
