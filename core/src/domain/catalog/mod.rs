use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{
    pantry::entities::IngredientCategory,
    recipe::{
        entities::{DietaryPreference, MealType},
        sort::SortMode,
    },
};

/// Fixed enumerations clients render as controls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Catalog {
    pub meal_types: Vec<MealType>,
    pub dietary_preferences: Vec<DietaryPreference>,
    pub ingredient_categories: Vec<IngredientCategory>,
    pub sort_modes: Vec<SortMode>,
}

impl Catalog {
    pub fn current() -> Self {
        Self {
            meal_types: MealType::ALL.to_vec(),
            dietary_preferences: DietaryPreference::ALL.to_vec(),
            ingredient_categories: IngredientCategory::ALL.to_vec(),
            sort_modes: SortMode::ALL.to_vec(),
        }
    }
}
