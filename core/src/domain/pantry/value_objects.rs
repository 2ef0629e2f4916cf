use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::entities::{Ingredient, IngredientCategory};

#[derive(Debug, Clone)]
pub struct AddIngredientInput {
    pub name: String,
    pub category: IngredientCategory,
}

#[derive(Debug, Clone)]
pub struct RemoveIngredientInput {
    pub ingredient_id: Uuid,
}

#[derive(Debug, Clone, Default)]
pub struct ListIngredientsFilter {
    pub search: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct IngredientGroup {
    pub category: IngredientCategory,
    pub ingredients: Vec<Ingredient>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct IngredientSuggestion {
    pub name: String,
    pub category: IngredientCategory,
}
