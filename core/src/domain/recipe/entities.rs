use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Namespace for identifiers derived from a recipe title.
pub const RECIPE_TITLE_NAMESPACE: Uuid = Uuid::from_u128(0x6f1c_2a4e_9b3d_4c57_a0e8_51d2_7c94_b3a6);

const IMAGE_BASE_URL: &str = "https://picsum.photos/seed";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum MealType {
    #[serde(rename = "Desayuno")]
    Breakfast,
    #[serde(rename = "Almuerzo")]
    Lunch,
    #[serde(rename = "Cena")]
    Dinner,
    #[serde(rename = "Snack")]
    Snack,
    #[serde(rename = "Postre")]
    Dessert,
    #[serde(rename = "Bebida")]
    Drink,
}

impl MealType {
    pub const ALL: [MealType; 6] = [
        MealType::Breakfast,
        MealType::Lunch,
        MealType::Dinner,
        MealType::Snack,
        MealType::Dessert,
        MealType::Drink,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            MealType::Breakfast => "Desayuno",
            MealType::Lunch => "Almuerzo",
            MealType::Dinner => "Cena",
            MealType::Snack => "Snack",
            MealType::Dessert => "Postre",
            MealType::Drink => "Bebida",
        }
    }
}

impl fmt::Display for MealType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum DietaryPreference {
    #[serde(rename = "Sin Gluten")]
    GlutenFree,
    #[serde(rename = "Vegano")]
    Vegan,
    #[serde(rename = "Vegetariano")]
    Vegetarian,
    #[serde(rename = "Keto")]
    Keto,
    #[serde(rename = "Paleo")]
    Paleo,
    #[serde(rename = "Bajo en Sodio")]
    LowSodium,
    #[serde(rename = "Alto en Proteína")]
    HighProtein,
    #[serde(rename = "Bajo en Carbohidratos")]
    LowCarb,
}

impl DietaryPreference {
    pub const ALL: [DietaryPreference; 8] = [
        DietaryPreference::GlutenFree,
        DietaryPreference::Vegan,
        DietaryPreference::Vegetarian,
        DietaryPreference::Keto,
        DietaryPreference::Paleo,
        DietaryPreference::LowSodium,
        DietaryPreference::HighProtein,
        DietaryPreference::LowCarb,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            DietaryPreference::GlutenFree => "Sin Gluten",
            DietaryPreference::Vegan => "Vegano",
            DietaryPreference::Vegetarian => "Vegetariano",
            DietaryPreference::Keto => "Keto",
            DietaryPreference::Paleo => "Paleo",
            DietaryPreference::LowSodium => "Bajo en Sodio",
            DietaryPreference::HighProtein => "Alto en Proteína",
            DietaryPreference::LowCarb => "Bajo en Carbohidratos",
        }
    }
}

impl fmt::Display for DietaryPreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RecipeIngredient {
    pub name: String,
    pub quantity: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub prep_time: u32,
    pub ingredients: Vec<RecipeIngredient>,
    pub steps: Vec<String>,
    pub dietary_info: Vec<String>,
    pub health_benefits: Vec<String>,
    #[serde(rename = "isAIGenerated")]
    pub is_ai_generated: bool,
    pub image_prompt: String,
}

impl Recipe {
    /// Identifier for records that never received a generated one.
    pub fn title_derived_id(title: &str) -> Uuid {
        Uuid::new_v5(&RECIPE_TITLE_NAMESPACE, title.as_bytes())
    }

    pub fn reference(&self) -> RecipeReference {
        RecipeReference {
            recipe_id: self.id,
            title: self.title.clone(),
        }
    }

    pub fn is_same_recipe(&self, other: &RecipeReference) -> bool {
        same_recipe(self.id, &self.title, other.recipe_id, &other.title)
    }

    /// Deterministic illustration locator; two recipes sharing a title share an image.
    pub fn image_url(&self, width: u32, height: u32) -> String {
        format!(
            "{IMAGE_BASE_URL}/{}/{width}/{height}",
            urlencoding::encode(&image_seed(&self.title))
        )
    }
}

/// Points at a recipe without carrying the whole record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RecipeReference {
    pub recipe_id: Uuid,
    pub title: String,
}

impl RecipeReference {
    pub fn from_title(title: String) -> Self {
        Self {
            recipe_id: Recipe::title_derived_id(&title),
            title,
        }
    }

    pub fn is_same_recipe(&self, other: &RecipeReference) -> bool {
        same_recipe(self.recipe_id, &self.title, other.recipe_id, &other.title)
    }
}

/// Ids decide. A title match only counts when one side carries a
/// title-derived id, i.e. was never assigned an identifier of its own.
pub fn same_recipe(left_id: Uuid, left_title: &str, right_id: Uuid, right_title: &str) -> bool {
    if left_id == right_id {
        return true;
    }

    left_title == right_title
        && (left_id == Recipe::title_derived_id(left_title)
            || right_id == Recipe::title_derived_id(right_title))
}

fn image_seed(title: &str) -> String {
    title
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::generate_uuid_v7;

    fn recipe(id: Uuid, title: &str) -> Recipe {
        Recipe {
            id,
            title: title.to_string(),
            description: String::new(),
            prep_time: 10,
            ingredients: vec![],
            steps: vec![],
            dietary_info: vec![],
            health_benefits: vec![],
            is_ai_generated: true,
            image_prompt: String::new(),
        }
    }

    #[test]
    fn test_generated_ids_keep_same_titled_recipes_apart() {
        let first = recipe(generate_uuid_v7(), "Tortilla");
        let second = recipe(generate_uuid_v7(), "Tortilla");

        assert!(!first.is_same_recipe(&second.reference()));
        assert!(first.is_same_recipe(&first.reference()));
    }

    #[test]
    fn test_title_fallback_for_records_without_generated_id() {
        let modern = recipe(generate_uuid_v7(), "Tortilla");
        let legacy = RecipeReference::from_title("Tortilla".to_string());

        assert!(modern.is_same_recipe(&legacy));
        assert!(!modern.is_same_recipe(&RecipeReference::from_title("Gazpacho".to_string())));
    }

    #[test]
    fn test_image_url_is_derived_from_normalized_title() {
        let bowl = recipe(generate_uuid_v7(), "Bowl de  Quinoa");

        assert_eq!(
            bowl.image_url(400, 240),
            "https://picsum.photos/seed/bowl-de-quinoa/400/240"
        );
    }

    #[test]
    fn test_recipe_json_uses_camel_case_fields() {
        let value = serde_json::to_value(recipe(generate_uuid_v7(), "Tortilla")).unwrap();

        assert!(value.get("prepTime").is_some());
        assert!(value.get("isAIGenerated").is_some());
        assert!(value.get("imagePrompt").is_some());
    }
}
