use serde::{Deserialize, Serialize, de::DeserializeOwned};
use tracing::warn;
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    recipe::entities::{Recipe, RecipeIngredient, RecipeReference},
};

/// Decodes a stored collection. Absent keys and values of an unexpected shape
/// both yield the default.
pub fn decode_or_default<T>(key: &str, value: Option<serde_json::Value>) -> T
where
    T: DeserializeOwned + Default,
{
    let Some(value) = value else {
        return T::default();
    };

    serde_json::from_value(value).unwrap_or_else(|e| {
        warn!(key, "Ignoring stored value with unexpected shape: {}", e);
        T::default()
    })
}

pub fn encode<T>(key: &str, value: &T) -> Result<serde_json::Value, CoreError>
where
    T: Serialize,
{
    serde_json::to_value(value).map_err(|e| {
        tracing::error!(key, "Failed to encode stored value: {}", e);
        CoreError::StorageError(format!("failed to encode {}: {}", key, e))
    })
}

/// Favorites are either references or, in the older layout, bare titles.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum StoredFavorite {
    Reference(RecipeReference),
    Title(String),
}

impl From<StoredFavorite> for RecipeReference {
    fn from(stored: StoredFavorite) -> Self {
        match stored {
            StoredFavorite::Reference(reference) => reference,
            StoredFavorite::Title(title) => RecipeReference::from_title(title),
        }
    }
}

/// History entry; records written before ids existed have none.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredRecipe {
    #[serde(default)]
    pub id: Option<Uuid>,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub prep_time: u32,
    #[serde(default)]
    pub ingredients: Vec<RecipeIngredient>,
    #[serde(default)]
    pub steps: Vec<String>,
    #[serde(default)]
    pub dietary_info: Vec<String>,
    #[serde(default)]
    pub health_benefits: Vec<String>,
    #[serde(default, rename = "isAIGenerated")]
    pub is_ai_generated: bool,
    #[serde(default)]
    pub image_prompt: String,
}

impl From<StoredRecipe> for Recipe {
    fn from(stored: StoredRecipe) -> Self {
        Self {
            id: stored
                .id
                .unwrap_or_else(|| Recipe::title_derived_id(&stored.title)),
            title: stored.title,
            description: stored.description,
            prep_time: stored.prep_time,
            ingredients: stored.ingredients,
            steps: stored.steps,
            dietary_info: stored.dietary_info,
            health_benefits: stored.health_benefits,
            is_ai_generated: stored.is_ai_generated,
            image_prompt: stored.image_prompt,
        }
    }
}
