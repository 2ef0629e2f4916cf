use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        profile::ports::ProfileRepository,
        recipe::entities::{Recipe, RecipeReference},
        storage::{keys, ports::KeyValueStore},
    },
    infrastructure::storage::mappers::{StoredFavorite, StoredRecipe, decode_or_default, encode},
};

#[derive(Debug, Clone)]
pub struct KvProfileRepository<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> KvProfileRepository<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }
}

impl<S: KeyValueStore> ProfileRepository for KvProfileRepository<S> {
    async fn fetch_favorites(&self) -> Result<Vec<RecipeReference>, CoreError> {
        let value = self.store.get(keys::FAVORITES).await?;
        let stored: Vec<StoredFavorite> = decode_or_default(keys::FAVORITES, value);

        Ok(stored.into_iter().map(RecipeReference::from).collect())
    }

    async fn save_favorites(&self, favorites: Vec<RecipeReference>) -> Result<(), CoreError> {
        let value = encode(keys::FAVORITES, &favorites)?;

        self.store.set(keys::FAVORITES, value).await
    }

    async fn fetch_history(&self) -> Result<Vec<Recipe>, CoreError> {
        let value = self.store.get(keys::HISTORY).await?;
        let stored: Vec<StoredRecipe> = decode_or_default(keys::HISTORY, value);

        Ok(stored.into_iter().map(Recipe::from).collect())
    }

    async fn save_history(&self, history: Vec<Recipe>) -> Result<(), CoreError> {
        let value = encode(keys::HISTORY, &history)?;

        self.store.set(keys::HISTORY, value).await
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::infrastructure::storage::InMemoryKeyValueStore;

    #[tokio::test]
    async fn test_legacy_layout_is_readable_and_rewritten() {
        let store = InMemoryKeyValueStore::with_entries([
            (keys::FAVORITES.to_string(), json!(["Gazpacho"])),
            (
                keys::HISTORY.to_string(),
                json!([{ "title": "Gazpacho", "prepTime": 15 }]),
            ),
        ]);
        let repository = KvProfileRepository::new(store.clone());

        let favorites = repository.fetch_favorites().await.unwrap();
        let history = repository.fetch_history().await.unwrap();
        assert_eq!(favorites[0].recipe_id, Recipe::title_derived_id("Gazpacho"));
        assert_eq!(history[0].id, Recipe::title_derived_id("Gazpacho"));

        repository.save_favorites(favorites).await.unwrap();
        let rewritten = store.get(keys::FAVORITES).await.unwrap().unwrap();
        assert_eq!(rewritten[0]["title"], json!("Gazpacho"));
        assert!(rewritten[0].get("recipeId").is_some());
    }
}
