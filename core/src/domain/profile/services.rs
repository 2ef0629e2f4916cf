use tracing::info;

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    pantry::ports::PantryRepository,
    profile::{
        entities::{record_view_in, toggle_favorite_in},
        ports::{ProfileRepository, ProfileService},
    },
    recipe::{
        entities::{Recipe, RecipeReference},
        ports::LLMClient,
    },
};

impl<PA, PF, LLM> ProfileService for Service<PA, PF, LLM>
where
    PA: PantryRepository,
    PF: ProfileRepository,
    LLM: LLMClient,
{
    async fn toggle_favorite(&self, reference: RecipeReference) -> Result<bool, CoreError> {
        let _guard = self.write_lock.lock().await;

        let mut favorites = self.profile_repository.fetch_favorites().await?;
        let title = reference.title.clone();
        let is_favorite = toggle_favorite_in(&mut favorites, reference);
        self.profile_repository.save_favorites(favorites).await?;

        info!(title = %title, is_favorite, "favorite toggled");

        Ok(is_favorite)
    }

    async fn is_favorite(&self, reference: RecipeReference) -> Result<bool, CoreError> {
        let favorites = self.profile_repository.fetch_favorites().await?;

        Ok(favorites
            .iter()
            .any(|favorite| favorite.is_same_recipe(&reference)))
    }

    async fn list_favorites(&self) -> Result<Vec<RecipeReference>, CoreError> {
        self.profile_repository.fetch_favorites().await
    }

    async fn record_view(&self, recipe: Recipe) -> Result<bool, CoreError> {
        let _guard = self.write_lock.lock().await;

        let mut history = self.profile_repository.fetch_history().await?;
        if !record_view_in(&mut history, recipe) {
            return Ok(false);
        }
        self.profile_repository.save_history(history).await?;

        Ok(true)
    }

    async fn list_history(&self) -> Result<Vec<Recipe>, CoreError> {
        self.profile_repository.fetch_history().await
    }

    async fn clear_history(&self) -> Result<(), CoreError> {
        let _guard = self.write_lock.lock().await;

        self.profile_repository.save_history(Vec::new()).await
    }
}
