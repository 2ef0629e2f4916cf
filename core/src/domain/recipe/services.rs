use tracing::info;

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    pantry::ports::PantryRepository,
    profile::ports::ProfileRepository,
    recipe::{
        pipeline::run_recipe_search,
        ports::{LLMClient, RecipeService},
        value_objects::{SearchOutcome, SearchRecipesInput},
    },
};

impl<PA, PF, LLM> RecipeService for Service<PA, PF, LLM>
where
    PA: PantryRepository,
    PF: ProfileRepository,
    LLM: LLMClient,
{
    async fn search_recipes(&self, input: SearchRecipesInput) -> Result<SearchOutcome, CoreError> {
        // 1. Guard the trigger condition
        if !input.filters.is_searchable() {
            return Err(CoreError::InvalidFilters);
        }

        // 2. Snapshot the pantry
        let pantry = self.pantry_repository.fetch_ingredients().await?;

        // 3. Run the pipeline, then order for presentation
        let outcome = run_recipe_search(self.llm_client.as_ref(), &input.filters, &pantry)
            .await
            .sorted(input.sort);

        info!(
            source = ?outcome.source(),
            count = outcome.recipes().len(),
            pantry_size = pantry.len(),
            "recipe search completed"
        );

        Ok(outcome)
    }
}
