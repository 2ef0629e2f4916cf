use tracing::info;

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    pantry::{
        entities::Ingredient,
        helpers::{available_suggestions, filter_by_name, find_suggestion, group_by_category},
        ports::{PantryRepository, PantryService},
        value_objects::{
            AddIngredientInput, IngredientGroup, IngredientSuggestion, ListIngredientsFilter,
            RemoveIngredientInput,
        },
    },
    profile::ports::ProfileRepository,
    recipe::ports::LLMClient,
};

impl<PA, PF, LLM> PantryService for Service<PA, PF, LLM>
where
    PA: PantryRepository,
    PF: ProfileRepository,
    LLM: LLMClient,
{
    async fn add_ingredient(&self, input: AddIngredientInput) -> Result<Ingredient, CoreError> {
        let name = input.name.trim().to_string();
        if name.is_empty() {
            return Err(CoreError::Invalid("ingredient name is required".to_string()));
        }

        let _guard = self.write_lock.lock().await;

        let mut ingredients = self.pantry_repository.fetch_ingredients().await?;
        let ingredient = Ingredient::new(name, input.category);
        ingredients.push(ingredient.clone());
        self.pantry_repository.save_ingredients(ingredients).await?;

        info!(ingredient_id = %ingredient.id, name = %ingredient.name, "ingredient added to pantry");

        Ok(ingredient)
    }

    async fn remove_ingredient(&self, input: RemoveIngredientInput) -> Result<(), CoreError> {
        let _guard = self.write_lock.lock().await;

        let mut ingredients = self.pantry_repository.fetch_ingredients().await?;
        let before = ingredients.len();
        ingredients.retain(|ingredient| ingredient.id != input.ingredient_id);

        if ingredients.len() == before {
            return Err(CoreError::NotFound);
        }

        self.pantry_repository.save_ingredients(ingredients).await?;

        info!(ingredient_id = %input.ingredient_id, "ingredient removed from pantry");

        Ok(())
    }

    async fn list_ingredients(
        &self,
        filter: ListIngredientsFilter,
    ) -> Result<Vec<Ingredient>, CoreError> {
        let ingredients = self.pantry_repository.fetch_ingredients().await?;

        Ok(filter_by_name(&ingredients, filter.search.as_deref()))
    }

    async fn grouped_ingredients(
        &self,
        filter: ListIngredientsFilter,
    ) -> Result<Vec<IngredientGroup>, CoreError> {
        let ingredients = self.list_ingredients(filter).await?;

        Ok(group_by_category(&ingredients))
    }

    async fn suggestions(&self) -> Result<Vec<IngredientSuggestion>, CoreError> {
        let ingredients = self.pantry_repository.fetch_ingredients().await?;

        Ok(available_suggestions(&ingredients))
    }

    async fn add_suggestion(&self, name: String) -> Result<Ingredient, CoreError> {
        let suggestion = find_suggestion(&name).ok_or(CoreError::NotFound)?;

        self.add_ingredient(AddIngredientInput {
            name: suggestion.name,
            category: suggestion.category,
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::pantry::entities::{IngredientCategory, SUGGESTED_INGREDIENTS},
        infrastructure::{
            llm::FakeLLMClient, pantry::KvPantryRepository, profile::KvProfileRepository,
            storage::InMemoryKeyValueStore,
        },
    };

    type TestService = Service<
        KvPantryRepository<InMemoryKeyValueStore>,
        KvProfileRepository<InMemoryKeyValueStore>,
        FakeLLMClient,
    >;

    fn service() -> TestService {
        let store = InMemoryKeyValueStore::new();
        Service::new(
            KvPantryRepository::new(store.clone()),
            KvProfileRepository::new(store),
            FakeLLMClient::default(),
        )
    }

    fn add(name: &str, category: IngredientCategory) -> AddIngredientInput {
        AddIngredientInput {
            name: name.to_string(),
            category,
        }
    }

    fn names(ingredients: &[Ingredient]) -> Vec<String> {
        let mut names: Vec<String> = ingredients.iter().map(|i| i.name.clone()).collect();
        names.sort();
        names
    }

    #[tokio::test]
    async fn test_add_then_remove_restores_pantry() {
        let service = service();
        service
            .add_ingredient(add("Tofu", IngredientCategory::Proteins))
            .await
            .unwrap();
        let before = service
            .list_ingredients(ListIngredientsFilter::default())
            .await
            .unwrap();

        let added = service
            .add_ingredient(add("  Espinaca ", IngredientCategory::Vegetables))
            .await
            .unwrap();
        assert_eq!(added.name, "Espinaca");

        service
            .remove_ingredient(RemoveIngredientInput {
                ingredient_id: added.id,
            })
            .await
            .unwrap();

        let after = service
            .list_ingredients(ListIngredientsFilter::default())
            .await
            .unwrap();
        assert_eq!(names(&before), names(&after));
    }

    #[tokio::test]
    async fn test_blank_name_is_rejected() {
        let service = service();

        let result = service
            .add_ingredient(add("   ", IngredientCategory::Other))
            .await;

        assert!(matches!(result, Err(CoreError::Invalid(_))));
    }

    #[tokio::test]
    async fn test_remove_unknown_id_is_not_found() {
        let service = service();

        let result = service
            .remove_ingredient(RemoveIngredientInput {
                ingredient_id: uuid::Uuid::new_v4(),
            })
            .await;

        assert_eq!(result, Err(CoreError::NotFound));
    }

    #[tokio::test]
    async fn test_add_suggestion_removes_it_from_suggestions() {
        let service = service();

        let added = service.add_suggestion("salmón".to_string()).await.unwrap();
        assert_eq!(added.name, "Salmón");
        assert_eq!(added.category, IngredientCategory::Proteins);

        let suggestions = service.suggestions().await.unwrap();
        assert_eq!(suggestions.len(), SUGGESTED_INGREDIENTS.len() - 1);
        assert!(suggestions.iter().all(|s| s.name != "Salmón"));

        assert_eq!(
            service.add_suggestion("trufa".to_string()).await,
            Err(CoreError::NotFound)
        );
    }

    #[tokio::test]
    async fn test_grouped_ingredients_respects_search() {
        let service = service();
        for (name, category) in [
            ("Avena", IngredientCategory::Grains),
            ("Ajo", IngredientCategory::Spices),
            ("Arroz integral", IngredientCategory::Grains),
        ] {
            service.add_ingredient(add(name, category)).await.unwrap();
        }

        let groups = service
            .grouped_ingredients(ListIngredientsFilter {
                search: Some("a".to_string()),
            })
            .await
            .unwrap();
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].category, IngredientCategory::Grains);

        let groups = service
            .grouped_ingredients(ListIngredientsFilter {
                search: Some("ajo".to_string()),
            })
            .await
            .unwrap();
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].category, IngredientCategory::Spices);
    }
}
