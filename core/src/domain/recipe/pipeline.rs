use tracing::{info, warn};

use crate::domain::pantry::entities::Ingredient;

use super::{
    fallback::fallback_recipes,
    ports::LLMClient,
    prompt::build_recipe_prompt,
    schema::get_recipe_schema,
    validation::{decode_recipes, validate_recipes},
    value_objects::{FallbackReason, SearchFilters, SearchOutcome},
};

/// Prompt → model → decode → validate, degrading to the fallback set on any
/// failure. Never errors and never retries.
pub async fn run_recipe_search<L>(
    llm_client: &L,
    filters: &SearchFilters,
    pantry: &[Ingredient],
) -> SearchOutcome
where
    L: LLMClient,
{
    let prompt = build_recipe_prompt(filters, pantry);

    let raw_response = match llm_client
        .generate_with_text(prompt, get_recipe_schema())
        .await
    {
        Ok(raw_response) => raw_response,
        Err(e) => return fallback(FallbackReason::Invocation(e.to_string())),
    };

    match decode_recipes(&raw_response).and_then(validate_recipes) {
        Ok(recipes) => {
            info!(count = recipes.len(), "model recipes accepted");
            SearchOutcome::ModelSucceeded { recipes }
        }
        Err(reason) => fallback(reason),
    }
}

fn fallback(reason: FallbackReason) -> SearchOutcome {
    warn!(%reason, "serving fallback recipes");

    SearchOutcome::FallbackUsed {
        recipes: fallback_recipes(),
        reason,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::domain::{
        common::entities::app_errors::CoreError,
        pantry::entities::IngredientCategory,
        recipe::{entities::MealType, fallback::fallback_recipes, ports::MockLLMClient},
    };

    fn answering(response: Result<String, CoreError>) -> MockLLMClient {
        let mut client = MockLLMClient::new();
        client
            .expect_generate_with_text()
            .times(1)
            .returning(move |_, _| Box::pin(std::future::ready(response.clone())));
        client
    }

    fn model_recipe(title: &str, prep_time: u32) -> serde_json::Value {
        json!({
            "title": title,
            "description": "Cena ligera",
            "prepTime": prep_time,
            "ingredients": [{ "name": "Pollo", "quantity": "200g" }],
            "steps": ["Cortar", "Cocinar", "Servir"],
            "dietaryInfo": ["Alto en Proteína"],
            "healthBenefits": ["Proteína magra"],
            "isAIGenerated": true,
            "imagePrompt": "chicken dinner"
        })
    }

    fn dinner_filters() -> SearchFilters {
        SearchFilters {
            meal_type: Some(MealType::Dinner),
            ingredient_query: "pollo".to_string(),
            dietary_preferences: vec![],
        }
    }

    fn fallback_titles() -> Vec<String> {
        fallback_recipes().into_iter().map(|r| r.title).collect()
    }

    #[tokio::test]
    async fn test_model_success_returns_three_recipes_in_model_order() {
        let body = json!([
            model_recipe("Pollo al limón", 30),
            model_recipe("Brochetas de pollo", 20),
            model_recipe("Sopa de pollo", 45),
        ])
        .to_string();
        let mut client = MockLLMClient::new();
        client
            .expect_generate_with_text()
            .withf(|prompt, _| prompt.contains("Limón") && prompt.contains("Cena"))
            .times(1)
            .returning(move |_, _| Box::pin(std::future::ready(Ok(body.clone()))));
        let pantry = vec![Ingredient::new("Limón".to_string(), IngredientCategory::Fruits)];

        let outcome = run_recipe_search(&client, &dinner_filters(), &pantry).await;

        assert!(!outcome.is_fallback());
        let titles: Vec<&str> = outcome.recipes().iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["Pollo al limón", "Brochetas de pollo", "Sopa de pollo"]);
    }

    #[tokio::test]
    async fn test_invocation_failure_falls_back_without_retry() {
        let client = answering(Err(CoreError::ExternalServiceError(
            "LLM API error: connection refused".to_string(),
        )));

        let outcome = run_recipe_search(&client, &dinner_filters(), &[]).await;

        assert!(matches!(
            outcome.fallback_reason(),
            Some(FallbackReason::Invocation(_))
        ));
        assert_eq!(outcome.recipes(), fallback_recipes().as_slice());
    }

    #[tokio::test]
    async fn test_undecodable_body_falls_back() {
        let client = answering(Ok("Lo siento, no puedo ayudar".to_string()));

        let outcome = run_recipe_search(&client, &dinner_filters(), &[]).await;

        assert!(matches!(
            outcome.fallback_reason(),
            Some(FallbackReason::Decode(_))
        ));
        let titles: Vec<String> = outcome.into_recipes().into_iter().map(|r| r.title).collect();
        assert_eq!(titles, fallback_titles());
    }

    #[tokio::test]
    async fn test_invalid_payload_falls_back() {
        let body = json!([
            model_recipe("Pollo al limón", 0),
            model_recipe("Brochetas de pollo", 20),
            model_recipe("Sopa de pollo", 45),
        ])
        .to_string();
        let client = answering(Ok(body));

        let outcome = run_recipe_search(&client, &dinner_filters(), &[]).await;

        assert!(matches!(
            outcome.fallback_reason(),
            Some(FallbackReason::Validation(_))
        ));
        assert_eq!(outcome.recipes().len(), 3);
    }
}
