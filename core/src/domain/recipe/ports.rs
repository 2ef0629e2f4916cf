use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    recipe::value_objects::{SearchOutcome, SearchRecipesInput},
};

/// LLM Client trait for calling AI models
#[cfg_attr(test, mockall::automock)]
pub trait LLMClient: Send + Sync {
    /// Sends `prompt` asking for JSON output shaped by `response_schema` and
    /// returns the raw body text.
    fn generate_with_text(
        &self,
        prompt: String,
        response_schema: serde_json::Value,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;
}

/// Service trait for recipe search business logic
#[cfg_attr(test, mockall::automock)]
pub trait RecipeService: Send + Sync {
    /// Fails only on unsearchable filters or an unreadable pantry; model
    /// trouble is reported inside the outcome.
    fn search_recipes(
        &self,
        input: SearchRecipesInput,
    ) -> impl Future<Output = Result<SearchOutcome, CoreError>> + Send;
}
