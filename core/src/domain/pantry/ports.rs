use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    pantry::{
        entities::Ingredient,
        value_objects::{
            AddIngredientInput, IngredientGroup, IngredientSuggestion, ListIngredientsFilter,
            RemoveIngredientInput,
        },
    },
};

/// Persistence for the pantry. The whole collection is read and replaced at once.
#[cfg_attr(test, mockall::automock)]
pub trait PantryRepository: Send + Sync {
    fn fetch_ingredients(&self) -> impl Future<Output = Result<Vec<Ingredient>, CoreError>> + Send;

    fn save_ingredients(
        &self,
        ingredients: Vec<Ingredient>,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait PantryService: Send + Sync {
    fn add_ingredient(
        &self,
        input: AddIngredientInput,
    ) -> impl Future<Output = Result<Ingredient, CoreError>> + Send;

    fn remove_ingredient(
        &self,
        input: RemoveIngredientInput,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;

    fn list_ingredients(
        &self,
        filter: ListIngredientsFilter,
    ) -> impl Future<Output = Result<Vec<Ingredient>, CoreError>> + Send;

    fn grouped_ingredients(
        &self,
        filter: ListIngredientsFilter,
    ) -> impl Future<Output = Result<Vec<IngredientGroup>, CoreError>> + Send;

    fn suggestions(&self) -> impl Future<Output = Result<Vec<IngredientSuggestion>, CoreError>> + Send;

    fn add_suggestion(
        &self,
        name: String,
    ) -> impl Future<Output = Result<Ingredient, CoreError>> + Send;
}
