use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    recipe::entities::{Recipe, RecipeReference},
};

/// Persistence for favorites and view history.
#[cfg_attr(test, mockall::automock)]
pub trait ProfileRepository: Send + Sync {
    fn fetch_favorites(
        &self,
    ) -> impl Future<Output = Result<Vec<RecipeReference>, CoreError>> + Send;

    fn save_favorites(
        &self,
        favorites: Vec<RecipeReference>,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;

    fn fetch_history(&self) -> impl Future<Output = Result<Vec<Recipe>, CoreError>> + Send;

    fn save_history(
        &self,
        history: Vec<Recipe>,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait ProfileService: Send + Sync {
    fn toggle_favorite(
        &self,
        reference: RecipeReference,
    ) -> impl Future<Output = Result<bool, CoreError>> + Send;

    fn is_favorite(
        &self,
        reference: RecipeReference,
    ) -> impl Future<Output = Result<bool, CoreError>> + Send;

    fn list_favorites(
        &self,
    ) -> impl Future<Output = Result<Vec<RecipeReference>, CoreError>> + Send;

    fn record_view(&self, recipe: Recipe) -> impl Future<Output = Result<bool, CoreError>> + Send;

    fn list_history(&self) -> impl Future<Output = Result<Vec<Recipe>, CoreError>> + Send;

    fn clear_history(&self) -> impl Future<Output = Result<(), CoreError>> + Send;
}
