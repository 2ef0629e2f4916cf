pub mod add_suggestion;
pub mod create_ingredient;
pub mod delete_ingredient;
pub mod get_grouped_ingredients;
pub mod get_ingredients;
pub mod get_suggestions;
