pub mod search_recipes;
