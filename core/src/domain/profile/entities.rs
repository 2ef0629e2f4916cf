use crate::domain::recipe::entities::{Recipe, RecipeReference};

/// Most-recently-viewed recipes kept in history.
pub const HISTORY_LIMIT: usize = 20;

/// Flips membership of `reference`; returns whether it is now a favorite.
pub fn toggle_favorite_in(favorites: &mut Vec<RecipeReference>, reference: RecipeReference) -> bool {
    if let Some(position) = favorites
        .iter()
        .position(|favorite| favorite.is_same_recipe(&reference))
    {
        favorites.remove(position);
        false
    } else {
        favorites.push(reference);
        true
    }
}

/// Puts `recipe` at the head unless it is already present anywhere, then
/// caps the list. Returns whether it was inserted.
pub fn record_view_in(history: &mut Vec<Recipe>, recipe: Recipe) -> bool {
    let reference = recipe.reference();
    if history.iter().any(|viewed| viewed.is_same_recipe(&reference)) {
        return false;
    }

    history.insert(0, recipe);
    history.truncate(HISTORY_LIMIT);
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::generate_uuid_v7;

    fn recipe(title: &str) -> Recipe {
        Recipe {
            id: generate_uuid_v7(),
            title: title.to_string(),
            description: String::new(),
            prep_time: 10,
            ingredients: vec![],
            steps: vec![],
            dietary_info: vec![],
            health_benefits: vec![],
            is_ai_generated: true,
            image_prompt: String::new(),
        }
    }

    #[test]
    fn test_toggle_favorite_flips_membership() {
        let mut favorites = Vec::new();
        let tortilla = recipe("Tortilla");

        assert!(toggle_favorite_in(&mut favorites, tortilla.reference()));
        assert_eq!(favorites.len(), 1);
        assert!(!toggle_favorite_in(&mut favorites, tortilla.reference()));
        assert!(favorites.is_empty());
    }

    #[test]
    fn test_toggle_matches_legacy_title_entries() {
        let mut favorites = vec![RecipeReference::from_title("Tortilla".to_string())];

        assert!(!toggle_favorite_in(&mut favorites, recipe("Tortilla").reference()));
        assert!(favorites.is_empty());
    }

    #[test]
    fn test_record_view_does_not_reorder_existing_entry() {
        let mut history = Vec::new();
        let first = recipe("Gazpacho");
        let second = recipe("Paella");

        assert!(record_view_in(&mut history, first.clone()));
        assert!(record_view_in(&mut history, second.clone()));
        assert!(!record_view_in(&mut history, first.clone()));

        assert_eq!(history, vec![second, first]);
    }

    #[test]
    fn test_history_is_capped() {
        let mut history = Vec::new();
        for index in 0..(HISTORY_LIMIT + 5) {
            record_view_in(&mut history, recipe(&format!("Receta {index}")));
            assert!(history.len() <= HISTORY_LIMIT);
        }

        assert_eq!(history.len(), HISTORY_LIMIT);
        assert_eq!(history[0].title, format!("Receta {}", HISTORY_LIMIT + 4));
        assert_eq!(history[HISTORY_LIMIT - 1].title, "Receta 5");
    }
}
