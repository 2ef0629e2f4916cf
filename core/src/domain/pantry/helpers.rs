use super::{
    entities::{Ingredient, IngredientCategory, SUGGESTED_INGREDIENTS},
    value_objects::{IngredientGroup, IngredientSuggestion},
};

/// Case-insensitive substring match on the ingredient name. A blank search
/// keeps everything.
pub fn filter_by_name(ingredients: &[Ingredient], search: Option<&str>) -> Vec<Ingredient> {
    let needle = search.map(str::trim).unwrap_or_default().to_lowercase();

    ingredients
        .iter()
        .filter(|ingredient| needle.is_empty() || ingredient.name.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

/// Stable partition by category, in category display order. Empty groups are
/// dropped.
pub fn group_by_category(ingredients: &[Ingredient]) -> Vec<IngredientGroup> {
    IngredientCategory::ALL
        .into_iter()
        .filter_map(|category| {
            let members: Vec<Ingredient> = ingredients
                .iter()
                .filter(|ingredient| ingredient.category == category)
                .cloned()
                .collect();

            (!members.is_empty()).then_some(IngredientGroup {
                category,
                ingredients: members,
            })
        })
        .collect()
}

/// Suggestions whose name is not already in the pantry (case-insensitive).
pub fn available_suggestions(pantry: &[Ingredient]) -> Vec<IngredientSuggestion> {
    let owned: Vec<String> = pantry
        .iter()
        .map(|ingredient| ingredient.name.to_lowercase())
        .collect();

    SUGGESTED_INGREDIENTS
        .iter()
        .filter(|(name, _)| !owned.contains(&name.to_lowercase()))
        .map(|(name, category)| IngredientSuggestion {
            name: (*name).to_string(),
            category: *category,
        })
        .collect()
}

pub fn find_suggestion(name: &str) -> Option<IngredientSuggestion> {
    let wanted = name.trim().to_lowercase();

    SUGGESTED_INGREDIENTS
        .iter()
        .find(|(candidate, _)| candidate.to_lowercase() == wanted)
        .map(|(candidate, category)| IngredientSuggestion {
            name: (*candidate).to_string(),
            category: *category,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ingredient(name: &str, category: IngredientCategory) -> Ingredient {
        Ingredient::new(name.to_string(), category)
    }

    #[test]
    fn test_filter_by_name_is_case_insensitive() {
        let pantry = vec![
            ingredient("Pollo", IngredientCategory::Proteins),
            ingredient("Arroz integral", IngredientCategory::Grains),
            ingredient("Polenta", IngredientCategory::Grains),
        ];

        let found = filter_by_name(&pantry, Some("POL"));
        let names: Vec<&str> = found.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Pollo", "Polenta"]);

        assert_eq!(filter_by_name(&pantry, Some("  pol ")).len(), 2);
        assert_eq!(filter_by_name(&pantry, Some("   ")).len(), 3);
        assert_eq!(filter_by_name(&pantry, None).len(), 3);
        assert!(filter_by_name(&pantry, Some("tofu")).is_empty());
    }

    #[test]
    fn test_group_by_category_keeps_insertion_order() {
        let pantry = vec![
            ingredient("Avena", IngredientCategory::Grains),
            ingredient("Tofu", IngredientCategory::Proteins),
            ingredient("Quinoa", IngredientCategory::Grains),
            ingredient("Huevos", IngredientCategory::Proteins),
        ];

        let groups = group_by_category(&pantry);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].category, IngredientCategory::Proteins);
        assert_eq!(groups[1].category, IngredientCategory::Grains);

        let grains: Vec<&str> = groups[1].ingredients.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(grains, vec!["Avena", "Quinoa"]);
    }

    #[test]
    fn test_suggestions_exclude_owned_names() {
        let pantry = vec![
            ingredient("pollo", IngredientCategory::Other),
            ingredient("AJO", IngredientCategory::Spices),
        ];

        let suggestions = available_suggestions(&pantry);
        assert_eq!(suggestions.len(), SUGGESTED_INGREDIENTS.len() - 2);
        assert!(suggestions.iter().all(|s| s.name != "Pollo" && s.name != "Ajo"));
    }

    #[test]
    fn test_find_suggestion() {
        let found = find_suggestion("  yogur GRIEGO ").expect("suggestion should exist");
        assert_eq!(found.name, "Yogur griego");
        assert_eq!(found.category, IngredientCategory::Dairy);
        assert!(find_suggestion("caviar").is_none());
    }
}
