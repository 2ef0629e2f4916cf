use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use unicode_normalization::{UnicodeNormalization, char::is_combining_mark};
use utoipa::ToSchema;

use super::entities::Recipe;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum SortMode {
    /// Order returned by the search pipeline.
    #[default]
    #[serde(rename = "relevance")]
    Relevance,
    #[serde(rename = "time-asc")]
    TimeAscending,
    #[serde(rename = "time-desc")]
    TimeDescending,
    #[serde(rename = "title")]
    Title,
}

impl SortMode {
    pub const ALL: [SortMode; 4] = [
        SortMode::Relevance,
        SortMode::TimeAscending,
        SortMode::TimeDescending,
        SortMode::Title,
    ];
}

/// Stable, pure reordering. Relevance leaves the input untouched.
pub fn sort_recipes(mut recipes: Vec<Recipe>, mode: SortMode) -> Vec<Recipe> {
    match mode {
        SortMode::Relevance => {}
        SortMode::TimeAscending => recipes.sort_by_key(|recipe| recipe.prep_time),
        SortMode::TimeDescending => {
            recipes.sort_by(|a, b| b.prep_time.cmp(&a.prep_time));
        }
        SortMode::Title => recipes.sort_by(|a, b| compare_titles(&a.title, &b.title)),
    }

    recipes
}

/// Accent and case fold first so "Ñoquis" sorts beside "Nachos" rather than
/// after "Zanahoria", raw text breaks ties.
pub fn compare_titles(left: &str, right: &str) -> Ordering {
    collation_key(left)
        .cmp(&collation_key(right))
        .then_with(|| left.cmp(right))
}

fn collation_key(title: &str) -> String {
    title
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::generate_uuid_v7;

    fn recipe(title: &str, prep_time: u32) -> Recipe {
        Recipe {
            id: generate_uuid_v7(),
            title: title.to_string(),
            description: String::new(),
            prep_time,
            ingredients: vec![],
            steps: vec![],
            dietary_info: vec![],
            health_benefits: vec![],
            is_ai_generated: true,
            image_prompt: String::new(),
        }
    }

    fn titles(recipes: &[Recipe]) -> Vec<&str> {
        recipes.iter().map(|r| r.title.as_str()).collect()
    }

    fn sample() -> Vec<Recipe> {
        vec![
            recipe("Salmón al horno", 25),
            recipe("ensalada tibia", 15),
            recipe("Ñoquis de batata", 40),
            recipe("Avena nocturna", 5),
            recipe("Nachos caseros", 30),
        ]
    }

    #[test]
    fn test_relevance_keeps_pipeline_order() {
        let sorted = sort_recipes(sample(), SortMode::Relevance);
        assert_eq!(titles(&sorted), titles(&sample()));
    }

    #[test]
    fn test_time_orders() {
        let input = sample();

        let ascending = sort_recipes(input.clone(), SortMode::TimeAscending);
        let times: Vec<u32> = ascending.iter().map(|r| r.prep_time).collect();
        assert_eq!(times, vec![5, 15, 25, 30, 40]);

        let mut reversed = ascending.clone();
        reversed.reverse();
        assert_eq!(reversed, sort_recipes(input, SortMode::TimeDescending));
    }

    #[test]
    fn test_title_order_ignores_case_and_accents() {
        let sorted = sort_recipes(sample(), SortMode::Title);
        assert_eq!(
            titles(&sorted),
            vec![
                "Avena nocturna",
                "ensalada tibia",
                "Nachos caseros",
                "Ñoquis de batata",
                "Salmón al horno",
            ]
        );
    }

    #[test]
    fn test_sort_is_idempotent_for_every_mode() {
        let mut input = sample();
        input.push(recipe("Avena nocturna", 12));
        input.push(recipe("Tostadas", 15));

        for mode in SortMode::ALL {
            let once = sort_recipes(input.clone(), mode);
            let twice = sort_recipes(once.clone(), mode);
            assert_eq!(once, twice, "mode {mode:?} is not idempotent");
        }
    }

    #[test]
    fn test_sort_mode_wire_names() {
        assert_eq!(
            serde_json::to_value(SortMode::TimeAscending).unwrap(),
            serde_json::json!("time-asc")
        );
        let parsed: SortMode = serde_json::from_value(serde_json::json!("title")).unwrap();
        assert_eq!(parsed, SortMode::Title);
    }
}
