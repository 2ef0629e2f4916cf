use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{
    entities::{DietaryPreference, MealType, Recipe},
    sort::{SortMode, sort_recipes},
};

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SearchFilters {
    #[serde(default)]
    pub meal_type: Option<MealType>,
    #[serde(default)]
    pub ingredient_query: String,
    #[serde(default)]
    pub dietary_preferences: Vec<DietaryPreference>,
}

impl SearchFilters {
    /// A search needs a meal type or a non-blank main ingredient.
    pub fn is_searchable(&self) -> bool {
        self.meal_type.is_some() || !self.ingredient_query.trim().is_empty()
    }

    /// Flips membership of `preference`; returns whether it is now selected.
    pub fn toggle_dietary_preference(&mut self, preference: DietaryPreference) -> bool {
        if let Some(position) = self
            .dietary_preferences
            .iter()
            .position(|selected| *selected == preference)
        {
            self.dietary_preferences.remove(position);
            false
        } else {
            self.dietary_preferences.push(preference);
            true
        }
    }

    /// Set semantics: duplicates collapse, insertion order is kept.
    pub fn with_dietary_preferences(
        mut self,
        preferences: impl IntoIterator<Item = DietaryPreference>,
    ) -> Self {
        for preference in preferences {
            if !self.dietary_preferences.contains(&preference) {
                self.dietary_preferences.push(preference);
            }
        }
        self
    }
}

// Dietary preferences are a set: selection order only matters for prompt rendering.
impl PartialEq for SearchFilters {
    fn eq(&self, other: &Self) -> bool {
        self.meal_type == other.meal_type
            && self.ingredient_query == other.ingredient_query
            && self
                .dietary_preferences
                .iter()
                .all(|preference| other.dietary_preferences.contains(preference))
            && other
                .dietary_preferences
                .iter()
                .all(|preference| self.dietary_preferences.contains(preference))
    }
}

impl Eq for SearchFilters {}

#[derive(Debug, Clone)]
pub struct SearchRecipesInput {
    pub filters: SearchFilters,
    pub sort: SortMode,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(tag = "kind", content = "detail", rename_all = "snake_case")]
pub enum FallbackReason {
    /// The model call itself failed (transport, auth, empty candidate list).
    Invocation(String),
    /// The body did not decode into an array of recipes.
    Decode(String),
    /// The body decoded but the recipes broke field rules.
    Validation(Vec<String>),
}

impl fmt::Display for FallbackReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FallbackReason::Invocation(message) => write!(f, "model invocation failed: {message}"),
            FallbackReason::Decode(message) => write!(f, "model response undecodable: {message}"),
            FallbackReason::Validation(problems) => {
                write!(f, "model response invalid: {}", problems.join("; "))
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum RecipeSource {
    Model,
    Fallback,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    ModelSucceeded {
        recipes: Vec<Recipe>,
    },
    FallbackUsed {
        recipes: Vec<Recipe>,
        reason: FallbackReason,
    },
}

impl SearchOutcome {
    pub fn recipes(&self) -> &[Recipe] {
        match self {
            SearchOutcome::ModelSucceeded { recipes } => recipes,
            SearchOutcome::FallbackUsed { recipes, .. } => recipes,
        }
    }

    pub fn into_recipes(self) -> Vec<Recipe> {
        match self {
            SearchOutcome::ModelSucceeded { recipes } => recipes,
            SearchOutcome::FallbackUsed { recipes, .. } => recipes,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, SearchOutcome::FallbackUsed { .. })
    }

    pub fn source(&self) -> RecipeSource {
        match self {
            SearchOutcome::ModelSucceeded { .. } => RecipeSource::Model,
            SearchOutcome::FallbackUsed { .. } => RecipeSource::Fallback,
        }
    }

    pub fn fallback_reason(&self) -> Option<&FallbackReason> {
        match self {
            SearchOutcome::ModelSucceeded { .. } => None,
            SearchOutcome::FallbackUsed { reason, .. } => Some(reason),
        }
    }

    pub fn sorted(self, mode: SortMode) -> Self {
        match self {
            SearchOutcome::ModelSucceeded { recipes } => SearchOutcome::ModelSucceeded {
                recipes: sort_recipes(recipes, mode),
            },
            SearchOutcome::FallbackUsed { recipes, reason } => SearchOutcome::FallbackUsed {
                recipes: sort_recipes(recipes, mode),
                reason,
            },
        }
    }
}
