use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::common::generate_timestamp;

/// Closed set of pantry categories. Declaration order is display order.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    ToSchema,
)]
pub enum IngredientCategory {
    #[serde(rename = "Proteínas")]
    Proteins,
    #[serde(rename = "Vegetales")]
    Vegetables,
    #[serde(rename = "Frutas")]
    Fruits,
    #[serde(rename = "Granos")]
    Grains,
    #[serde(rename = "Lácteos")]
    Dairy,
    #[serde(rename = "Especias")]
    Spices,
    #[default]
    #[serde(rename = "Otros")]
    Other,
}

impl IngredientCategory {
    pub const ALL: [IngredientCategory; 7] = [
        IngredientCategory::Proteins,
        IngredientCategory::Vegetables,
        IngredientCategory::Fruits,
        IngredientCategory::Grains,
        IngredientCategory::Dairy,
        IngredientCategory::Spices,
        IngredientCategory::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            IngredientCategory::Proteins => "Proteínas",
            IngredientCategory::Vegetables => "Vegetales",
            IngredientCategory::Fruits => "Frutas",
            IngredientCategory::Grains => "Granos",
            IngredientCategory::Dairy => "Lácteos",
            IngredientCategory::Spices => "Especias",
            IngredientCategory::Other => "Otros",
        }
    }
}

impl fmt::Display for IngredientCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Ingredient {
    pub id: Uuid,
    pub name: String,
    pub category: IngredientCategory,
    #[serde(default = "Utc::now")]
    pub added_at: DateTime<Utc>,
}

impl Ingredient {
    pub fn new(name: String, category: IngredientCategory) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            name,
            category,
            added_at: now,
        }
    }
}

/// Starter ingredients offered for one-click adding.
pub const SUGGESTED_INGREDIENTS: [(&str, IngredientCategory); 18] = [
    ("Pollo", IngredientCategory::Proteins),
    ("Salmón", IngredientCategory::Proteins),
    ("Tofu", IngredientCategory::Proteins),
    ("Huevos", IngredientCategory::Proteins),
    ("Quinoa", IngredientCategory::Grains),
    ("Arroz integral", IngredientCategory::Grains),
    ("Avena", IngredientCategory::Grains),
    ("Espinaca", IngredientCategory::Vegetables),
    ("Brócoli", IngredientCategory::Vegetables),
    ("Zanahorias", IngredientCategory::Vegetables),
    ("Aguacate", IngredientCategory::Fruits),
    ("Manzana", IngredientCategory::Fruits),
    ("Plátano", IngredientCategory::Fruits),
    ("Yogur griego", IngredientCategory::Dairy),
    ("Queso cottage", IngredientCategory::Dairy),
    ("Cúrcuma", IngredientCategory::Spices),
    ("Jengibre", IngredientCategory::Spices),
    ("Ajo", IngredientCategory::Spices),
];
