use serde_json::json;

use super::validation::{MAX_HEALTH_BENEFITS, MAX_STEPS, RECIPES_PER_SEARCH};

/// Returns the JSON schema for recipe search LLM responses
pub fn get_recipe_schema() -> serde_json::Value {
    json!({
        "type": "array",
        "minItems": RECIPES_PER_SEARCH,
        "maxItems": RECIPES_PER_SEARCH,
        "items": {
            "type": "object",
            "properties": {
                "title": { "type": "string" },
                "description": { "type": "string" },
                "prepTime": { "type": "integer" },
                "ingredients": {
                    "type": "array",
                    "items": {
                        "type": "object",
                        "properties": {
                            "name": { "type": "string" },
                            "quantity": { "type": "string" }
                        },
                        "required": ["name", "quantity"]
                    }
                },
                "steps": {
                    "type": "array",
                    "maxItems": MAX_STEPS,
                    "items": { "type": "string" }
                },
                "dietaryInfo": {
                    "type": "array",
                    "items": { "type": "string" }
                },
                "healthBenefits": {
                    "type": "array",
                    "maxItems": MAX_HEALTH_BENEFITS,
                    "items": { "type": "string" }
                },
                "isAIGenerated": { "type": "boolean" },
                "imagePrompt": { "type": "string" }
            },
            "required": [
                "title", "description", "prepTime", "ingredients", "steps",
                "dietaryInfo", "healthBenefits", "isAIGenerated", "imagePrompt"
            ]
        }
    })
}
