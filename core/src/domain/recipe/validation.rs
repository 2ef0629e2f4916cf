use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::domain::common::generate_uuid_v7;

use super::{
    entities::{Recipe, RecipeIngredient},
    value_objects::FallbackReason,
};

pub const RECIPES_PER_SEARCH: usize = 3;
pub const MAX_STEPS: u64 = 6;
pub const MAX_HEALTH_BENEFITS: u64 = 3;
pub const MAX_DESCRIPTION_CHARS: u64 = 200;
pub const MAX_PREP_TIME_MINUTES: i64 = 24 * 60;

/// Recipe as the model sends it, before it is trusted.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RecipePayload {
    #[validate(custom(function = "not_blank"))]
    pub title: String,

    #[serde(default)]
    #[validate(length(max = MAX_DESCRIPTION_CHARS, message = "description is too long"))]
    pub description: String,

    #[validate(range(min = 1, max = MAX_PREP_TIME_MINUTES, message = "prepTime out of range"))]
    pub prep_time: i64,

    #[validate(length(min = 1, message = "at least one ingredient is required"), nested)]
    pub ingredients: Vec<RecipeIngredientPayload>,

    #[validate(length(min = 1, max = MAX_STEPS, message = "between 1 and 6 steps are required"))]
    pub steps: Vec<String>,

    #[serde(default)]
    pub dietary_info: Vec<String>,

    #[serde(default)]
    #[validate(length(max = MAX_HEALTH_BENEFITS, message = "at most 3 health benefits"))]
    pub health_benefits: Vec<String>,

    #[serde(default = "default_ai_generated", rename = "isAIGenerated")]
    pub is_ai_generated: bool,

    #[serde(default)]
    pub image_prompt: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RecipeIngredientPayload {
    #[validate(custom(function = "not_blank"))]
    pub name: String,

    #[serde(default)]
    pub quantity: String,
}

fn default_ai_generated() -> bool {
    true
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("blank");
        error.message = Some("must not be blank".into());
        return Err(error);
    }
    Ok(())
}

impl RecipePayload {
    /// Only call on a payload that passed validation.
    fn into_recipe(self) -> Recipe {
        Recipe {
            id: generate_uuid_v7(),
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
            prep_time: self.prep_time.clamp(1, MAX_PREP_TIME_MINUTES) as u32,
            ingredients: self
                .ingredients
                .into_iter()
                .map(|ingredient| RecipeIngredient {
                    name: ingredient.name.trim().to_string(),
                    quantity: ingredient.quantity.trim().to_string(),
                })
                .collect(),
            steps: self.steps,
            dietary_info: self.dietary_info,
            health_benefits: self.health_benefits,
            is_ai_generated: self.is_ai_generated,
            image_prompt: self.image_prompt,
        }
    }
}

/// Decodes a raw model body into recipe payloads.
///
/// Accepts a bare array (what the prompt asks for) or an object wrapping the
/// array under `recipes`, optionally inside a markdown code fence.
pub fn decode_recipes(raw: &str) -> Result<Vec<RecipePayload>, FallbackReason> {
    let body = strip_code_fence(raw);

    let parsed: serde_json::Value = serde_json::from_str(body).map_err(|e| {
        tracing::error!("Failed to parse LLM response: {}", e);
        FallbackReason::Decode(format!("invalid JSON: {}", e))
    })?;

    let array = match parsed {
        serde_json::Value::Array(_) => parsed,
        serde_json::Value::Object(mut object) => object
            .remove("recipes")
            .filter(serde_json::Value::is_array)
            .ok_or_else(|| {
                FallbackReason::Decode("expected an array of recipes".to_string())
            })?,
        _ => {
            return Err(FallbackReason::Decode(
                "expected an array of recipes".to_string(),
            ));
        }
    };

    serde_json::from_value(array).map_err(|e| {
        tracing::error!("Invalid recipes format: {}", e);
        FallbackReason::Decode(format!("invalid recipes format: {}", e))
    })
}

/// Field, range and cardinality checks over a decoded batch.
pub fn validate_recipes(payloads: Vec<RecipePayload>) -> Result<Vec<Recipe>, FallbackReason> {
    let mut problems = Vec::new();

    if payloads.len() != RECIPES_PER_SEARCH {
        problems.push(format!(
            "expected {} recipes, got {}",
            RECIPES_PER_SEARCH,
            payloads.len()
        ));
    }

    for (index, payload) in payloads.iter().enumerate() {
        if let Err(errors) = payload.validate() {
            problems.push(format!("recipe {}: {}", index, errors));
        }
    }

    if !problems.is_empty() {
        return Err(FallbackReason::Validation(problems));
    }

    Ok(payloads.into_iter().map(RecipePayload::into_recipe).collect())
}

fn strip_code_fence(raw: &str) -> &str {
    let trimmed = raw.trim();

    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };

    let rest = rest.trim_end();
    let rest = rest.strip_suffix("```").unwrap_or(rest);

    // drop the info string ("json") on the opening line
    match rest.split_once('\n') {
        Some((_, body)) => body.trim(),
        None => rest.trim_start_matches(|c: char| c.is_ascii_alphabetic()).trim(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn payload_json(title: &str, prep_time: i64, steps: usize) -> serde_json::Value {
        json!({
            "title": title,
            "description": "Rápido y ligero",
            "prepTime": prep_time,
            "ingredients": [{ "name": "Tofu", "quantity": "200g" }],
            "steps": (0..steps).map(|i| format!("Paso {}", i + 1)).collect::<Vec<_>>(),
            "dietaryInfo": ["Vegano"],
            "healthBenefits": ["Proteína vegetal"],
            "isAIGenerated": true,
            "imagePrompt": "tofu bowl"
        })
    }

    fn batch(items: Vec<serde_json::Value>) -> String {
        serde_json::Value::Array(items).to_string()
    }

    #[test]
    fn test_decode_and_validate_happy_path() {
        let raw = batch(vec![
            payload_json("Tofu salteado", 15, 4),
            payload_json("Curry de tofu", 30, 6),
            payload_json("Tofu al horno", 35, 5),
        ]);

        let recipes = validate_recipes(decode_recipes(&raw).unwrap()).unwrap();

        assert_eq!(recipes.len(), 3);
        assert_eq!(recipes[1].title, "Curry de tofu");
        assert_eq!(recipes[1].prep_time, 30);
        assert_ne!(recipes[0].id, recipes[1].id);
    }

    #[test]
    fn test_decode_accepts_code_fence_and_wrapper_object() {
        let fenced = format!(
            "```json\n{}\n```",
            json!({ "recipes": [payload_json("Tofu salteado", 15, 2)] })
        );

        let payloads = decode_recipes(&fenced).unwrap();
        assert_eq!(payloads.len(), 1);
        assert_eq!(payloads[0].title, "Tofu salteado");
    }

    #[test]
    fn test_decode_rejects_malformed_and_wrong_shape() {
        assert!(matches!(
            decode_recipes("not json at all"),
            Err(FallbackReason::Decode(_))
        ));
        assert!(matches!(
            decode_recipes(r#"{"dishes": []}"#),
            Err(FallbackReason::Decode(_))
        ));
        assert!(matches!(
            decode_recipes(r#"[{"title": "sin pasos"}]"#),
            Err(FallbackReason::Decode(_))
        ));
    }

    #[test]
    fn test_validation_catches_field_violations() {
        let raw = batch(vec![
            payload_json("Tofu salteado", 0, 4),
            payload_json("  ", 30, 7),
            payload_json("Tofu al horno", 35, 5),
        ]);

        let Err(FallbackReason::Validation(problems)) =
            validate_recipes(decode_recipes(&raw).unwrap())
        else {
            panic!("expected validation failure");
        };

        assert_eq!(problems.len(), 2);
        assert!(problems[0].starts_with("recipe 0"));
        assert!(problems[1].starts_with("recipe 1"));
    }

    #[test]
    fn test_validation_requires_exactly_three_recipes() {
        let raw = batch(vec![
            payload_json("Tofu salteado", 15, 4),
            payload_json("Curry de tofu", 30, 6),
        ]);

        let result = validate_recipes(decode_recipes(&raw).unwrap());
        assert_eq!(
            result,
            Err(FallbackReason::Validation(vec![
                "expected 3 recipes, got 2".to_string()
            ]))
        );
    }

    fn single(payload: serde_json::Value) -> Vec<String> {
        let raw = batch(vec![
            payload,
            payload_json("Curry de tofu", 30, 6),
            payload_json("Tofu al horno", 35, 5),
        ]);

        match validate_recipes(decode_recipes(&raw).unwrap()) {
            Ok(_) => Vec::new(),
            Err(FallbackReason::Validation(problems)) => problems,
            Err(other) => panic!("unexpected failure: {other}"),
        }
    }

    #[test]
    fn test_description_limit_counts_characters() {
        let mut at_limit = payload_json("Tofu salteado", 15, 4);
        at_limit["description"] = json!("é".repeat(200));
        assert!(single(at_limit).is_empty());

        let mut over_limit = payload_json("Tofu salteado", 15, 4);
        over_limit["description"] = json!("é".repeat(201));
        let problems = single(over_limit);
        assert_eq!(problems.len(), 1);
        assert!(problems[0].contains("description is too long"));
    }

    #[test]
    fn test_at_most_three_health_benefits() {
        let mut payload = payload_json("Tofu salteado", 15, 4);
        payload["healthBenefits"] = json!(["Hierro", "Calcio", "Proteína", "Fibra"]);

        let problems = single(payload);
        assert_eq!(problems.len(), 1);
        assert!(problems[0].contains("at most 3 health benefits"));
    }

    #[test]
    fn test_ingredients_must_be_present_and_named() {
        let mut empty = payload_json("Tofu salteado", 15, 4);
        empty["ingredients"] = json!([]);
        let problems = single(empty);
        assert_eq!(problems.len(), 1);
        assert!(problems[0].contains("at least one ingredient is required"));

        let mut blank_name = payload_json("Tofu salteado", 15, 4);
        blank_name["ingredients"] = json!([{ "name": "  ", "quantity": "1 taza" }]);
        assert_eq!(single(blank_name).len(), 1);
    }

    #[test]
    fn test_decode_accepts_single_line_fence() {
        assert!(decode_recipes("```[]```").unwrap().is_empty());
        assert!(decode_recipes("```json[]```").unwrap().is_empty());

        let fenced = format!("```json {}```", batch(vec![payload_json("Tofu salteado", 15, 2)]));
        assert_eq!(decode_recipes(&fenced).unwrap()[0].title, "Tofu salteado");
    }
}
