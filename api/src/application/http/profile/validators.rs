use despensa_core::domain::recipe::entities::{Recipe, RecipeReference};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::{Validate, ValidationError};

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct RecipeReferenceValidator {
    pub recipe_id: Uuid,

    #[validate(length(min = 1, message = "title is required"))]
    pub title: String,
}

impl From<RecipeReferenceValidator> for RecipeReference {
    fn from(value: RecipeReferenceValidator) -> Self {
        RecipeReference {
            recipe_id: value.recipe_id,
            title: value.title,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct RecordViewValidator {
    #[validate(custom(function = "validate_viewed_recipe"))]
    pub recipe: Recipe,
}

fn validate_viewed_recipe(recipe: &Recipe) -> Result<(), ValidationError> {
    if recipe.title.trim().is_empty() {
        let mut error = ValidationError::new("blank_title");
        error.message = Some("recipe title is required".into());
        return Err(error);
    }

    Ok(())
}
