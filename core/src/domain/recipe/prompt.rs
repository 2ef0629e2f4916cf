use crate::domain::pantry::entities::Ingredient;

use super::value_objects::SearchFilters;

const NO_DIETARY_PREFERENCES: &str = "Ninguna";
const EMPTY_PANTRY: &str = "No hay ingredientes específicos en la despensa";

/// Renders the recipe request sent to the model.
pub fn build_recipe_prompt(filters: &SearchFilters, pantry: &[Ingredient]) -> String {
    let meal_type = filters
        .meal_type
        .map(|meal_type| meal_type.label())
        .unwrap_or_default();

    let dietary = if filters.dietary_preferences.is_empty() {
        NO_DIETARY_PREFERENCES.to_string()
    } else {
        filters
            .dietary_preferences
            .iter()
            .map(|preference| preference.label())
            .collect::<Vec<_>>()
            .join(", ")
    };

    let pantry_list = if pantry.is_empty() {
        EMPTY_PANTRY.to_string()
    } else {
        pantry
            .iter()
            .map(|ingredient| ingredient.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    };

    format!(
        r#"Actúa como un experto nutricionista y chef. Tu tarea es generar exactamente 3 recetas saludables que cumplan con los siguientes criterios:

CRITERIOS DE BÚSQUEDA:
- Tipo de comida: {meal_type}
- Ingrediente principal/requerido: {ingredient}
- Preferencias dietéticas: {dietary}

INGREDIENTES DISPONIBLES EN LA DESPENSA:
{pantry_list}

INSTRUCCIONES ESPECÍFICAS:
1. Prioriza el uso de ingredientes de la despensa cuando sea posible
2. Cada receta debe ser saludable y equilibrada nutricionalmente
3. Incluye el ingrediente principal/requerido si se especificó
4. Respeta las preferencias dietéticas indicadas
5. Proporciona recetas variadas y atractivas

FORMATO DE RESPUESTA:
Devuelve EXACTAMENTE un array JSON con 3 objetos de recetas. Cada receta debe incluir:
- title: Nombre atractivo de la receta
- description: Descripción breve y apetitosa (máximo 100 caracteres)
- prepTime: Tiempo de preparación en minutos (número)
- ingredients: Array de objetos con "name" y "quantity"
- steps: Array de pasos de preparación (máximo 6 pasos)
- dietaryInfo: Array de información dietética (ej: ["Vegano", "Sin Gluten"])
- healthBenefits: Array de beneficios para la salud (máximo 3)
- isAIGenerated: siempre true
- imagePrompt: Descripción en inglés para generar imagen de la receta

Responde ÚNICAMENTE con el JSON válido, sin texto adicional."#,
        ingredient = filters.ingredient_query.trim(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        pantry::entities::IngredientCategory,
        recipe::entities::{DietaryPreference, MealType},
    };

    #[test]
    fn test_prompt_embeds_filters_and_pantry() {
        let filters = SearchFilters {
            meal_type: Some(MealType::Breakfast),
            ingredient_query: "  avena ".to_string(),
            dietary_preferences: vec![DietaryPreference::Vegan, DietaryPreference::GlutenFree],
        };
        let pantry = vec![
            Ingredient::new("Plátano".to_string(), IngredientCategory::Fruits),
            Ingredient::new("Canela".to_string(), IngredientCategory::Spices),
        ];

        let prompt = build_recipe_prompt(&filters, &pantry);

        assert!(prompt.contains("- Tipo de comida: Desayuno"));
        assert!(prompt.contains("- Ingrediente principal/requerido: avena\n"));
        assert!(prompt.contains("- Preferencias dietéticas: Vegano, Sin Gluten"));
        assert!(prompt.contains("Plátano, Canela"));
        assert!(prompt.contains("exactamente 3 recetas"));
    }

    #[test]
    fn test_prompt_uses_markers_when_empty() {
        let filters = SearchFilters {
            ingredient_query: "tofu".to_string(),
            ..Default::default()
        };

        let prompt = build_recipe_prompt(&filters, &[]);

        assert!(prompt.contains("- Tipo de comida: \n"));
        assert!(prompt.contains("- Preferencias dietéticas: Ninguna"));
        assert!(prompt.contains(EMPTY_PANTRY));
    }
}
