use super::entities::{Recipe, RecipeIngredient};

fn ingredients(items: &[(&str, &str)]) -> Vec<RecipeIngredient> {
    items
        .iter()
        .map(|(name, quantity)| RecipeIngredient {
            name: (*name).to_string(),
            quantity: (*quantity).to_string(),
        })
        .collect()
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| (*item).to_string()).collect()
}

#[allow(clippy::too_many_arguments)]
fn fallback_recipe(
    title: &str,
    description: &str,
    prep_time: u32,
    recipe_ingredients: &[(&str, &str)],
    steps: &[&str],
    dietary_info: &[&str],
    health_benefits: &[&str],
    image_prompt: &str,
) -> Recipe {
    Recipe {
        id: Recipe::title_derived_id(title),
        title: title.to_string(),
        description: description.to_string(),
        prep_time,
        ingredients: ingredients(recipe_ingredients),
        steps: strings(steps),
        dietary_info: strings(dietary_info),
        health_benefits: strings(health_benefits),
        is_ai_generated: true,
        image_prompt: image_prompt.to_string(),
    }
}

/// Demo recipes served whenever the model cannot be used.
///
/// Ids are title-derived so repeated fallbacks refer to the same recipes.
pub fn fallback_recipes() -> Vec<Recipe> {
    vec![
        fallback_recipe(
            "Bowl de Quinoa con Aguacate",
            "Nutritivo bowl lleno de proteínas y grasas saludables",
            20,
            &[
                ("Quinoa", "1 taza"),
                ("Aguacate", "1 unidad"),
                ("Espinaca", "2 tazas"),
                ("Tomates cherry", "1/2 taza"),
            ],
            &[
                "Cocinar la quinoa según las instrucciones del paquete",
                "Lavar y preparar las verduras",
                "Cortar el aguacate en cubos",
                "Mezclar todos los ingredientes en un bowl",
                "Aliñar con limón y aceite de oliva",
                "Servir inmediatamente",
            ],
            &["Vegano", "Sin Gluten", "Alto en Proteína"],
            &[
                "Rico en proteínas completas",
                "Alto contenido de fibra",
                "Grasas saludables",
            ],
            "Colorful quinoa bowl with avocado, spinach and cherry tomatoes, healthy food photography",
        ),
        fallback_recipe(
            "Salmón con Vegetales al Vapor",
            "Plato rico en omega-3 con vegetales frescos y coloridos",
            25,
            &[
                ("Filete de salmón", "150g"),
                ("Brócoli", "1 taza"),
                ("Zanahorias", "2 unidades"),
                ("Limón", "1/2 unidad"),
            ],
            &[
                "Precalentar el horno a 200°C",
                "Sazonar el salmón con limón y hierbas",
                "Cortar los vegetales en trozos uniformes",
                "Cocinar al vapor los vegetales por 10 minutos",
                "Hornear el salmón por 12-15 minutos",
                "Servir caliente con los vegetales",
            ],
            &["Alto en Proteína", "Keto", "Bajo en Carbohidratos"],
            &[
                "Rico en Omega-3",
                "Alto contenido proteico",
                "Antioxidantes naturales",
            ],
            "Grilled salmon with steamed colorful vegetables, healthy dinner plate, natural lighting",
        ),
        fallback_recipe(
            "Smoothie Verde Energético",
            "Bebida refrescante llena de vitaminas y minerales",
            5,
            &[
                ("Espinaca", "1 taza"),
                ("Plátano", "1 unidad"),
                ("Manzana verde", "1/2 unidad"),
                ("Jengibre", "1 cm"),
            ],
            &[
                "Lavar bien las hojas de espinaca",
                "Pelar el plátano y cortar en trozos",
                "Cortar la manzana en cubos",
                "Agregar todos los ingredientes a la licuadora",
                "Licuar hasta obtener consistencia suave",
                "Servir inmediatamente bien frío",
            ],
            &["Vegano", "Sin Gluten", "Bajo en Calorías"],
            &[
                "Alto en vitaminas",
                "Detox natural",
                "Energía instantánea",
            ],
            "Green smoothie in glass with fresh spinach, banana and apple, healthy drink photography",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_set_is_stable() {
        let first = fallback_recipes();
        let second = fallback_recipes();

        assert_eq!(first, second);
        assert_eq!(
            first.iter().map(|r| r.title.as_str()).collect::<Vec<_>>(),
            vec![
                "Bowl de Quinoa con Aguacate",
                "Salmón con Vegetales al Vapor",
                "Smoothie Verde Energético",
            ]
        );
    }
}
