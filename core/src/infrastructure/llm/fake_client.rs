//! Deterministic LLM client for demos and tests.
//!
//! Serves a fixed body (or a fixed failure) without touching the network.

use std::sync::atomic::{AtomicUsize, Ordering};

use serde_json::json;

use crate::domain::{common::entities::app_errors::CoreError, recipe::ports::LLMClient};

#[derive(Debug)]
pub struct FakeLLMClient {
    response: Result<String, String>,
    calls: AtomicUsize,
}

impl Default for FakeLLMClient {
    /// Answers every prompt with three valid demo recipes.
    fn default() -> Self {
        Self::with_response(&demo_response())
    }
}

impl FakeLLMClient {
    pub fn with_response(response: &str) -> Self {
        Self {
            response: Ok(response.to_string()),
            calls: AtomicUsize::new(0),
        }
    }

    /// Fails every call, as an unreachable or unconfigured model would.
    pub fn unavailable(reason: &str) -> Self {
        Self {
            response: Err(reason.to_string()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl LLMClient for FakeLLMClient {
    async fn generate_with_text(
        &self,
        _prompt: String,
        _response_schema: serde_json::Value,
    ) -> Result<String, CoreError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        self.response
            .clone()
            .map_err(CoreError::ExternalServiceError)
    }
}

fn demo_response() -> String {
    json!([
        {
            "title": "Tortilla de Espinaca y Queso Cottage",
            "description": "Desayuno alto en proteína listo en minutos",
            "prepTime": 12,
            "ingredients": [
                { "name": "Huevos", "quantity": "3 unidades" },
                { "name": "Espinaca", "quantity": "1 taza" },
                { "name": "Queso cottage", "quantity": "1/4 taza" }
            ],
            "steps": [
                "Batir los huevos con una pizca de sal",
                "Saltear la espinaca hasta que reduzca",
                "Verter los huevos y cocinar a fuego medio",
                "Agregar el queso cottage y doblar la tortilla"
            ],
            "dietaryInfo": ["Vegetariano", "Sin Gluten", "Alto en Proteína"],
            "healthBenefits": ["Proteína de alta calidad", "Rico en hierro"],
            "isAIGenerated": true,
            "imagePrompt": "Fluffy spinach omelette with cottage cheese on a rustic plate"
        },
        {
            "title": "Avena Nocturna con Plátano",
            "description": "Avena cremosa que se prepara la noche anterior",
            "prepTime": 5,
            "ingredients": [
                { "name": "Avena", "quantity": "1/2 taza" },
                { "name": "Yogur griego", "quantity": "1/2 taza" },
                { "name": "Plátano", "quantity": "1 unidad" }
            ],
            "steps": [
                "Mezclar la avena con el yogur en un frasco",
                "Agregar el plátano en rodajas",
                "Refrigerar durante la noche"
            ],
            "dietaryInfo": ["Vegetariano"],
            "healthBenefits": ["Fibra soluble", "Energía sostenida", "Probióticos"],
            "isAIGenerated": true,
            "imagePrompt": "Overnight oats jar with banana slices, morning light"
        },
        {
            "title": "Pollo con Cúrcuma y Arroz Integral",
            "description": "Plato completo con especias antiinflamatorias",
            "prepTime": 35,
            "ingredients": [
                { "name": "Pollo", "quantity": "200g" },
                { "name": "Cúrcuma", "quantity": "1 cucharadita" },
                { "name": "Arroz integral", "quantity": "1 taza" },
                { "name": "Ajo", "quantity": "2 dientes" }
            ],
            "steps": [
                "Cocinar el arroz integral",
                "Marinar el pollo con cúrcuma y ajo",
                "Dorar el pollo en una sartén",
                "Servir sobre el arroz"
            ],
            "dietaryInfo": ["Sin Gluten", "Alto en Proteína"],
            "healthBenefits": ["Antiinflamatorio natural", "Proteína magra"],
            "isAIGenerated": true,
            "imagePrompt": "Golden turmeric chicken over brown rice, overhead shot"
        }
    ])
    .to_string()
}
