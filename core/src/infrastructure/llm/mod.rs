pub mod fake_client;
pub mod gemini_client;

pub use fake_client::FakeLLMClient;
pub use gemini_client::GeminiLLMClient;

use crate::domain::{common::entities::app_errors::CoreError, recipe::ports::LLMClient};

/// Client selected at startup from configuration.
#[derive(Debug)]
pub enum LLMClientBackend {
    Gemini(GeminiLLMClient),
    Fake(FakeLLMClient),
}

impl LLMClient for LLMClientBackend {
    async fn generate_with_text(
        &self,
        prompt: String,
        response_schema: serde_json::Value,
    ) -> Result<String, CoreError> {
        match self {
            LLMClientBackend::Gemini(client) => {
                client.generate_with_text(prompt, response_schema).await
            }
            LLMClientBackend::Fake(client) => {
                client.generate_with_text(prompt, response_schema).await
            }
        }
    }
}
