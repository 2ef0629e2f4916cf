use tracing::{info, warn};

use crate::{
    domain::common::{
        DespensaConfig, LLMConfig, LLMProvider, StorageConfig, entities::app_errors::CoreError,
        services::Service,
    },
    infrastructure::{
        llm::{FakeLLMClient, GeminiLLMClient, LLMClientBackend},
        pantry::KvPantryRepository,
        profile::KvProfileRepository,
        storage::{InMemoryKeyValueStore, JsonFileKeyValueStore, KeyValueStoreBackend},
    },
};

pub type DespensaService = Service<
    KvPantryRepository<KeyValueStoreBackend>,
    KvProfileRepository<KeyValueStoreBackend>,
    LLMClientBackend,
>;

pub async fn create_service(config: DespensaConfig) -> Result<DespensaService, CoreError> {
    let store = create_store(&config.storage).await?;
    let llm_client = create_llm_client(&config.llm)?;

    Ok(Service::new(
        KvPantryRepository::new(store.clone()),
        KvProfileRepository::new(store),
        llm_client,
    ))
}

async fn create_store(config: &StorageConfig) -> Result<KeyValueStoreBackend, CoreError> {
    match config {
        StorageConfig::Memory => {
            info!("using in-memory storage");
            Ok(KeyValueStoreBackend::Memory(InMemoryKeyValueStore::new()))
        }
        StorageConfig::JsonFile { path } => {
            let store = JsonFileKeyValueStore::open(path).await?;
            Ok(KeyValueStoreBackend::JsonFile(store))
        }
    }
}

fn create_llm_client(config: &LLMConfig) -> Result<LLMClientBackend, CoreError> {
    match (&config.provider, &config.gemini_api_key) {
        (LLMProvider::Fake, _) => {
            info!("using fake LLM client");
            Ok(LLMClientBackend::Fake(FakeLLMClient::default()))
        }
        (LLMProvider::Gemini, Some(api_key)) if !api_key.trim().is_empty() => {
            info!(model = %config.gemini_model, "using Gemini LLM client");
            let client = GeminiLLMClient::new(
                api_key.clone(),
                config.gemini_model.clone(),
                config.gemini_base_url.clone(),
                config.timeout,
            )?;
            Ok(LLMClientBackend::Gemini(client))
        }
        (LLMProvider::Gemini, _) => {
            // searches still answer, with the fallback recipes
            warn!("Gemini API key not configured, every search will use fallback recipes");
            Ok(LLMClientBackend::Fake(FakeLLMClient::unavailable(
                "Gemini API key not configured",
            )))
        }
    }
}
