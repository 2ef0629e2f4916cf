use std::sync::Arc;

use tokio::sync::Mutex;

use crate::domain::{
    pantry::ports::PantryRepository, profile::ports::ProfileRepository,
    recipe::ports::LLMClient,
};

/// Application service wiring every domain port together.
///
/// The domain service traits (`PantryService`, `RecipeService`,
/// `ProfileService`) are implemented on this type in their own modules.
pub struct Service<PA, PF, LLM>
where
    PA: PantryRepository,
    PF: ProfileRepository,
    LLM: LLMClient,
{
    pub(crate) pantry_repository: Arc<PA>,
    pub(crate) profile_repository: Arc<PF>,
    pub(crate) llm_client: Arc<LLM>,
    /// Serializes read-modify-write cycles on persisted collections.
    pub(crate) write_lock: Arc<Mutex<()>>,
}

impl<PA, PF, LLM> Service<PA, PF, LLM>
where
    PA: PantryRepository,
    PF: ProfileRepository,
    LLM: LLMClient,
{
    pub fn new(pantry_repository: PA, profile_repository: PF, llm_client: LLM) -> Self {
        Self {
            pantry_repository: Arc::new(pantry_repository),
            profile_repository: Arc::new(profile_repository),
            llm_client: Arc::new(llm_client),
            write_lock: Arc::new(Mutex::new(())),
        }
    }
}

impl<PA, PF, LLM> Clone for Service<PA, PF, LLM>
where
    PA: PantryRepository,
    PF: ProfileRepository,
    LLM: LLMClient,
{
    fn clone(&self) -> Self {
        Self {
            pantry_repository: Arc::clone(&self.pantry_repository),
            profile_repository: Arc::clone(&self.profile_repository),
            llm_client: Arc::clone(&self.llm_client),
            write_lock: Arc::clone(&self.write_lock),
        }
    }
}
