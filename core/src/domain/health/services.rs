use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    health::{entities::HealthStatus, ports::HealthCheckService},
    pantry::ports::PantryRepository,
    profile::ports::ProfileRepository,
    recipe::ports::LLMClient,
};

impl<PA, PF, LLM> HealthCheckService for Service<PA, PF, LLM>
where
    PA: PantryRepository,
    PF: ProfileRepository,
    LLM: LLMClient,
{
    async fn readness(&self) -> Result<HealthStatus, CoreError> {
        let pantry = self.pantry_repository.fetch_ingredients().await?;

        Ok(HealthStatus {
            storage_ready: true,
            pantry_size: pantry.len(),
        })
    }
}
