use std::future::Future;

use crate::domain::common::entities::app_errors::CoreError;

/// Port for the client-scoped key-value store backing every persisted collection.
///
/// Implementations load their contents when created and make every `set`
/// durable before returning.
pub trait KeyValueStore: Send + Sync {
    /// Returns the stored value, or `None` when the key was never written.
    fn get(
        &self,
        key: &str,
    ) -> impl Future<Output = Result<Option<serde_json::Value>, CoreError>> + Send;

    fn set(
        &self,
        key: &str,
        value: serde_json::Value,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;
}
