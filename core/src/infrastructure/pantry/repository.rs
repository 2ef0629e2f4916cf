use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        pantry::{entities::Ingredient, ports::PantryRepository},
        storage::{keys, ports::KeyValueStore},
    },
    infrastructure::storage::mappers::{decode_or_default, encode},
};

#[derive(Debug, Clone)]
pub struct KvPantryRepository<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> KvPantryRepository<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }
}

impl<S: KeyValueStore> PantryRepository for KvPantryRepository<S> {
    async fn fetch_ingredients(&self) -> Result<Vec<Ingredient>, CoreError> {
        let value = self.store.get(keys::PANTRY).await?;

        Ok(decode_or_default(keys::PANTRY, value))
    }

    async fn save_ingredients(&self, ingredients: Vec<Ingredient>) -> Result<(), CoreError> {
        let value = encode(keys::PANTRY, &ingredients)?;

        self.store.set(keys::PANTRY, value).await
    }
}
