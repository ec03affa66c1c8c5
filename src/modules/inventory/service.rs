use serde_json::Value;

use crate::client::ApiClient;
use crate::core::traits::VariableStore;
use crate::core::{EntityKind, Result};
use crate::fixtures::FixtureCache;

use super::models::ProductBatchRequest;

pub struct InventoryService<'a, S: VariableStore> {
    api: &'a ApiClient,
    cache: &'a mut FixtureCache<S>,
}

impl<'a, S: VariableStore> InventoryService<'a, S> {
    pub fn new(api: &'a ApiClient, cache: &'a mut FixtureCache<S>) -> Self {
        Self { api, cache }
    }

    /// Batches carry no name of their own, so the fixture name is explicit
    pub async fn create_batch(&mut self, name: &str, request: &ProductBatchRequest) -> Result<Value> {
        let api = self.api;
        self.cache
            .get_or_create(EntityKind::ProductBatch, name, || {
                api.create(EntityKind::ProductBatch, request)
            })
            .await
    }

    pub async fn delete_batch(&mut self, batch_id: &str) -> Result<()> {
        let api = self.api;
        self.cache
            .delete(EntityKind::ProductBatch, batch_id, |id| async move {
                api.delete(EntityKind::ProductBatch, &id).await
            })
            .await
    }
}
