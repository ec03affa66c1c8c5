use serde_json::Value;

use crate::client::ApiClient;
use crate::core::traits::VariableStore;
use crate::core::{EntityKind, Result};
use crate::fixtures::FixtureCache;

use super::models::CustomerRequest;

pub struct CustomerService<'a, S: VariableStore> {
    api: &'a ApiClient,
    cache: &'a mut FixtureCache<S>,
}

impl<'a, S: VariableStore> CustomerService<'a, S> {
    pub fn new(api: &'a ApiClient, cache: &'a mut FixtureCache<S>) -> Self {
        Self { api, cache }
    }

    /// Create the customer, or return the one already cached under its name
    pub async fn create(&mut self, request: &CustomerRequest) -> Result<Value> {
        let api = self.api;
        self.cache
            .get_or_create(EntityKind::Customer, &request.name, || {
                api.create(EntityKind::Customer, request)
            })
            .await
    }

    pub async fn delete(&mut self, customer_id: &str) -> Result<()> {
        let api = self.api;
        self.cache
            .delete(EntityKind::Customer, customer_id, |id| async move {
                api.delete(EntityKind::Customer, &id).await
            })
            .await
    }
}
