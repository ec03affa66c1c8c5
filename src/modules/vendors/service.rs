use serde_json::Value;

use crate::client::ApiClient;
use crate::core::traits::VariableStore;
use crate::core::{EntityKind, Result};
use crate::fixtures::FixtureCache;

use super::models::VendorRequest;

pub struct VendorService<'a, S: VariableStore> {
    api: &'a ApiClient,
    cache: &'a mut FixtureCache<S>,
}

impl<'a, S: VariableStore> VendorService<'a, S> {
    pub fn new(api: &'a ApiClient, cache: &'a mut FixtureCache<S>) -> Self {
        Self { api, cache }
    }

    pub async fn create(&mut self, request: &VendorRequest) -> Result<Value> {
        let api = self.api;
        self.cache
            .get_or_create(EntityKind::Vendor, &request.name, || {
                api.create(EntityKind::Vendor, request)
            })
            .await
    }

    /// Current backend state of a vendor (balance changes after payments)
    pub async fn get(&self, vendor_id: &str) -> Result<Option<Value>> {
        self.api.lookup(EntityKind::Vendor, vendor_id).await
    }

    pub async fn delete(&mut self, vendor_id: &str) -> Result<()> {
        let api = self.api;
        self.cache
            .delete(EntityKind::Vendor, vendor_id, |id| async move {
                api.delete(EntityKind::Vendor, &id).await
            })
            .await
    }
}
