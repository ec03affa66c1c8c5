use serde_json::Value;
use tracing::{info, warn};

use crate::client::ApiClient;
use crate::core::traits::VariableStore;
use crate::core::{EntityKind, Result};
use crate::fixtures::FixtureCache;

use super::models::{status_update_body, PurchaseOrderRequest};

pub struct PurchaseOrderService<'a, S: VariableStore> {
    api: &'a ApiClient,
    cache: &'a mut FixtureCache<S>,
}

impl<'a, S: VariableStore> PurchaseOrderService<'a, S> {
    pub fn new(api: &'a ApiClient, cache: &'a mut FixtureCache<S>) -> Self {
        Self { api, cache }
    }

    pub async fn create(&mut self, name: &str, request: &PurchaseOrderRequest) -> Result<Value> {
        let api = self.api;
        self.cache
            .get_or_create(EntityKind::PurchaseOrder, name, || {
                api.create(EntityKind::PurchaseOrder, request)
            })
            .await
    }

    pub async fn get(&self, order_id: &str) -> Result<Option<Value>> {
        self.api.lookup(EntityKind::PurchaseOrder, order_id).await
    }

    /// Move an order to `status`, returning the updated order.
    ///
    /// Missing id or status is a no-op (`None`). The cached creation payload
    /// is left untouched.
    pub async fn update_status(&self, order_id: &str, status: &str) -> Result<Option<Value>> {
        if order_id.is_empty() {
            warn!("No purchase order ID provided for update");
            return Ok(None);
        }
        if status.is_empty() {
            warn!(id = %order_id, "No status provided for purchase order update");
            return Ok(None);
        }

        let current = self.api.fetch(EntityKind::PurchaseOrder, order_id).await?;
        let body = status_update_body(&current, status)?;
        let updated = self
            .api
            .update(EntityKind::PurchaseOrder, order_id, &body)
            .await?;

        info!(id = %order_id, status = %status, "Purchase order status updated");
        Ok(Some(updated))
    }

    pub async fn delete(&mut self, order_id: &str) -> Result<()> {
        let api = self.api;
        self.cache
            .delete(EntityKind::PurchaseOrder, order_id, |id| async move {
                api.delete(EntityKind::PurchaseOrder, &id).await
            })
            .await
    }
}
