use serde_json::Value;

use crate::client::ApiClient;
use crate::core::{EntityKind, Result};

use super::models::StockReceiptRequest;

/// Stock receipts are never cached: each call records a new receipt, and
/// the backend offers no way to delete one.
pub struct ReceivingService<'a> {
    api: &'a ApiClient,
}

impl<'a> ReceivingService<'a> {
    pub fn new(api: &'a ApiClient) -> Self {
        Self { api }
    }

    pub async fn create(&self, request: &StockReceiptRequest) -> Result<Value> {
        self.api.create(EntityKind::StockReceipt, request).await
    }

    pub async fn get(&self, receipt_id: &str) -> Result<Option<Value>> {
        self.api.lookup(EntityKind::StockReceipt, receipt_id).await
    }
}
