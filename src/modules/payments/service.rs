use serde_json::Value;

use crate::client::ApiClient;
use crate::core::{EntityKind, Result};

use super::models::VendorPaymentRequest;

/// Vendor payments, uncached for the same reason as stock receipts
pub struct PaymentService<'a> {
    api: &'a ApiClient,
}

impl<'a> PaymentService<'a> {
    pub fn new(api: &'a ApiClient) -> Self {
        Self { api }
    }

    pub async fn create(&self, request: &VendorPaymentRequest) -> Result<Value> {
        self.api.create(EntityKind::VendorPayment, request).await
    }

    pub async fn get(&self, payment_id: &str) -> Result<Option<Value>> {
        self.api.lookup(EntityKind::VendorPayment, payment_id).await
    }
}
