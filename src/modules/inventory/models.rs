use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Body of `POST inventory/batches`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductBatchRequest {
    pub product_id: String,
    pub cost_price: Decimal,
    pub selling_price: Decimal,
    pub quantity_available: i32,
    pub purchased_at: DateTime<Utc>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,
}

impl ProductBatchRequest {
    pub fn new(product_id: impl Into<String>) -> Self {
        Self {
            product_id: product_id.into(),
            cost_price: Decimal::new(1000, 2),
            selling_price: Decimal::new(1500, 2),
            quantity_available: 1,
            purchased_at: Utc::now(),
            expires_at: None,
        }
    }
}
