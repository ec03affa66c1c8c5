use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Body of `POST stock-receipts`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockReceiptRequest {
    pub purchase_order_id: String,
    pub received_date: DateTime<Utc>,
    pub notes: String,
    pub items: Vec<StockReceiptItemRequest>,
}

impl StockReceiptRequest {
    pub fn new(purchase_order_id: impl Into<String>, items: Vec<StockReceiptItemRequest>) -> Self {
        Self {
            purchase_order_id: purchase_order_id.into(),
            received_date: Utc::now(),
            notes: String::new(),
            items,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockReceiptItemRequest {
    pub purchase_order_item_id: String,
    pub quantity_received: i32,
}
