use std::fmt;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::core::{FixtureError, Result};

/// Purchase order lifecycle states known to the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PurchaseOrderStatus {
    Draft,
    Ordered,
    Partial,
    Received,
    Cancelled,
}

impl PurchaseOrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PurchaseOrderStatus::Draft => "draft",
            PurchaseOrderStatus::Ordered => "ordered",
            PurchaseOrderStatus::Partial => "partial",
            PurchaseOrderStatus::Received => "received",
            PurchaseOrderStatus::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for PurchaseOrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Body of `POST purchase-orders`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseOrderRequest {
    pub vendor_id: String,
    pub order_date: DateTime<Utc>,
    pub notes: String,
    pub items: Vec<PurchaseOrderItemRequest>,
}

impl PurchaseOrderRequest {
    pub fn new(vendor_id: impl Into<String>, items: Vec<PurchaseOrderItemRequest>) -> Self {
        Self {
            vendor_id: vendor_id.into(),
            order_date: Utc::now(),
            notes: String::new(),
            items,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseOrderItemRequest {
    pub product_id: String,
    pub quantity_ordered: i32,
    pub cost_price: Decimal,
    pub selling_price: Decimal,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,
}

impl PurchaseOrderItemRequest {
    pub fn new(product_id: impl Into<String>, quantity_ordered: i32) -> Self {
        Self {
            product_id: product_id.into(),
            quantity_ordered,
            cost_price: Decimal::new(1000, 2),
            selling_price: Decimal::new(1500, 2),
            expires_at: None,
        }
    }
}

/// `PUT purchase-orders/{id}` body that re-sends `order` unchanged except
/// for its status.
///
/// The backend replaces the whole order on update, so vendor, date, notes
/// and every item (with its id) must be carried over from the current state.
pub fn status_update_body(order: &Value, status: &str) -> Result<Value> {
    let items = order
        .get("items")
        .and_then(Value::as_array)
        .ok_or_else(|| FixtureError::invalid_payload("purchase order has no items"))?;

    let items: Vec<Value> = items
        .iter()
        .map(|item| {
            json!({
                "id": item["id"],
                "productId": item["productId"],
                "quantityOrdered": item["quantityOrdered"],
                "costPrice": item["costPrice"],
                "sellingPrice": item["sellingPrice"],
                "expiresAt": item["expiresAt"],
            })
        })
        .collect();

    Ok(json!({
        "vendorId": order["vendorId"],
        "orderDate": order["orderDate"],
        "status": status,
        "notes": order["notes"],
        "items": items,
    }))
}
