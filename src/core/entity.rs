use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

/// Backend resource a fixture payload belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Customer,
    ProductCategory,
    Product,
    ProductBatch,
    Vendor,
    PurchaseOrder,
    StockReceipt,
    VendorPayment,
}

impl EntityKind {
    /// Collection path below `/api/{version}/`
    pub fn resource_path(&self) -> &'static str {
        match self {
            EntityKind::Customer => "customers",
            EntityKind::ProductCategory => "products/categories",
            EntityKind::Product => "products",
            EntityKind::ProductBatch => "inventory/batches",
            EntityKind::Vendor => "vendors",
            EntityKind::PurchaseOrder => "purchase-orders",
            EntityKind::StockReceipt => "stock-receipts",
            EntityKind::VendorPayment => "vendor-payments",
        }
    }

    /// Path of a single entity
    pub fn item_path(&self, id: &str) -> String {
        format!("{}/{}", self.resource_path(), id)
    }

    /// Human label used in operation names ("create product category")
    pub fn label(&self) -> &'static str {
        match self {
            EntityKind::Customer => "customer",
            EntityKind::ProductCategory => "product category",
            EntityKind::Product => "product",
            EntityKind::ProductBatch => "product batch",
            EntityKind::Vendor => "vendor",
            EntityKind::PurchaseOrder => "purchase order",
            EntityKind::StockReceipt => "stock receipt",
            EntityKind::VendorPayment => "vendor payment",
        }
    }

    /// Receipts and payments have no delete route on the backend
    pub fn is_deletable(&self) -> bool {
        !matches!(self, EntityKind::StockReceipt | EntityKind::VendorPayment)
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Extract the `id` of an entity payload. Numeric ids are rendered as strings.
pub fn entity_id(payload: &Value) -> Option<String> {
    match payload.get("id")? {
        Value::String(id) if !id.is_empty() => Some(id.clone()),
        Value::Number(id) => Some(id.to_string()),
        _ => None,
    }
}

/// True for hyphenated UUIDs such as the ids the backend assigns
pub fn is_valid_uuid(value: &str) -> bool {
    value.len() == 36 && Uuid::parse_str(value).is_ok()
}
