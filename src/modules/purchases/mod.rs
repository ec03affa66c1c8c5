pub mod models;
pub mod service;

pub use models::{PurchaseOrderItemRequest, PurchaseOrderRequest, PurchaseOrderStatus};
pub use service::PurchaseOrderService;
