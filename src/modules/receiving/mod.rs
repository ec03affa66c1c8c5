pub mod models;
pub mod service;

pub use models::{StockReceiptItemRequest, StockReceiptRequest};
pub use service::ReceivingService;
