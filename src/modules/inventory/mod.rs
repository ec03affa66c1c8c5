pub mod models;
pub mod service;

pub use models::ProductBatchRequest;
pub use service::InventoryService;
