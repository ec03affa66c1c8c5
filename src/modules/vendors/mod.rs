pub mod models;
pub mod service;

pub use models::VendorRequest;
pub use service::VendorService;
