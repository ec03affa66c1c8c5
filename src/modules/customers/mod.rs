pub mod models;
pub mod service;

pub use models::CustomerRequest;
pub use service::CustomerService;
