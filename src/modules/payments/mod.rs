pub mod models;
pub mod service;

pub use models::{PaymentMethod, VendorPaymentRequest};
pub use service::PaymentService;
