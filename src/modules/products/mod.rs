pub mod models;
pub mod service;

pub use models::{ProductCategoryRequest, ProductRequest};
pub use service::ProductService;
