pub mod models;
pub mod service;

pub use models::{LoginRequest, RegisterRequest, TokenResponse};
pub use service::{AuthService, TOKEN_KEY};
