use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Body of `POST customers`. `name` doubles as the fixture name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerRequest {
    pub name: String,
    pub email: String,
    pub mobile: String,
    pub balance: Decimal,
    pub active: bool,
}

impl Default for CustomerRequest {
    fn default() -> Self {
        Self {
            name: "Test Customer".to_string(),
            email: "test@example.com".to_string(),
            mobile: "0000000000".to_string(),
            balance: Decimal::ZERO,
            active: true,
        }
    }
}

impl CustomerRequest {
    pub fn premium() -> Self {
        Self {
            name: "Premium Customer".to_string(),
            email: "premium@example.com".to_string(),
            balance: Decimal::from(10_000),
            ..Default::default()
        }
    }

    pub fn with_balance(balance: Decimal) -> Self {
        Self {
            name: "Customer with Balance".to_string(),
            email: "balance@example.com".to_string(),
            balance,
            ..Default::default()
        }
    }

    pub fn new_customer() -> Self {
        Self {
            name: "New Customer".to_string(),
            email: "new@example.com".to_string(),
            ..Default::default()
        }
    }

    pub fn inactive(self) -> Self {
        Self {
            active: false,
            ..self
        }
    }
}
