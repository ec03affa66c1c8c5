use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Body of `POST products/categories`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductCategoryRequest {
    pub name: String,
    pub description: String,
}

impl Default for ProductCategoryRequest {
    fn default() -> Self {
        Self {
            name: "Test Category".to_string(),
            description: "A test category".to_string(),
        }
    }
}

/// Body of `POST products`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRequest {
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub stock: i32,
    pub is_active: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<String>,
}

impl Default for ProductRequest {
    fn default() -> Self {
        Self {
            name: "Test Product".to_string(),
            description: "A test product".to_string(),
            price: Decimal::ZERO,
            stock: 0,
            is_active: true,
            category_id: None,
        }
    }
}

impl ProductRequest {
    fn preset(name: &str, price: Decimal, stock: i32, category_id: &str) -> Self {
        Self {
            name: name.to_string(),
            price,
            stock,
            category_id: Some(category_id.to_string()),
            ..Default::default()
        }
    }

    pub fn expensive(category_id: &str) -> Self {
        Self::preset("Premium Product", Decimal::new(99_999, 2), 10, category_id)
    }

    pub fn cheap(category_id: &str) -> Self {
        Self::preset("Budget Product", Decimal::new(999, 2), 100, category_id)
    }

    pub fn out_of_stock(category_id: &str) -> Self {
        Self::preset("Out of Stock Product", Decimal::new(4_999, 2), 0, category_id)
    }

    pub fn inactive(self) -> Self {
        Self {
            is_active: false,
            ..self
        }
    }
}
