use serde::{Deserialize, Serialize};

/// Body of `POST vendors`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VendorRequest {
    pub name: String,
    pub contact_person: String,
    pub phone: String,
    pub email: String,
    pub address: String,
}

impl Default for VendorRequest {
    fn default() -> Self {
        Self {
            name: "Test Vendor".to_string(),
            contact_person: "Test Contact".to_string(),
            phone: "0000000000".to_string(),
            email: "vendor@example.com".to_string(),
            address: "1 Test Street".to_string(),
        }
    }
}
