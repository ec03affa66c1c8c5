use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    Cash,
    BankTransfer,
    Cheque,
    Upi,
}

/// Body of `POST vendor-payments`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VendorPaymentRequest {
    pub vendor_id: String,
    pub amount: Decimal,
    pub payment_date: DateTime<Utc>,
    pub payment_method: PaymentMethod,
    pub reference: String,
    pub notes: String,
}

impl VendorPaymentRequest {
    pub fn new(vendor_id: impl Into<String>, amount: Decimal) -> Self {
        Self {
            vendor_id: vendor_id.into(),
            amount,
            payment_date: Utc::now(),
            payment_method: PaymentMethod::BankTransfer,
            reference: String::new(),
            notes: String::new(),
        }
    }
}
