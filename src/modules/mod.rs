pub mod auth;
pub mod customers;
pub mod inventory;
pub mod payments;
pub mod products;
pub mod purchases;
pub mod receiving;
pub mod vendors;
