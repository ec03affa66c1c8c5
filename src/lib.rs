//! Stockroom fixture toolkit
//!
//! API integration-test helpers for the inventory backend: session bootstrap,
//! request models for every resource and a run-scoped fixture cache that
//! creates named entities once and tears them down in reverse order.

pub mod client;
pub mod config;
pub mod core;
pub mod fixtures;
pub mod modules;

// Re-export commonly used types
pub use client::{ApiClient, ReqwestHttpClient};
pub use config::{ApiConfig, Config, TestIdentity};
pub use core::{EntityKind, FixtureError, Result};
pub use fixtures::{FixtureCache, FixtureContext};
