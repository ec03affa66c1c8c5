// Test Helper Modules
//
// Shared infrastructure for unit, contract and integration tests.
// Integration and contract tests talk to a wiremock backend over real HTTP;
// unit tests use the scripted in-process client.
//
// Usage (from a test target):
//   #[path = "../helpers/mod.rs"]
//   mod helpers;
//   use helpers::*;
#![allow(dead_code)]

pub mod mock_backend;
pub mod scripted_client;

// Re-export commonly used types and functions
pub use assertions::*;
pub use mock_backend::*;
pub use scripted_client::*;
pub use test_data::*;
