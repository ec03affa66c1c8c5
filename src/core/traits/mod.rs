pub mod http_client;
pub mod variable_store;

pub use http_client::{HttpClient, HttpRequest, HttpResponse};
pub use variable_store::{MemoryStore, VariableStore};
