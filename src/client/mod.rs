pub mod api_client;
pub mod reqwest_client;

pub use api_client::ApiClient;
pub use reqwest_client::ReqwestHttpClient;
