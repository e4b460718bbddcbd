pub mod error;
pub mod http_client;
pub mod models;

pub use error::PostClientError;
pub use http_client::PostClient;
pub use models::Post;
