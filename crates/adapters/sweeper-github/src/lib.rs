pub mod client;
pub mod config;
pub mod error;
pub mod link;

pub use client::GitHubClient;
pub use config::{DEFAULT_API_URL, GitHubClientConfig};
pub use error::GitHubError;
