/// Public GitHub REST endpoint.
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Configuration for the GitHub REST client.
#[derive(Debug, Clone)]
pub struct GitHubClientConfig {
    /// Personal access token sent as a bearer credential.
    pub token: String,
    /// Base url of the REST API, without a trailing slash.
    pub api_url: String,
    pub user_agent: String,
}

impl Default for GitHubClientConfig {
    fn default() -> Self {
        Self {
            token: String::new(),
            api_url: DEFAULT_API_URL.to_string(),
            user_agent: concat!("sweeper/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}
