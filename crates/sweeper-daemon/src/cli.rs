use clap::Parser;
use thiserror::Error;

use sweeper_core::config::{ConfigError, DEFAULT_INTERVAL_MINUTES, SweeperConfig};
use sweeper_github::{DEFAULT_API_URL, GitHubClientConfig};

pub const VERSION: &str = concat!("v", env!("CARGO_PKG_VERSION"));

#[derive(Parser, Debug)]
#[command(name = "sweeper")]
#[command(about = "Marks notifications for pull requests closed without merging as read")]
#[command(disable_version_flag = true)]
pub struct Cli {
    /// Minutes to wait between checking for notifications (at least 1)
    #[arg(long, default_value_t = DEFAULT_INTERVAL_MINUTES)]
    pub interval: u64,

    /// GitHub API token
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Base url of the GitHub REST API
    #[arg(long, default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// Show version
    #[arg(short = 'v')]
    pub version: bool,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CliError {
    #[error("Please provide api token")]
    MissingToken,
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Validated runtime settings.
#[derive(Debug)]
pub struct Settings {
    pub sweeper: SweeperConfig,
    pub github: GitHubClientConfig,
}

impl Cli {
    pub fn into_settings(self) -> Result<Settings, CliError> {
        let token = self
            .token
            .filter(|t| !t.is_empty())
            .ok_or(CliError::MissingToken)?;

        let sweeper = SweeperConfig {
            interval_minutes: self.interval,
            ..SweeperConfig::default()
        };
        sweeper.validate()?;

        Ok(Settings {
            sweeper,
            github: GitHubClientConfig {
                token,
                api_url: self.api_url,
                ..GitHubClientConfig::default()
            },
        })
    }
}
