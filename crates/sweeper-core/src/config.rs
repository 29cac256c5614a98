use std::time::Duration;

use thiserror::Error;

/// Notifications requested per page.
pub const DEFAULT_PER_PAGE: u32 = 20;

/// Minutes between polling cycles.
pub const DEFAULT_INTERVAL_MINUTES: u64 = 60;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("interval must be > 0 minutes")]
    ZeroInterval,
    #[error("per_page must be between 1 and 100, got {0}")]
    PerPage(u32),
}

/// Poll loop configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SweeperConfig {
    pub interval_minutes: u64,
    pub per_page: u32,
}

impl Default for SweeperConfig {
    fn default() -> Self {
        Self {
            interval_minutes: DEFAULT_INTERVAL_MINUTES,
            per_page: DEFAULT_PER_PAGE,
        }
    }
}

impl SweeperConfig {
    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_minutes.saturating_mul(60))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.interval_minutes == 0 {
            return Err(ConfigError::ZeroInterval);
        }
        // Upper bound imposed by the notifications endpoint
        if self.per_page == 0 || self.per_page > 100 {
            return Err(ConfigError::PerPage(self.per_page));
        }
        Ok(())
    }
}
