pub mod api;
pub mod classify;
pub mod config;
pub mod error;
pub mod notification;
pub mod sweeper;

pub use api::{ApiError, NotificationApi, NotificationQuery};
pub use config::{ConfigError, SweeperConfig};
pub use error::SweepError;
pub use notification::{Notification, NotificationPage, PullRequest, PullRequestState};
pub use sweeper::{CycleStats, Sweeper};
