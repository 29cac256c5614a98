use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::notification::{NotificationPage, PullRequest};

/// Error type returned by [`NotificationApi`] implementations.
pub type ApiError = Box<dyn std::error::Error + Send + Sync>;

/// Parameters for one notifications feed request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotificationQuery {
    /// Only notifications updated after this instant. `None` means no lower bound.
    pub since: Option<DateTime<Utc>>,
    pub page: u32,
    pub per_page: u32,
    /// Include notifications already marked read.
    pub all: bool,
}

/// The slice of the code-hosting API the sweeper depends on.
///
/// Authentication and transport belong to the implementation.
#[async_trait]
pub trait NotificationApi: Send + Sync {
    async fn list_notifications(
        &self,
        query: &NotificationQuery,
    ) -> Result<NotificationPage, ApiError>;

    async fn get_pull_request(
        &self,
        owner: &str,
        repo: &str,
        number: u64,
    ) -> Result<PullRequest, ApiError>;

    /// Mark a notification thread as read, returning the HTTP status code.
    async fn mark_thread_read(&self, thread_id: &str) -> Result<u16, ApiError>;
}
