use thiserror::Error;

use crate::api::ApiError;

/// Every way a polling cycle can fail. None of them are retried.
#[derive(Debug, Error)]
pub enum SweepError {
    #[error("failed to list notifications (page {page}): {source}")]
    Fetch {
        page: u32,
        #[source]
        source: ApiError,
    },

    #[error("invalid pull request number in {url:?}: {reason}")]
    PullNumber { url: String, reason: String },

    #[error("failed to get pull request {owner}/{repo}#{number}: {source}")]
    PullRequest {
        owner: String,
        repo: String,
        number: u64,
        #[source]
        source: ApiError,
    },

    #[error("failed to mark notification {thread_id} as read: {source}")]
    MarkRead {
        thread_id: String,
        #[source]
        source: ApiError,
    },
}

impl SweepError {
    /// Process exit status for this failure.
    ///
    /// A failed notification listing exits 1; failures further down the
    /// cycle exit 2.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Fetch { .. } => 1,
            Self::PullNumber { .. } | Self::PullRequest { .. } | Self::MarkRead { .. } => 2,
        }
    }
}
