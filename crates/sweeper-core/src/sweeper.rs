use chrono::{DateTime, Utc};

use crate::api::{NotificationApi, NotificationQuery};
use crate::classify;
use crate::config::SweeperConfig;
use crate::error::SweepError;
use crate::notification::Notification;

/// Counters for a single polling cycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CycleStats {
    pub pages: u32,
    pub notifications: usize,
    pub pull_requests: usize,
    pub marked_read: usize,
}

/// Polls the notifications feed and marks threads for pull requests that
/// were closed without merging as read.
pub struct Sweeper<A> {
    api: A,
    config: SweeperConfig,
    /// Start of the window for the next cycle. Only advanced after a
    /// cycle completes without error.
    last_checked: Option<DateTime<Utc>>,
}

impl<A: NotificationApi> Sweeper<A> {
    pub fn new(api: A, config: SweeperConfig) -> Self {
        Self {
            api,
            config,
            last_checked: None,
        }
    }

    pub fn last_checked(&self) -> Option<DateTime<Utc>> {
        self.last_checked
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// Alternate between polling and sleeping until a cycle fails.
    ///
    /// Never returns on success; the returned error is the one that
    /// stopped the loop.
    pub async fn run(&mut self) -> SweepError {
        let interval = self.config.interval();
        loop {
            if let Err(e) = self.run_cycle().await {
                return e;
            }

            tracing::info!("Sleeping for {} minutes", self.config.interval_minutes);
            tokio::time::sleep(interval).await;
        }
    }

    /// Walk every page of notifications since the last checkpoint, then
    /// advance the checkpoint to now.
    pub async fn run_cycle(&mut self) -> Result<CycleStats, SweepError> {
        tracing::info!("Processing notifications");

        let stats = self.process_notifications().await?;
        self.last_checked = Some(Utc::now());

        tracing::debug!(
            pages = stats.pages,
            notifications = stats.notifications,
            pull_requests = stats.pull_requests,
            marked_read = stats.marked_read,
            "Cycle complete"
        );
        Ok(stats)
    }

    async fn process_notifications(&self) -> Result<CycleStats, SweepError> {
        let mut stats = CycleStats::default();
        let mut page = 1;

        loop {
            let query = NotificationQuery {
                since: self.last_checked,
                page,
                per_page: self.config.per_page,
                all: true,
            };
            let batch = self
                .api
                .list_notifications(&query)
                .await
                .map_err(|source| SweepError::Fetch { page, source })?;
            stats.pages += 1;

            for notification in &batch.items {
                stats.notifications += 1;
                tracing::info!("Processing: {}", notification.subject.title);

                if !notification.is_pull_request() {
                    continue;
                }
                stats.pull_requests += 1;
                if self.check_pull_request(notification).await? {
                    stats.marked_read += 1;
                }
            }

            match batch.following_page() {
                Some(next) => page = next,
                None => return Ok(stats),
            }
        }
    }

    /// Returns true when the notification was marked read.
    async fn check_pull_request(&self, notification: &Notification) -> Result<bool, SweepError> {
        let number = classify::pull_number(notification)?;
        let owner = &notification.repository.owner.login;
        let repo = &notification.repository.name;

        let pr = self
            .api
            .get_pull_request(owner, repo, number)
            .await
            .map_err(|source| SweepError::PullRequest {
                owner: owner.clone(),
                repo: repo.clone(),
                number,
                source,
            })?;

        if !pr.is_abandoned() {
            return Ok(false);
        }

        tracing::info!("==> Found unmerged PR, marking notification as read");
        let status = self
            .api
            .mark_thread_read(&notification.id)
            .await
            .map_err(|source| SweepError::MarkRead {
                thread_id: notification.id.clone(),
                source,
            })?;
        tracing::info!("==> Response code {status}");

        Ok(true)
    }
}
