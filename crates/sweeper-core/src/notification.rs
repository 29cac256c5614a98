use serde::{Deserialize, Serialize};

/// Subject type the upstream API uses for pull-request notifications.
pub const PULL_REQUEST_SUBJECT: &str = "PullRequest";

/// A notification thread as returned by the notifications feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub id: String,
    pub subject: Subject,
    pub repository: Repository,
}

impl Notification {
    pub fn is_pull_request(&self) -> bool {
        self.subject.kind == PULL_REQUEST_SUBJECT
    }
}

/// What the notification is about.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    pub title: String,
    /// API url of the subject. Absent for some subject types.
    #[serde(default)]
    pub url: Option<String>,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repository {
    pub name: String,
    pub owner: Owner,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Owner {
    pub login: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PullRequestState {
    Open,
    Closed,
}

/// The subset of a pull request the sweeper inspects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PullRequest {
    pub number: u64,
    pub state: PullRequestState,
    #[serde(default)]
    pub merged: bool,
}

impl PullRequest {
    /// Closed without being merged.
    pub fn is_abandoned(&self) -> bool {
        self.state == PullRequestState::Closed && !self.merged
    }
}

/// One page of the notifications feed plus its pagination cursor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotificationPage {
    pub items: Vec<Notification>,
    /// The page index that was requested.
    pub current_page: u32,
    /// `None` when the feed reports no further page.
    pub next_page: Option<u32>,
    /// `None` when the feed did not report a last page.
    pub last_page: Option<u32>,
}

impl NotificationPage {
    /// Page index to request next, or `None` once the feed is exhausted.
    pub fn following_page(&self) -> Option<u32> {
        if self.last_page == Some(self.current_page) {
            return None;
        }
        self.next_page.filter(|&p| p != 0)
    }
}
