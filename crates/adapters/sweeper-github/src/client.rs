use async_trait::async_trait;
use chrono::SecondsFormat;
use reqwest::header::{ACCEPT, AUTHORIZATION, LINK};
use reqwest::{Method, RequestBuilder, Response};

use sweeper_core::api::{ApiError, NotificationApi, NotificationQuery};
use sweeper_core::notification::{Notification, NotificationPage, PullRequest};

use crate::config::GitHubClientConfig;
use crate::error::GitHubError;
use crate::link::parse_link_header;

/// GitHub REST client for the notifications and pull request endpoints.
pub struct GitHubClient {
    config: GitHubClientConfig,
    client: reqwest::Client,
}

impl GitHubClient {
    pub fn new(config: GitHubClientConfig) -> Result<Self, GitHubError> {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .build()?;
        Ok(Self { config, client })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.config.api_url.trim_end_matches('/'))
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.client
            .request(method, self.url(path))
            .header(AUTHORIZATION, format!("Bearer {}", self.config.token))
            .header(ACCEPT, "application/vnd.github+json")
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response, GitHubError> {
        let resp = request.send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(GitHubError::Status {
                status,
                url: resp.url().to_string(),
            });
        }
        Ok(resp)
    }

    pub async fn fetch_notifications(
        &self,
        query: &NotificationQuery,
    ) -> Result<NotificationPage, GitHubError> {
        let mut params = vec![
            ("all", query.all.to_string()),
            ("page", query.page.to_string()),
            ("per_page", query.per_page.to_string()),
        ];
        if let Some(since) = query.since {
            params.push(("since", since.to_rfc3339_opts(SecondsFormat::Secs, true)));
        }

        let resp = self
            .send(self.request(Method::GET, "/notifications").query(&params))
            .await?;

        let links = resp
            .headers()
            .get(LINK)
            .and_then(|v| v.to_str().ok())
            .map(parse_link_header)
            .unwrap_or_default();
        let items: Vec<Notification> = resp.json().await?;

        tracing::debug!(
            page = query.page,
            count = items.len(),
            next = ?links.next,
            last = ?links.last,
            "Fetched notifications page"
        );

        Ok(NotificationPage {
            items,
            current_page: query.page,
            next_page: links.next,
            last_page: links.last,
        })
    }

    pub async fn fetch_pull_request(
        &self,
        owner: &str,
        repo: &str,
        number: u64,
    ) -> Result<PullRequest, GitHubError> {
        let path = format!("/repos/{owner}/{repo}/pulls/{number}");
        let resp = self.send(self.request(Method::GET, &path)).await?;
        Ok(resp.json().await?)
    }

    /// `PATCH /notifications/threads/{id}`. GitHub answers 205 Reset Content.
    pub async fn mark_read(&self, thread_id: &str) -> Result<u16, GitHubError> {
        let path = format!("/notifications/threads/{thread_id}");
        let resp = self.send(self.request(Method::PATCH, &path)).await?;
        Ok(resp.status().as_u16())
    }
}

#[async_trait]
impl NotificationApi for GitHubClient {
    async fn list_notifications(
        &self,
        query: &NotificationQuery,
    ) -> Result<NotificationPage, ApiError> {
        Ok(self.fetch_notifications(query).await?)
    }

    async fn get_pull_request(
        &self,
        owner: &str,
        repo: &str,
        number: u64,
    ) -> Result<PullRequest, ApiError> {
        Ok(self.fetch_pull_request(owner, repo, number).await?)
    }

    async fn mark_thread_read(&self, thread_id: &str) -> Result<u16, ApiError> {
        Ok(self.mark_read(thread_id).await?)
    }
}
