use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::Router;
use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, HeaderValue, Method, StatusCode, header};
use axum::response::{IntoResponse, Response};
use serde_json::{Value, json};

use sweeper_github::{GitHubClient, GitHubClientConfig};

pub const TEST_TOKEN: &str = "test-token";

/// A request the mock GitHub server received.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: Method,
    pub path: String,
    pub query: HashMap<String, String>,
    pub authorization: Option<String>,
    pub accept: Option<String>,
}

/// Canned responses for the mock GitHub server.
#[derive(Default)]
pub struct MockGitHub {
    /// Notification pages, numbered from 1.
    pub pages: Vec<Vec<Value>>,
    /// Pull requests keyed by `owner/repo#number`.
    pub pulls: HashMap<String, Value>,
    /// Status returned from every endpoint instead of the canned body.
    pub fail_status: Option<StatusCode>,
    recorded: Mutex<Vec<RecordedRequest>>,
}

impl MockGitHub {
    pub fn with_pages(mut self, pages: Vec<Vec<Value>>) -> Self {
        self.pages = pages;
        self
    }

    pub fn with_pull(mut self, owner: &str, repo: &str, number: u64, state: &str, merged: bool) -> Self {
        self.pulls.insert(
            format!("{owner}/{repo}#{number}"),
            json!({
                "number": number,
                "state": state,
                "merged": merged,
                "title": format!("PR {number}"),
            }),
        );
        self
    }

    pub fn failing(mut self, status: StatusCode) -> Self {
        self.fail_status = Some(status);
        self
    }

    fn record(&self, method: Method, path: String, query: HashMap<String, String>, headers: &HeaderMap) {
        let header_str = |name: header::HeaderName| {
            headers
                .get(name)
                .and_then(|v| v.to_str().ok())
                .map(String::from)
        };
        let req = RecordedRequest {
            method,
            path,
            query,
            authorization: header_str(header::AUTHORIZATION),
            accept: header_str(header::ACCEPT),
        };
        self.recorded.lock().unwrap().push(req);
    }
}

type SharedMock = Arc<MockGitHub>;

pub struct TestServer {
    pub addr: SocketAddr,
    pub mock: SharedMock,
    _shutdown: tokio::task::JoinHandle<()>,
}

impl TestServer {
    pub async fn start(mock: MockGitHub) -> Self {
        let mock = Arc::new(mock);
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let app = Router::new()
            .route("/notifications", axum::routing::get(list_notifications))
            .route(
                "/notifications/threads/{id}",
                axum::routing::patch(mark_thread_read),
            )
            .route(
                "/repos/{owner}/{repo}/pulls/{number}",
                axum::routing::get(get_pull_request),
            )
            .with_state(Arc::clone(&mock));

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        // Give the server a moment to start accepting
        tokio::time::sleep(Duration::from_millis(20)).await;

        Self {
            addr,
            mock,
            _shutdown: handle,
        }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn client(&self) -> GitHubClient {
        GitHubClient::new(GitHubClientConfig {
            token: TEST_TOKEN.to_string(),
            api_url: self.base_url(),
            ..GitHubClientConfig::default()
        })
        .unwrap()
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.mock.recorded.lock().unwrap().clone()
    }

    pub fn requests_to(&self, method: Method) -> Vec<RecordedRequest> {
        self.requests()
            .into_iter()
            .filter(|r| r.method == method)
            .collect()
    }
}

async fn list_notifications(
    State(mock): State<SharedMock>,
    headers: HeaderMap,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    mock.record(Method::GET, "/notifications".to_string(), params.clone(), &headers);
    if let Some(status) = mock.fail_status {
        return status.into_response();
    }

    let page: usize = params.get("page").and_then(|p| p.parse().ok()).unwrap_or(1);
    let total = mock.pages.len();
    let items = page
        .checked_sub(1)
        .and_then(|i| mock.pages.get(i))
        .cloned()
        .unwrap_or_default();

    let link_to = |p: usize, rel: &str| {
        format!("<https://api.github.com/notifications?all=true&page={p}&per_page=20>; rel=\"{rel}\"")
    };
    let mut links = Vec::new();
    if page > 1 {
        links.push(link_to(page - 1, "prev"));
        links.push(link_to(1, "first"));
    }
    if page < total {
        links.push(link_to(page + 1, "next"));
        links.push(link_to(total, "last"));
    }

    let mut resp = axum::Json(Value::Array(items)).into_response();
    if !links.is_empty() {
        resp.headers_mut()
            .insert(header::LINK, HeaderValue::from_str(&links.join(", ")).unwrap());
    }
    resp
}

async fn get_pull_request(
    State(mock): State<SharedMock>,
    headers: HeaderMap,
    Path((owner, repo, number)): Path<(String, String, u64)>,
) -> Response {
    mock.record(
        Method::GET,
        format!("/repos/{owner}/{repo}/pulls/{number}"),
        HashMap::new(),
        &headers,
    );
    if let Some(status) = mock.fail_status {
        return status.into_response();
    }

    match mock.pulls.get(&format!("{owner}/{repo}#{number}")) {
        Some(pr) => axum::Json(pr.clone()).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

async fn mark_thread_read(
    State(mock): State<SharedMock>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Response {
    mock.record(
        Method::PATCH,
        format!("/notifications/threads/{id}"),
        HashMap::new(),
        &headers,
    );
    if let Some(status) = mock.fail_status {
        return status.into_response();
    }
    StatusCode::RESET_CONTENT.into_response()
}

/// A notification shaped like the GitHub REST payload.
pub fn notification_json(id: &str, kind: &str, owner: &str, repo: &str, number: u64) -> Value {
    let segment = if kind == "PullRequest" { "pulls" } else { "issues" };
    json!({
        "id": id,
        "unread": true,
        "reason": "subscribed",
        "updated_at": "2026-01-01T00:00:00Z",
        "subject": {
            "title": format!("{kind} {number}"),
            "url": format!("https://api.github.com/repos/{owner}/{repo}/{segment}/{number}"),
            "latest_comment_url": null,
            "type": kind,
        },
        "repository": {
            "name": repo,
            "full_name": format!("{owner}/{repo}"),
            "owner": { "login": owner },
        },
    })
}
