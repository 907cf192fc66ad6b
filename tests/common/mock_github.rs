//! Mock GitHub REST server.

#![allow(dead_code)]

use axum::body::Body;
use axum::extract::{Path, State};
use axum::http::{header, HeaderMap, Response, StatusCode, Uri};
use axum::routing::get;
use axum::Router;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;

/// A captured request for assertions.
#[derive(Debug, Clone)]
pub struct CapturedRequest {
    /// Raw request path, still percent-encoded.
    pub path: String,
    /// Decoded `{user}` path segment.
    pub user: String,
    pub user_agent: Option<String>,
    pub accept: Option<String>,
}

/// A mock response to return.
#[derive(Debug, Clone)]
pub struct MockResponse {
    pub status: u16,
    pub body: String,
    pub delay_ms: u64,
}

impl MockResponse {
    pub fn json(body: &str) -> Self {
        Self {
            status: 200,
            body: body.to_string(),
            delay_ms: 0,
        }
    }

    pub fn status(status: u16, body: &str) -> Self {
        Self {
            status,
            body: body.to_string(),
            delay_ms: 0,
        }
    }

    pub fn not_found() -> Self {
        Self::status(404, r#"{"message":"Not Found"}"#)
    }

    pub fn delayed(mut self, delay_ms: u64) -> Self {
        self.delay_ms = delay_ms;
        self
    }
}

#[derive(Default)]
struct MockState {
    responses: Mutex<HashMap<String, MockResponse>>,
    requests: Mutex<Vec<CapturedRequest>>,
}

/// Serves `/users/{user}/repos` (and the same under `/api/v3`) from canned
/// responses. Unknown users get a 404.
pub struct MockGitHub {
    addr: SocketAddr,
    state: Arc<MockState>,
}

impl MockGitHub {
    pub async fn start() -> Self {
        let state = Arc::new(MockState::default());
        let app = Router::new()
            .route("/users/{user}/repos", get(repos_handler))
            .route("/api/v3/users/{user}/repos", get(repos_handler))
            .with_state(Arc::clone(&state));

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind mock GitHub");
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        Self { addr, state }
    }

    pub fn respond(&self, user: &str, response: MockResponse) {
        self.state.responses.lock().insert(user.to_string(), response);
    }

    pub fn api_url(&self) -> String {
        format!("http://{}/", self.addr)
    }

    pub fn requests(&self) -> Vec<CapturedRequest> {
        self.state.requests.lock().clone()
    }
}

async fn repos_handler(
    State(state): State<Arc<MockState>>,
    Path(user): Path<String>,
    uri: Uri,
    headers: HeaderMap,
) -> Response<Body> {
    let header_value = |name: header::HeaderName| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(String::from)
    };
    state.requests.lock().push(CapturedRequest {
        path: uri.path().to_string(),
        user: user.clone(),
        user_agent: header_value(header::USER_AGENT),
        accept: header_value(header::ACCEPT),
    });

    let response = state
        .responses
        .lock()
        .get(&user)
        .cloned()
        .unwrap_or_else(MockResponse::not_found);

    if response.delay_ms > 0 {
        tokio::time::sleep(Duration::from_millis(response.delay_ms)).await;
    }

    Response::builder()
        .status(StatusCode::from_u16(response.status).unwrap())
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(response.body))
        .unwrap()
}
