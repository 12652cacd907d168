//! In-process stand-in for the Remote API.
//!
//! Records every request it receives and answers with whatever the test's
//! responder returns.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use axum::{
    Json, Router,
    body::Bytes,
    extract::State,
    http::{
        HeaderMap, HeaderName, Method, StatusCode, Uri,
        header::{AUTHORIZATION, CONTENT_TYPE},
    },
    response::{IntoResponse, Response},
};
use remote_hr_mcp::ToolkitOptions;
use serde_json::Value;
use tokio::net::TcpListener;

pub const API_KEY: &str = "ra_test_12345";

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: Method,
    /// Path with the `/v1` prefix removed.
    pub path: String,
    pub query: Option<String>,
    pub authorization: Option<String>,
    pub content_type: Option<String>,
    pub body: Option<Value>,
}

type Responder = Arc<dyn Fn(&RecordedRequest) -> (StatusCode, Option<Value>) + Send + Sync>;

#[derive(Clone)]
struct MockState {
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
    respond: Responder,
}

pub struct MockApi {
    pub base_url: String,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockApi {
    pub async fn start<F>(respond: F) -> Self
    where
        F: Fn(&RecordedRequest) -> (StatusCode, Option<Value>) + Send + Sync + 'static,
    {
        let requests = Arc::new(Mutex::new(Vec::new()));
        let state = MockState {
            requests: Arc::clone(&requests),
            respond: Arc::new(respond),
        };
        let router = Router::new().fallback(record).with_state(state);

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });

        Self {
            base_url: format!("http://{addr}/v1"),
            requests,
        }
    }

    /// Always answers 200 with `body`.
    pub async fn replying(body: Value) -> Self {
        Self::start(move |_| (StatusCode::OK, Some(body.clone()))).await
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn options(&self) -> ToolkitOptions {
        ToolkitOptions::new(API_KEY).with_base_url(self.base_url.clone())
    }
}

async fn record(
    State(state): State<MockState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let header = |name: HeaderName| {
        headers
            .get(name)
            .and_then(|value| value.to_str().ok())
            .map(ToString::to_string)
    };
    let request = RecordedRequest {
        method,
        path: uri
            .path()
            .strip_prefix("/v1")
            .unwrap_or(uri.path())
            .to_string(),
        query: uri.query().map(ToString::to_string),
        authorization: header(AUTHORIZATION),
        content_type: header(CONTENT_TYPE),
        body: serde_json::from_slice(&body).ok(),
    };
    let (status, reply) = (state.respond)(&request);
    state.requests.lock().unwrap().push(request);

    match reply {
        Some(json) => (status, Json(json)).into_response(),
        None => status.into_response(),
    }
}

/// A base URL nothing listens on.
pub async fn closed_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}/v1")
}
