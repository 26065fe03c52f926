//! Common test utilities for integration tests
//!
//! Each `TestContext` owns a router over a fresh in-memory store, so tests
//! never share records.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::Value;
use tower::Service as _;
use userstore_api::app::{build_router, AppState};
use userstore_api::config::Config;

/// Test context containing the app under test
pub struct TestContext {
    pub app: axum::Router,
}

impl TestContext {
    /// Creates a new test context with an empty store
    pub fn new() -> Self {
        let state = AppState::in_memory(Config::default());
        Self {
            app: build_router(state),
        }
    }

    /// Sends a request and returns the status plus the decoded JSON body
    ///
    /// Empty bodies decode as `Value::Null`.
    pub async fn send(&self, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let (status, bytes) = self.send_raw(method, uri, body.map(|b| b.to_string())).await;
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, json)
    }

    /// Sends a request with an arbitrary (possibly malformed) body
    pub async fn send_raw(
        &self,
        method: &str,
        uri: &str,
        body: Option<String>,
    ) -> (StatusCode, Vec<u8>) {
        let mut builder = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(b) => {
                builder = builder.header("content-type", "application/json");
                Body::from(b)
            }
            None => Body::empty(),
        };
        let request = builder.body(body).unwrap();

        let response = self.app.clone().call(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, bytes.to_vec())
    }

    /// Creates a user through the API and returns its `data` object
    pub async fn create_user(&self, username: &str, email: &str) -> Value {
        let (status, body) = self
            .send(
                "POST",
                "/api/v1/users",
                Some(serde_json::json!({ "username": username, "email": email })),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "create failed: {body}");
        body["data"].clone()
    }
}
