//! Test assertion helpers - fluent API for verifying responses
#![allow(dead_code)] // Test utilities may not all be used in every test

use axum::{
    body::Body,
    http::{Response, StatusCode},
};
use serde_json::Value;

// ============================================================================
// Assertion Helpers
// ============================================================================

pub struct ResponseAssertion {
    status: StatusCode,
    body: Value,
}

impl ResponseAssertion {
    /// Buffers the response so status and body can be checked together
    pub async fn from(response: Response<Body>) -> Self {
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        Self { status, body }
    }

    pub fn has_status(self, expected: StatusCode) -> Self {
        assert_eq!(self.status, expected, "unexpected status, body: {}", self.body);
        self
    }

    pub fn has_error_message(self, expected: &str) -> Self {
        assert_eq!(self.body, Value::String(expected.to_string()));
        self
    }

    pub fn has_null_body(self) -> Self {
        assert!(self.body.is_null(), "expected null body, got {}", self.body);
        self
    }

    /// Contents of a message page, in response order
    pub fn message_contents(&self) -> Vec<String> {
        self.body
            .as_array()
            .expect("body should be a message array")
            .iter()
            .map(|m| m["content"].as_str().unwrap().to_string())
            .collect()
    }

    pub fn body(&self) -> &Value {
        &self.body
    }
}

/// Expected contents "m{start}".."m{end-1}"
pub fn contents(range: std::ops::Range<usize>) -> Vec<String> {
    range.map(|i| format!("m{}", i)).collect()
}
