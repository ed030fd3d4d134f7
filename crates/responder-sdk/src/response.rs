//! Response value returned by handlers

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

use crate::error::HandlerError;

/// Header names for cross-origin resource sharing.
pub const ALLOW_ORIGIN: &str = "Access-Control-Allow-Origin";
pub const ALLOW_HEADERS: &str = "Access-Control-Allow-Headers";
pub const ALLOW_METHODS: &str = "Access-Control-Allow-Methods";

/// Represents a proxy-integration style response.
///
/// Serializes as `{"statusCode": .., "headers": {..}, "body": ".."}`, the
/// shape a Lambda proxy integration expects back from a function.
///
/// Headers are kept in a `BTreeMap` so that two responses with the same
/// content always serialize to the same bytes.
///
/// # Example
/// ```ignore
/// Response::ok("Hello World!").with_allow_all_cors()
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    /// HTTP status code
    pub status_code: u16,

    /// Response headers
    #[serde(default)]
    pub headers: BTreeMap<String, String>,

    /// Response body, already encoded
    #[serde(default)]
    pub body: String,
}

impl Response {
    /// Create a response with the given status code, no headers and an empty body.
    pub fn new(status_code: u16) -> Self {
        Self {
            status_code,
            headers: BTreeMap::new(),
            body: String::new(),
        }
    }

    /// Create a 200 OK response whose body is the JSON encoding of `body`.
    ///
    /// # Example
    /// ```ignore
    /// Response::ok("Hello World!")           // body: "\"Hello World!\""
    /// Response::ok(json!({"message": "hi"})) // body: "{\"message\":\"hi\"}"
    /// ```
    pub fn ok(body: impl Into<Value>) -> Self {
        Self::json(200, &body.into())
    }

    /// Create a response with a custom status code and a JSON-encoded body.
    ///
    /// No `Content-Type` header is added; callers that want one set it with
    /// [`Response::with_header`].
    pub fn json(status_code: u16, body: &Value) -> Self {
        Self::new(status_code).with_body(body.to_string())
    }

    /// Add a header to the response (builder pattern).
    pub fn with_header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    /// Set the body (builder pattern).
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    /// Allow any origin, any request header and any method.
    pub fn with_allow_all_cors(self) -> Self {
        self.with_header(ALLOW_ORIGIN, "*")
            .with_header(ALLOW_HEADERS, "*")
            .with_header(ALLOW_METHODS, "*")
    }

    /// Get a header value (case-insensitive lookup).
    pub fn header(&self, key: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v.as_str())
    }

    /// Decode the body as JSON.
    pub fn body_json(&self) -> Result<Value, HandlerError> {
        Ok(serde_json::from_str(&self.body)?)
    }

    /// Serialize the whole response to its JSON wire form.
    pub fn to_json(&self) -> Result<String, HandlerError> {
        Ok(serde_json::to_string(self)?)
    }
}

impl Default for Response {
    fn default() -> Self {
        Self::new(200)
    }
}
