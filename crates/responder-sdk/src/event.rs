//! Invocation trigger passed to handlers

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The platform-supplied input of an invocation.
///
/// Any JSON value is accepted, including `null`. Handlers are free to
/// ignore it entirely.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Event(Value);

impl Event {
    /// Wrap a JSON value.
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    /// An absent event.
    pub fn null() -> Self {
        Self(Value::Null)
    }

    /// Build an event from a raw payload as delivered by a transport.
    ///
    /// An empty payload is an absent event. A payload that is not JSON is
    /// kept as a string value rather than rejected.
    pub fn from_payload(payload: &[u8]) -> Self {
        if payload.is_empty() {
            return Self::null();
        }
        match serde_json::from_slice(payload) {
            Ok(value) => Self(value),
            Err(_) => Self(Value::String(String::from_utf8_lossy(payload).into_owned())),
        }
    }

    pub fn is_null(&self) -> bool {
        self.0.is_null()
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn into_value(self) -> Value {
        self.0
    }
}

impl From<Value> for Event {
    fn from(value: Value) -> Self {
        Self(value)
    }
}
