//! The greeting responder.
//!
//! `handle` is a constant function: whatever the event, it answers 200 with
//! wildcard CORS headers and the JSON string `"Hello World!"` as body.

use responder_sdk::{Event, Response};

/// Greeting carried in every response body, before JSON encoding.
pub const GREETING: &str = "Hello World!";

/// Answer an invocation.
///
/// The event is never inspected. No I/O, no logging, no shared state.
pub fn handle(_event: Event) -> Response {
    Response::ok(GREETING).with_allow_all_cors()
}
