//! Hello responder
//!
//! A stateless function that answers every invocation with status 200,
//! wildcard CORS headers and the JSON string `"Hello World!"`, plus the
//! hosts (Lambda runtime, stdio frames, local HTTP) that deliver
//! invocations to it.

pub mod config;
pub mod responder;
pub mod transport;

pub use config::{HostConfig, Transport};
pub use responder::handle;
