//! Responder SDK - types and framing for constant-response handlers
//!
//! A handler receives an [`Event`] of any shape and returns a [`Response`]
//! in the proxy-integration form (`statusCode`, `headers`, `body`). The
//! [`ipc`] module carries events and responses over stdio for hosts that
//! run the handler as a child process.

pub mod error;
pub mod event;
pub mod handler;
pub mod ipc;
pub mod response;

pub mod prelude {
    //! Common imports for handlers
    pub use crate::error::HandlerError;
    pub use crate::event::Event;
    pub use crate::handler::Handler;
    pub use crate::response::Response;
    pub use serde_json::{json, Value as JsonValue};
    pub use std::sync::Arc;
}

// Re-export key types at crate root
pub use error::HandlerError;
pub use event::Event;
pub use handler::Handler;
pub use response::Response;
