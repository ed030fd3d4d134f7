//! Handler seam shared by every transport
//!
//! A transport owns the outer loop (Lambda runtime, stdio frames, HTTP
//! server) and calls a [`Handler`] once per invocation.
//!
//! # Example
//!
//! ```ignore
//! use responder_sdk::prelude::*;
//!
//! fn handle(_event: Event) -> Response {
//!     Response::ok("Hello World!")
//! }
//!
//! let handler: Arc<dyn Handler> = Arc::new(handle);
//! ```

use crate::{Event, Response};

/// Anything that turns an [`Event`] into a [`Response`].
///
/// Implemented for every `Fn(Event) -> Response` that can be shared across
/// threads, so plain functions work as handlers.
pub trait Handler: Send + Sync + 'static {
    fn call(&self, event: Event) -> Response;
}

impl<F> Handler for F
where
    F: Fn(Event) -> Response + Send + Sync + 'static,
{
    fn call(&self, event: Event) -> Response {
        self(event)
    }
}
