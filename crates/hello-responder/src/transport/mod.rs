//! Hosts that deliver invocations to a handler

pub mod http;
pub mod lambda;
pub mod stdio;
