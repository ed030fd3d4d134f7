//! Stdio host: length-prefixed JSON frames on stdin/stdout
//!
//! Logs must not be written to stdout while this transport runs.

use responder_sdk::{ipc, Handler, HandlerError};
use std::io;
use std::sync::Arc;

/// Answer frames from stdin until EOF. Returns the number of invocations answered.
pub async fn run(handler: Arc<dyn Handler>) -> Result<u64, HandlerError> {
    tracing::info!("Reading invocations from stdin");

    let answered = tokio::task::spawn_blocking(move || {
        let stdin = io::stdin();
        let stdout = io::stdout();
        ipc::serve(&mut stdin.lock(), &mut stdout.lock(), handler.as_ref())
    })
    .await
    .map_err(|e| HandlerError::Ipc(format!("stdio worker failed: {}", e)))??;

    tracing::info!(answered, "stdin closed");
    Ok(answered)
}
