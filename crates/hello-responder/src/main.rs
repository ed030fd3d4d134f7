//! hello-responder - entry point
//!
//! Picks a transport from the environment and serves the greeting
//! responder on it until the host goes away.

use anyhow::Result;
use hello_responder::{handle, transport, HostConfig, Transport};
use responder_sdk::Handler;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // stdout belongs to the stdio transport, so logs go to stderr
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| "info,hello_responder=debug".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = HostConfig::from_env()?;
    tracing::info!(transport = %config.transport, "Starting hello-responder");

    let handler: Arc<dyn Handler> = Arc::new(handle);

    match config.transport {
        Transport::Lambda => transport::lambda::run(handler)
            .await
            .map_err(|e| anyhow::anyhow!("Lambda runtime failed: {}", e))?,
        Transport::Stdio => {
            transport::stdio::run(handler).await?;
        }
        Transport::Http => transport::http::serve(config.http_addr(), handler).await?,
    }

    Ok(())
}
