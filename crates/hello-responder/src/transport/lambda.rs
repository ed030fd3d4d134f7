//! AWS Lambda runtime host

use lambda_runtime::{service_fn, Error, LambdaEvent};
use responder_sdk::{Event, Handler, Response};
use std::sync::Arc;

/// Poll the Lambda runtime API and answer every invocation with `handler`.
pub async fn run(handler: Arc<dyn Handler>) -> Result<(), Error> {
    tracing::info!("Waiting for Lambda invocations");

    lambda_runtime::run(service_fn(move |event: LambdaEvent<Event>| {
        let handler = handler.clone();
        async move { invoke(handler.as_ref(), event) }
    }))
    .await
}

/// Answer a single Lambda invocation.
pub fn invoke(handler: &dyn Handler, event: LambdaEvent<Event>) -> Result<Response, Error> {
    let (payload, context) = event.into_parts();
    tracing::debug!(request_id = %context.request_id, "Lambda invocation");
    Ok(handler.call(payload))
}
