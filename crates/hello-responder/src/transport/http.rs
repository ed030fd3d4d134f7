//! Local HTTP host
//!
//! Every method on every path becomes one invocation. The request is
//! wrapped in a proxy-style event, so a handler sees roughly what an API
//! Gateway integration would hand it.

use axum::{
    body::Body,
    extract::State,
    http::{HeaderName, HeaderValue, Request, StatusCode},
    response::IntoResponse,
    routing::any,
    Router,
};
use responder_sdk::{Event, Handler, Response};
use serde_json::{json, Map, Value};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{limit::RequestBodyLimitLayer, trace::TraceLayer};
use uuid::Uuid;

/// Largest request body accepted before the handler is called.
pub const MAX_BODY_BYTES: usize = 1024 * 1024;

/// Build the router that hands every request to `handler`.
pub fn router(handler: Arc<dyn Handler>) -> Router {
    Router::new()
        .route("/", any(invoke))
        .route("/{*path}", any(invoke))
        .layer(RequestBodyLimitLayer::new(MAX_BODY_BYTES))
        .layer(TraceLayer::new_for_http())
        .with_state(handler)
}

/// Bind `addr` and serve until Ctrl-C.
pub async fn serve(addr: SocketAddr, handler: Arc<dyn Handler>) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, router(handler))
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for Ctrl-C: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down");
}

async fn invoke(State(handler): State<Arc<dyn Handler>>, request: Request<Body>) -> axum::response::Response {
    let request_id = Uuid::new_v4().to_string();
    let method = request.method().to_string();
    let path = request.uri().path().to_string();
    let query = request.uri().query().unwrap_or("").to_string();

    let headers: Map<String, Value> = request
        .headers()
        .iter()
        .map(|(k, v)| (k.to_string(), Value::String(String::from_utf8_lossy(v.as_bytes()).into_owned())))
        .collect();

    let body_bytes = match axum::body::to_bytes(request.into_body(), MAX_BODY_BYTES).await {
        Ok(b) => b,
        Err(e) => {
            tracing::warn!(request_id = %request_id, "Failed to read body: {}", e);
            return (StatusCode::BAD_REQUEST, "Failed to read body").into_response();
        }
    };

    let body = if body_bytes.is_empty() {
        Value::Null
    } else {
        Value::String(String::from_utf8_lossy(&body_bytes).into_owned())
    };

    tracing::debug!(
        request_id = %request_id,
        method = %method,
        path = %path,
        "Invocation"
    );

    let event = Event::new(json!({
        "httpMethod": method,
        "path": path,
        "rawQueryString": query,
        "headers": headers,
        "body": body,
        "requestContext": { "requestId": request_id },
    }));

    into_http_response(handler.call(event))
}

/// Map a handler response onto an HTTP response.
pub fn into_http_response(response: Response) -> axum::response::Response {
    let status = match StatusCode::from_u16(response.status_code) {
        Ok(status) => status,
        Err(_) => {
            tracing::error!("Handler returned invalid status code {}", response.status_code);
            return (StatusCode::INTERNAL_SERVER_ERROR, "Invalid status code").into_response();
        }
    };

    let mut http_response = axum::response::Response::new(Body::from(response.body));
    *http_response.status_mut() = status;
    let headers = http_response.headers_mut();
    for (key, value) in response.headers {
        match (HeaderName::try_from(key.as_str()), HeaderValue::try_from(value.as_str())) {
            (Ok(name), Ok(value)) => {
                headers.insert(name, value);
            }
            _ => tracing::warn!("Dropping invalid response header {:?}", key),
        }
    }

    http_response
}
