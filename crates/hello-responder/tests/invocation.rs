use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use hello_responder::{handle, transport};
use lambda_runtime::{Context, LambdaEvent};
use responder_sdk::{ipc, Event, Handler, Response};
use serde_json::{json, Value};
use std::io::Cursor;
use std::sync::Arc;
use tower::ServiceExt;

fn expected() -> Value {
    json!({
        "statusCode": 200,
        "headers": {
            "Access-Control-Allow-Origin": "*",
            "Access-Control-Allow-Headers": "*",
            "Access-Control-Allow-Methods": "*"
        },
        "body": "\"Hello World!\""
    })
}

fn frame(payload: &[u8]) -> Vec<u8> {
    let mut buf = (payload.len() as u32).to_be_bytes().to_vec();
    buf.extend_from_slice(payload);
    buf
}

#[test]
fn empty_object_event_returns_greeting() {
    let response = serde_json::to_value(handle(Event::new(json!({})))).unwrap();
    assert_eq!(response, expected());
}

#[test]
fn null_event_matches_empty_object_event() {
    let from_null = handle(Event::null()).to_json().unwrap();
    let from_object = handle(Event::new(json!({}))).to_json().unwrap();
    assert_eq!(from_null, from_object);
}

#[test]
fn responses_are_byte_identical_for_any_event() {
    let events = [
        Event::default(),
        Event::from_payload(b""),
        Event::from_payload(b"{{{ malformed"),
        Event::new(json!({"httpMethod": "DELETE", "body": "x"})),
        Event::new(json!([1, 2, 3])),
        Event::new(json!("just a string")),
    ];

    let baseline = handle(Event::null()).to_json().unwrap();
    for event in events {
        let response = handle(event);
        assert_eq!(response.status_code, 200);
        assert_eq!(response.body_json().unwrap(), json!("Hello World!"));
        assert_eq!(response.to_json().unwrap(), baseline);
    }
}

#[test]
fn concurrent_invocations_are_independent() {
    let handles: Vec<_> = (0..8)
        .map(|i| std::thread::spawn(move || handle(Event::new(json!({ "n": i })))))
        .collect();

    for h in handles {
        assert_eq!(serde_json::to_value(h.join().unwrap()).unwrap(), expected());
    }
}

#[test]
fn lambda_invocation_returns_greeting() {
    let event = LambdaEvent::new(Event::new(json!({"anything": true})), Context::default());
    let response = transport::lambda::invoke(&handle, event).unwrap();
    assert_eq!(serde_json::to_value(response).unwrap(), expected());
}

#[test]
fn stdio_answers_every_frame_then_stops() {
    let mut input = frame(b"{}");
    input.extend(frame(b"null"));
    input.extend(frame(b""));
    input.extend(frame(b"not json at all"));

    let mut out = Vec::new();
    let answered = ipc::serve(&mut Cursor::new(input), &mut out, &handle).unwrap();
    assert_eq!(answered, 4);

    let mut replies = Cursor::new(out);
    let mut count = 0;
    while let Some(reply) = ipc::read_event(&mut replies).unwrap() {
        assert_eq!(reply.into_value(), expected());
        count += 1;
    }
    assert_eq!(count, 4);
}

async fn call_http(request: Request<Body>) -> (StatusCode, axum::http::HeaderMap, String) {
    let handler: Arc<dyn Handler> = Arc::new(handle);
    let response = transport::http::router(handler).oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, headers, String::from_utf8(body.to_vec()).unwrap())
}

#[tokio::test]
async fn http_answers_any_method_and_path() {
    let cases = [
        (Method::GET, "/"),
        (Method::POST, "/some/deep/path?x=1"),
        (Method::OPTIONS, "/preflight"),
        (Method::DELETE, "/items/42"),
    ];

    for (method, uri) in cases {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::from("{\"ignored\": true}"))
            .unwrap();
        let (status, headers, body) = call_http(request).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "\"Hello World!\"");
        assert_eq!(headers["access-control-allow-origin"], "*");
        assert_eq!(headers["access-control-allow-headers"], "*");
        assert_eq!(headers["access-control-allow-methods"], "*");
    }
}

#[tokio::test]
async fn http_hands_handler_a_proxy_event() {
    let seen = Arc::new(std::sync::Mutex::new(None));
    let recorder = {
        let seen = seen.clone();
        move |event: Event| {
            *seen.lock().unwrap() = Some(event.into_value());
            Response::new(204)
        }
    };

    let request = Request::builder()
        .method(Method::PUT)
        .uri("/things?id=7")
        .header("x-trace", "abc")
        .body(Body::from("payload"))
        .unwrap();
    let response = transport::http::router(Arc::new(recorder))
        .oneshot(request)
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let event = seen.lock().unwrap().take().unwrap();
    assert_eq!(event["httpMethod"], "PUT");
    assert_eq!(event["path"], "/things");
    assert_eq!(event["rawQueryString"], "id=7");
    assert_eq!(event["headers"]["x-trace"], "abc");
    assert_eq!(event["body"], "payload");
    assert!(event["requestContext"]["requestId"].is_string());
}

#[tokio::test]
async fn http_rejects_oversized_body() {
    let size = transport::http::MAX_BODY_BYTES + 1;
    let request = Request::builder()
        .method(Method::POST)
        .uri("/")
        .header("content-length", size.to_string())
        .body(Body::from(vec![b'a'; size]))
        .unwrap();
    let (status, _, _) = call_http(request).await;
    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
}
