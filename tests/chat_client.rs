mod common;

use chat_portal::error::ApiError;
use chat_portal::models::{ChatOptions, Role};
use chat_portal::services::chat::ChatService;
use common::{auth_response, auth_service, chat_service, StubServer, CHAT_OK_BODY};

#[tokio::test]
async fn unconfigured_service_fails_without_touching_the_network() {
    let server = StubServer::start(200, CHAT_OK_BODY).await;
    let auth = auth_service(Some(&server.base_url));
    auth.save_session(&auth_response("abc")).unwrap();
    let chat = chat_service(None, auth);

    let request = ChatService::build_simple_request("hi", ChatOptions::default());
    let err = chat.send_chat_message(&request).await.unwrap_err();

    assert!(matches!(err, ApiError::Configuration));
    assert!(server.requests().is_empty());
}

#[tokio::test]
async fn sends_request_with_bearer_token() {
    let server = StubServer::start(200, CHAT_OK_BODY).await;
    let auth = auth_service(None);
    auth.save_session(&auth_response("abc")).unwrap();
    let chat = chat_service(Some(&server.base_url), auth);

    let request = ChatService::build_simple_request("hi", ChatOptions::default());
    let resp = chat.send_chat_message(&request).await.expect("chat should succeed");

    assert_eq!(resp.id, "chatcmpl-1");
    assert_eq!(resp.choices[0].message.role, Role::Assistant);
    assert_eq!(resp.reply(), Some("Hello there"));
    assert_eq!(resp.usage.total_tokens, 7);

    let requests = server.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].request_line, "POST /ai/chat HTTP/1.1");
    assert_eq!(requests[0].header("authorization"), Some("Bearer abc"));
    assert_eq!(requests[0].header("content-type"), Some("application/json"));

    let body = requests[0].json();
    assert_eq!(body["messages"], serde_json::json!([{"role": "user", "content": "hi"}]));
    assert_eq!(body["max_tokens"], 1000);
    assert!(body.get("top_p").is_none());
}

#[tokio::test]
async fn anonymous_request_goes_out_without_authorization() {
    let server = StubServer::start(200, CHAT_OK_BODY).await;
    let chat = chat_service(Some(&server.base_url), auth_service(None));

    let request = ChatService::build_simple_request("hi", ChatOptions::default());
    chat.send_chat_message(&request).await.expect("chat should succeed");

    let requests = server.requests();
    assert_eq!(requests.len(), 1);
    assert!(requests[0].header("authorization").is_none());
}

#[tokio::test]
async fn non_success_status_surfaces_status_and_raw_body() {
    let server = StubServer::start(500, "upstream model crashed").await;
    let chat = chat_service(Some(&server.base_url), auth_service(None));

    let request = ChatService::build_simple_request("hi", ChatOptions::default());
    let err = chat.send_chat_message(&request).await.unwrap_err();

    assert_eq!(err.status(), Some(500));
    match err {
        ApiError::Http { status, body } => {
            assert_eq!(status, 500);
            assert_eq!(body, "upstream model crashed");
        }
        other => panic!("expected http error, got {other:?}"),
    }
}

#[tokio::test]
async fn malformed_success_body_is_a_transport_error() {
    let server = StubServer::start(200, r#"{"unexpected": true}"#).await;
    let chat = chat_service(Some(&server.base_url), auth_service(None));

    let request = ChatService::build_simple_request("hi", ChatOptions::default());
    let err = chat.send_chat_message(&request).await.unwrap_err();
    assert!(matches!(err, ApiError::Transport(_)));
}
