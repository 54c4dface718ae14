//! HTTP-level tests for the OpenAI-compatible completion client, run against
//! a local wiremock server.

use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use callsight_core::{CompletionClient, Message, Role};
use callsight_inference::{OpenAICompletionClient, OpenAIConfig};

fn client_for(server: &MockServer, api_key: Option<&str>) -> OpenAICompletionClient {
    OpenAICompletionClient::new(OpenAIConfig {
        base_url: server.uri(),
        api_key: api_key.map(String::from),
        gen_model: "gpt-4o-mini".to_string(),
        timeout_seconds: 5,
    })
    .expect("client should build")
}

fn completion_body(content: &str) -> serde_json::Value {
    json!({
        "id": "chatcmpl-test",
        "choices": [{
            "index": 0,
            "message": {"role": "assistant", "content": content},
            "finish_reason": "stop"
        }],
        "usage": {"prompt_tokens": 20, "completion_tokens": 8, "total_tokens": 28}
    })
}

#[tokio::test]
async fn complete_returns_assistant_message() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(body_partial_json(json!({
            "model": "gpt-4o-mini",
            "messages": [{"role": "user", "content": "Give me pros of the pitch"}]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion_body("Strong opener.")))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, None);
    let reply = client
        .complete(&[Message::user("Give me pros of the pitch")])
        .await
        .unwrap();

    assert_eq!(reply.role, Role::Assistant);
    assert_eq!(reply.content, "Strong opener.");
}

#[tokio::test]
async fn complete_sends_bearer_token_when_configured() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(header("Authorization", "Bearer sk-test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion_body("ok")))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, Some("sk-test-key"));
    client.complete(&[Message::user("hi")]).await.unwrap();
}

#[tokio::test]
async fn complete_sends_full_window_in_order() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(body_partial_json(json!({
            "messages": [
                {"role": "system", "content": "You are a sales analyst."},
                {"role": "user", "content": "Hello, interested in pricing."},
                {"role": "assistant", "content": "Noted."},
                {"role": "user", "content": "Give me cons of the pitch"}
            ]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion_body("Cons: …")))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, None);
    let window = vec![
        Message::system("You are a sales analyst."),
        Message::user("Hello, interested in pricing."),
        Message::assistant("Noted."),
        Message::user("Give me cons of the pitch"),
    ];

    let reply = client.complete(&window).await.unwrap();
    assert_eq!(reply.content, "Cons: …");
}

#[tokio::test]
async fn complete_surfaces_api_error_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(429).set_body_json(json!({
            "error": {
                "message": "Rate limit reached",
                "type": "rate_limit_error",
                "code": "rate_limit_exceeded"
            }
        })))
        .mount(&server)
        .await;

    let client = client_for(&server, None);
    let err = client.complete(&[Message::user("hi")]).await.unwrap_err();

    let text = err.to_string();
    assert!(text.contains("429"), "error should carry the status: {text}");
    assert!(
        text.contains("Rate limit reached"),
        "error should carry the service message: {text}"
    );
}

#[tokio::test]
async fn complete_rejects_malformed_response() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let client = client_for(&server, None);
    let err = client.complete(&[Message::user("hi")]).await.unwrap_err();
    assert!(err.to_string().contains("Failed to parse response"));
}

#[tokio::test]
async fn complete_rejects_empty_choices() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"id": "chatcmpl-test", "choices": []})),
        )
        .mount(&server)
        .await;

    let client = client_for(&server, None);
    let err = client.complete(&[Message::user("hi")]).await.unwrap_err();
    assert!(err.to_string().contains("no choices"));
}
