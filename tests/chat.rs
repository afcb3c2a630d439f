mod common;

use serde_json::{json, Value};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn guest_chat_uses_fallback_replies() {
    let app = common::spawn_app().await;

    let response = app.chat(None, json!({"message": "hello"})).await;

    assert_eq!(response.status().as_u16(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["is_guest"], true);
    assert_eq!(body["model_used"], "fallback");
    assert_eq!(body["task_type"], "fallback");
    assert!(body["conversation_id"].as_str().unwrap().starts_with("guest_"));
    assert!(body["response"].as_str().unwrap().starts_with("Hello!"));
}

#[tokio::test]
async fn invalid_token_chats_as_guest() {
    let app = common::spawn_app().await;

    let response = app.chat(Some("not-a-token"), json!({"message": "hello"})).await;

    assert_eq!(response.status().as_u16(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["is_guest"], true);
}

#[tokio::test]
async fn blank_message_is_rejected() {
    let app = common::spawn_app().await;

    let response = app.chat(None, json!({"message": "   "})).await;
    assert_eq!(response.status().as_u16(), 400);

    let response = app.chat(None, json!({"conversation_id": "x"})).await;
    assert_eq!(response.status().as_u16(), 400);
}

#[tokio::test]
async fn sequential_chats_append_two_messages_each() {
    let app = common::spawn_app().await;
    let token = app.token_for("frank@example.com").await;

    let first: Value = app
        .chat(Some(&token), json!({"message": "hello there"}))
        .await
        .json()
        .await
        .unwrap();
    assert_eq!(first["is_guest"], false);
    let id = first["conversation_id"].as_str().unwrap().to_string();
    assert!(id.starts_with("frank@example.com_"));

    let conversation: Value = app
        .get_authorized(&format!("/conversations/{}", id), &token)
        .await
        .json()
        .await
        .unwrap();
    assert_eq!(conversation["messages"].as_array().unwrap().len(), 2);

    app.chat(
        Some(&token),
        json!({"message": "what is the date today", "conversation_id": id}),
    )
    .await;

    let conversation: Value = app
        .get_authorized(&format!("/conversations/{}", id), &token)
        .await
        .json()
        .await
        .unwrap();
    let messages = conversation["messages"].as_array().unwrap();
    assert_eq!(messages.len(), 4);
    assert_eq!(messages[0]["role"], "user");
    assert_eq!(messages[0]["content"], "hello there");
    assert_eq!(messages[1]["role"], "assistant");
    assert_eq!(messages[1]["model_used"], "fallback");
    assert_eq!(messages[2]["content"], "what is the date today");
    assert!(messages[3]["content"].as_str().unwrap().starts_with("Today is "));
    assert_eq!(conversation["title"], "hello there");
}

#[tokio::test]
async fn chatting_into_another_users_conversation_is_forbidden() {
    let app = common::spawn_app().await;
    let alice = app.token_for("alice@example.com").await;
    let bob = app.token_for("bob@example.com").await;

    app.chat(Some(&alice), json!({"message": "hi", "conversation_id": "alice-private"}))
        .await;
    let response = app
        .chat(Some(&bob), json!({"message": "hi", "conversation_id": "alice-private"}))
        .await;

    assert_eq!(response.status().as_u16(), 403);
}

#[tokio::test]
async fn remote_strategy_routes_to_the_selected_model() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/Qwen/Qwen2.5-Coder-7B-Instruct/v1/chat/completions"))
        .and(header("authorization", "Bearer hf_test"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "choices": [{"message": {"role": "assistant", "content": "  fn main() {}  "}}]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;
    let app = common::spawn_remote_app(&mock_server.uri()).await;

    let response = app
        .chat(None, json!({"message": "write a rust function that adds numbers"}))
        .await;

    assert_eq!(response.status().as_u16(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["response"], "fn main() {}");
    assert_eq!(body["model_used"], "qwen-coder-7b");
    assert_eq!(body["task_type"], "coding");
}

#[tokio::test]
async fn loading_model_is_a_successful_response() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&mock_server)
        .await;
    let app = common::spawn_remote_app(&mock_server.uri()).await;

    let response = app.chat(None, json!({"message": "hello"})).await;

    assert_eq!(response.status().as_u16(), 200);
    let body: Value = response.json().await.unwrap();
    assert!(body["response"].as_str().unwrap().contains("try again"));
    assert_eq!(body["task_type"], "error");
}
