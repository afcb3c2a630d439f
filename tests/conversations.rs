mod common;

use serde_json::{json, Value};

#[tokio::test]
async fn conversations_require_authentication() {
    let app = common::spawn_app().await;

    let response = app.client.get(app.url("/conversations")).send().await.unwrap();

    assert_eq!(response.status().as_u16(), 401);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["status"], "Error");
    assert_eq!(body["code"], 401);
}

#[tokio::test]
async fn list_is_sorted_by_most_recent_update() {
    let app = common::spawn_app().await;
    let token = app.token_for("gina@example.com").await;

    app.chat(Some(&token), json!({"message": "first", "conversation_id": "c-first"}))
        .await;
    app.chat(Some(&token), json!({"message": "second", "conversation_id": "c-second"}))
        .await;
    app.chat(Some(&token), json!({"message": "first again", "conversation_id": "c-first"}))
        .await;

    let list: Value = app
        .get_authorized("/conversations", &token)
        .await
        .json()
        .await
        .unwrap();
    let list = list.as_array().unwrap();

    assert_eq!(list.len(), 2);
    assert_eq!(list[0]["id"], "c-first");
    assert_eq!(list[0]["message_count"], 4);
    assert_eq!(list[0]["title"], "first");
    assert_eq!(list[1]["id"], "c-second");
}

#[tokio::test]
async fn other_users_see_only_their_own() {
    let app = common::spawn_app().await;
    let owner = app.token_for("hank@example.com").await;
    let other = app.token_for("ivy@example.com").await;

    app.chat(Some(&owner), json!({"message": "mine", "conversation_id": "hank-1"}))
        .await;

    let forbidden = app.get_authorized("/conversations/hank-1", &other).await;
    assert_eq!(forbidden.status().as_u16(), 403);

    let list: Value = app
        .get_authorized("/conversations", &other)
        .await
        .json()
        .await
        .unwrap();
    assert!(list.as_array().unwrap().is_empty());

    let missing = app.get_authorized("/conversations/nope", &owner).await;
    assert_eq!(missing.status().as_u16(), 404);
}

#[tokio::test]
async fn delete_removes_the_conversation() {
    let app = common::spawn_app().await;
    let owner = app.token_for("jack@example.com").await;
    let other = app.token_for("kim@example.com").await;
    app.chat(Some(&owner), json!({"message": "bye", "conversation_id": "jack-1"}))
        .await;

    let forbidden = app
        .client
        .delete(app.url("/conversations/jack-1"))
        .bearer_auth(&other)
        .send()
        .await
        .unwrap();
    assert_eq!(forbidden.status().as_u16(), 403);

    let response = app
        .client
        .delete(app.url("/conversations/jack-1"))
        .bearer_auth(&owner)
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["message"], "Conversation deleted");

    let gone = app.get_authorized("/conversations/jack-1", &owner).await;
    assert_eq!(gone.status().as_u16(), 404);

    let again = app
        .client
        .delete(app.url("/conversations/jack-1"))
        .bearer_auth(&owner)
        .send()
        .await
        .unwrap();
    assert_eq!(again.status().as_u16(), 404);
}
