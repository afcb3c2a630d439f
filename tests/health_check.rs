mod common;

use serde_json::Value;

#[tokio::test]
async fn health_check_works() {
    let app = common::spawn_app().await;

    let response = app
        .client
        .get(app.url("/health"))
        .send()
        .await
        .expect("Failed to execute request.");

    assert!(response.status().is_success());
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["mode"], "fallback");
    assert_eq!(body["default_model"], "llama-3.2-3b");
    assert!(body["version"].is_string());
}

#[tokio::test]
async fn models_lists_registry_in_declaration_order() {
    let app = common::spawn_app().await;

    let response = app
        .client
        .get(app.url("/models"))
        .send()
        .await
        .expect("Failed to execute request.");

    assert!(response.status().is_success());
    let body: Value = response.json().await.unwrap();
    let models = body["models"].as_array().unwrap();
    assert_eq!(models.len(), 9);
    assert_eq!(models[0]["key"], "mistral-7b");
    assert_eq!(models[0]["id"], "mistralai/Mistral-7B-Instruct-v0.3");
    assert_eq!(models[8]["format"], "standard");
    assert_eq!(body["task_types"].as_array().unwrap().len(), 7);
}
