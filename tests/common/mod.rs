#![allow(dead_code)]

use mygpt::configuration::{ResponseStrategy, Settings};
use serde_json::{json, Value};
use std::net::TcpListener;

pub const JWT_SECRET: &str = "integration-test-secret";

pub struct TestApp {
    pub address: String,
    pub settings: Settings,
    pub client: reqwest::Client,
}

pub fn test_settings() -> Settings {
    let mut settings = Settings::default();
    settings.app_host = "127.0.0.1".to_string();
    settings.auth.jwt_secret = JWT_SECRET.to_string();
    settings.inference.strategy = ResponseStrategy::Fallback;
    settings
}

// the server runs on the test runtime, bound to a random port
pub async fn spawn_app_with_configuration(mut settings: Settings) -> TestApp {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind random port");
    let port = listener.local_addr().unwrap().port();
    settings.app_port = port;
    let address = format!("http://127.0.0.1:{}", port);

    let server = mygpt::startup::run(listener, settings.clone())
        .await
        .expect("Failed to bind address.");
    let _ = tokio::spawn(server);

    TestApp {
        address,
        settings,
        client: reqwest::Client::new(),
    }
}

pub async fn spawn_app() -> TestApp {
    spawn_app_with_configuration(test_settings()).await
}

/// Remote strategy pointed at a mock inference API.
pub async fn spawn_remote_app(base_url: &str) -> TestApp {
    let mut settings = test_settings();
    settings.inference.strategy = ResponseStrategy::Remote;
    settings.inference.base_url = base_url.to_string();
    settings.inference.api_key = "hf_test".to_string();
    settings.inference.timeout_secs = 2;
    spawn_app_with_configuration(settings).await
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.address, path)
    }

    pub async fn register(&self, email: &str, password: &str, name: &str) -> reqwest::Response {
        self.client
            .post(self.url("/auth/register"))
            .json(&json!({"email": email, "password": password, "name": name}))
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn login(&self, email: &str, password: &str) -> reqwest::Response {
        self.client
            .post(self.url("/auth/login"))
            .json(&json!({"email": email, "password": password}))
            .send()
            .await
            .expect("Failed to execute request.")
    }

    /// Registers a fresh account and returns its token.
    pub async fn token_for(&self, email: &str) -> String {
        let response = self.register(email, "password123", "Tester").await;
        assert_eq!(response.status().as_u16(), 200);
        let body: Value = response.json().await.unwrap();
        body["token"].as_str().unwrap().to_string()
    }

    pub async fn chat(&self, token: Option<&str>, body: Value) -> reqwest::Response {
        let mut request = self.client.post(self.url("/chat")).json(&body);
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }
        request.send().await.expect("Failed to execute request.")
    }

    pub async fn get_authorized(&self, path: &str, token: &str) -> reqwest::Response {
        self.client
            .get(self.url(path))
            .bearer_auth(token)
            .send()
            .await
            .expect("Failed to execute request.")
    }
}
