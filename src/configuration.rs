use serde::Deserialize;
use std::fmt;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub app_host: String,
    pub app_port: u16,
    pub auth: AuthSettings,
    pub inference: InferenceSettings,
}

#[derive(Clone, Deserialize)]
#[serde(default)]
pub struct AuthSettings {
    pub jwt_secret: String,
    pub token_ttl_minutes: i64,
}

/// How the chat orchestrator produces assistant replies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseStrategy {
    /// Route to a hosted model through the inference connector.
    Remote,
    /// Answer from the local keyword responder only.
    #[default]
    Fallback,
}

impl fmt::Display for ResponseStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Remote => write!(f, "remote"),
            Self::Fallback => write!(f, "fallback"),
        }
    }
}

#[derive(Clone, Deserialize)]
#[serde(default)]
pub struct InferenceSettings {
    pub strategy: ResponseStrategy,
    /// Base URL of the hosted inference API, model ids are appended to it
    pub base_url: String,
    pub api_key: String,
    pub timeout_secs: u64,
    pub max_tokens: u32,
    pub temperature: f32,
    /// Replace failed remote generations with the local responder
    pub fallback_on_error: bool,
}

impl Default for AuthSettings {
    fn default() -> Self {
        Self {
            jwt_secret: "change-me-in-production".to_string(),
            token_ttl_minutes: 60 * 24 * 7,
        }
    }
}

impl Default for InferenceSettings {
    fn default() -> Self {
        Self {
            strategy: ResponseStrategy::default(),
            base_url: "https://api-inference.huggingface.co/models".to_string(),
            api_key: String::new(),
            timeout_secs: 30,
            max_tokens: 500,
            temperature: 0.7,
            fallback_on_error: false,
        }
    }
}

impl fmt::Debug for AuthSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthSettings")
            .field("jwt_secret", &"***")
            .field("token_ttl_minutes", &self.token_ttl_minutes)
            .finish()
    }
}

impl fmt::Debug for InferenceSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InferenceSettings")
            .field("strategy", &self.strategy)
            .field("base_url", &self.base_url)
            .field("api_key", &if self.api_key.is_empty() { "" } else { "***" })
            .field("timeout_secs", &self.timeout_secs)
            .field("max_tokens", &self.max_tokens)
            .field("temperature", &self.temperature)
            .field("fallback_on_error", &self.fallback_on_error)
            .finish()
    }
}

impl Settings {
    pub fn address(&self) -> String {
        format!("{}:{}", self.app_host, self.app_port)
    }
}

pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // configuration.yaml is optional, MYGPT__* variables override it
    // (MYGPT__INFERENCE__STRATEGY=remote)
    let settings = config::Config::builder()
        .set_default("app_host", "127.0.0.1")?
        .set_default("app_port", 8000)?
        .add_source(config::File::with_name("configuration").required(false))
        .add_source(config::Environment::with_prefix("MYGPT").separator("__"))
        .build()?;

    let mut config: Settings = settings.try_deserialize()?;

    if let Some(api_key) = non_empty_env("HF_API_KEY") {
        config.inference.api_key = api_key;
    }
    if let Some(secret) = non_empty_env("JWT_SECRET") {
        config.auth.jwt_secret = secret;
    }

    Ok(config)
}

fn non_empty_env(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strategy_parses_lowercase_names() {
        let remote: ResponseStrategy = serde_json::from_str("\"remote\"").unwrap();
        let fallback: ResponseStrategy = serde_json::from_str("\"fallback\"").unwrap();
        assert_eq!(remote, ResponseStrategy::Remote);
        assert_eq!(fallback, ResponseStrategy::Fallback);
    }

    #[test]
    fn debug_output_hides_secrets() {
        let mut settings = Settings::default();
        settings.auth.jwt_secret = "top-secret".to_string();
        settings.inference.api_key = "hf_abcdef".to_string();

        let rendered = format!("{:?}", settings);
        assert!(!rendered.contains("top-secret"));
        assert!(!rendered.contains("hf_abcdef"));
    }

    #[test]
    fn partial_settings_fall_back_to_defaults() {
        let settings: Settings =
            serde_json::from_str(r#"{"app_port": 9000, "inference": {"strategy": "remote"}}"#)
                .unwrap();
        assert_eq!(settings.app_port, 9000);
        assert_eq!(settings.inference.strategy, ResponseStrategy::Remote);
        assert_eq!(settings.inference.timeout_secs, 30);
        assert_eq!(settings.auth.token_ttl_minutes, 60 * 24 * 7);
    }
}
