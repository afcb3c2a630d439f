use crate::models::{GenerationResult, GenerationStatus};

/// Longest transport error text echoed back to the user.
const MAX_ERROR_DETAIL: usize = 100;

/// Errors that can occur while talking to the inference API
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConnectorError {
    /// 503: the model is cold and being loaded
    #[error("model is loading")]
    Loading,
    /// 401 / 403
    #[error("authentication rejected ({0})")]
    Unauthorized(u16),
    /// 429
    #[error("rate limited")]
    RateLimited,
    /// 410: endpoint retired upstream
    #[error("model endpoint is gone")]
    Gone,
    /// Any other non-200 status
    #[error("unexpected status {0}")]
    Status(u16),
    /// 200 whose body carried no generated text
    #[error("response without generated text")]
    EmptyResponse,
    /// Connection failure, timeout, unreadable body
    #[error("{0}")]
    Transport(String),
}

impl ConnectorError {
    pub fn from_status(status: u16) -> Self {
        match status {
            503 => Self::Loading,
            401 | 403 => Self::Unauthorized(status),
            429 => Self::RateLimited,
            410 => Self::Gone,
            other => Self::Status(other),
        }
    }

    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Loading => Some(503),
            Self::Unauthorized(code) | Self::Status(code) => Some(*code),
            Self::RateLimited => Some(429),
            Self::Gone => Some(410),
            Self::EmptyResponse => Some(200),
            Self::Transport(_) => None,
        }
    }

    /// Human readable text shown to the user in place of a model answer.
    pub fn user_message(&self) -> String {
        match self {
            Self::Loading => {
                "⏳ Model is loading (first request takes ~20 seconds). Please try again!".to_string()
            }
            Self::Unauthorized(_) => {
                "🔑 API authentication failed. Please check your Hugging Face token.".to_string()
            }
            Self::RateLimited => {
                "⏸️ Rate limit reached. Please wait a moment and try again.".to_string()
            }
            Self::Gone => "⚠️ Model endpoint is no longer available. Please pick another model."
                .to_string(),
            Self::Status(code) => format!("⚠️ AI service error ({}). Please try again.", code),
            Self::EmptyResponse => "⚠️ AI service error (200). Please try again.".to_string(),
            Self::Transport(detail) => {
                let detail: String = detail.chars().take(MAX_ERROR_DETAIL).collect();
                format!("❌ Error: {}", detail)
            }
        }
    }

    /// Fold the error into the uniform result the orchestrator stores.
    pub fn into_result(self, model_key: &str) -> GenerationResult {
        let status = match self {
            Self::Loading => GenerationStatus::Loading,
            _ => GenerationStatus::Error,
        };
        GenerationResult::failure(self.user_message(), model_key, status, self.status_code())
    }
}

impl From<reqwest::Error> for ConnectorError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Transport(format!("Request timeout: {}", err))
        } else if err.is_connect() {
            Self::Transport(format!("Connection failed: {}", err))
        } else {
            Self::Transport(err.to_string())
        }
    }
}
