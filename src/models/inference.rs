use crate::models::TaskCategory;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Wire shape a remote model expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestFormat {
    /// OpenAI-style `/v1/chat/completions`
    Chat,
    /// Plain text-generation with an `inputs` transcript
    Standard,
}

/// Static description of a callable remote model.
///
/// Entries are capability metadata only; whether a model actually answers is
/// found out when it is called.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModelDescriptor {
    pub key: String,
    #[serde(rename = "id")]
    pub remote_id: String,
    pub tasks: Vec<TaskCategory>,
    /// Lower wins
    pub priority: u8,
    pub format: RequestFormat,
    pub description: String,
}

impl ModelDescriptor {
    pub fn new(
        key: &str,
        remote_id: &str,
        tasks: &[TaskCategory],
        priority: u8,
        format: RequestFormat,
        description: &str,
    ) -> Self {
        Self {
            key: key.to_string(),
            remote_id: remote_id.to_string(),
            tasks: tasks.to_vec(),
            priority,
            format,
            description: description.to_string(),
        }
    }

    pub fn supports(&self, task: TaskCategory) -> bool {
        self.tasks.contains(&task)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GenerationStatus {
    Success,
    Loading,
    Error,
}

impl fmt::Display for GenerationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success => write!(f, "success"),
            Self::Loading => write!(f, "loading"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Sampling parameters forwarded to the remote model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationParams {
    pub max_tokens: u32,
    pub temperature: f32,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            max_tokens: 500,
            temperature: 0.7,
        }
    }
}

/// Uniform outcome of one generation attempt, remote or local.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerationResult {
    pub content: String,
    pub model_used: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_id: Option<String>,
    pub task_type: String,
    pub status: GenerationStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<u16>,
}

pub const FALLBACK_MODEL: &str = "fallback";
pub const ERROR_TASK: &str = "error";

impl GenerationResult {
    pub fn success(content: String, model: &ModelDescriptor, task: TaskCategory) -> Self {
        Self {
            content,
            model_used: model.key.clone(),
            model_id: Some(model.remote_id.clone()),
            task_type: task.to_string(),
            status: GenerationStatus::Success,
            error_code: None,
        }
    }

    /// Reply produced by the local keyword responder.
    pub fn fallback(content: String) -> Self {
        Self {
            content,
            model_used: FALLBACK_MODEL.to_string(),
            model_id: None,
            task_type: FALLBACK_MODEL.to_string(),
            status: GenerationStatus::Success,
            error_code: None,
        }
    }

    pub fn failure(
        content: String,
        model_key: &str,
        status: GenerationStatus,
        error_code: Option<u16>,
    ) -> Self {
        Self {
            content,
            model_used: model_key.to_string(),
            model_id: None,
            task_type: ERROR_TASK.to_string(),
            status,
            error_code,
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == GenerationStatus::Success
    }
}
