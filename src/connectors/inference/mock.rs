use super::InferenceConnector;
use crate::connectors::errors::ConnectorError;
use crate::models::{GenerationParams, GenerationResult, Message, ModelDescriptor, TaskCategory};
use async_trait::async_trait;
use std::sync::Mutex;
use std::time::Duration;

/// What the mock saw on one call.
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub model_key: String,
    pub task: TaskCategory,
    pub history_len: usize,
}

/// Mock inference connector for testing - answers without HTTP
pub struct MockInferenceConnector {
    failure: Option<ConnectorError>,
    delay: Option<Duration>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl MockInferenceConnector {
    /// Echoes the last message back as the model answer.
    pub fn echo() -> Self {
        Self {
            failure: None,
            delay: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Fails every call with `err`.
    pub fn failing(err: ConnectorError) -> Self {
        Self {
            failure: Some(err),
            delay: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Sleeps for `delay` before answering, like a slow upstream.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().map(|calls| calls.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl InferenceConnector for MockInferenceConnector {
    async fn generate(
        &self,
        model: &ModelDescriptor,
        history: &[Message],
        _params: GenerationParams,
        task: TaskCategory,
    ) -> GenerationResult {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(RecordedCall {
                model_key: model.key.clone(),
                task,
                history_len: history.len(),
            });
        }

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        match &self.failure {
            Some(err) => err.clone().into_result(&model.key),
            None => {
                let last = history.last().map(|m| m.content.as_str()).unwrap_or_default();
                GenerationResult::success(format!("echo: {}", last), model, task)
            }
        }
    }
}
