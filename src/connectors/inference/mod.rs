//! Inference API connector
//!
//! Calls a hosted model in whichever wire format its descriptor declares and
//! folds every outcome, including transport failures, into a
//! [`GenerationResult`].

use crate::models::{GenerationParams, GenerationResult, Message, ModelDescriptor, TaskCategory};
use async_trait::async_trait;

pub mod client;
#[cfg(test)]
pub mod mock;

pub use client::InferenceClient;
#[cfg(test)]
pub use mock::MockInferenceConnector;

#[async_trait]
pub trait InferenceConnector: Send + Sync {
    /// One attempt, no retries. Never fails: errors come back as
    /// non-success results with descriptive content.
    async fn generate(
        &self,
        model: &ModelDescriptor,
        history: &[Message],
        params: GenerationParams,
        task: TaskCategory,
    ) -> GenerationResult;
}
