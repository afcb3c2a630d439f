//! Chat orchestration: conversation bookkeeping around one generation step.

use crate::configuration::{InferenceSettings, ResponseStrategy};
use crate::connectors::InferenceConnector;
use crate::db::{self, ConversationStore, StoreError};
use crate::helpers::KeyedLock;
use crate::models::{
    Conversation, GenerationParams, GenerationResult, GenerationStatus, Message, Owner,
};
use crate::services::{classifier, fallback, ModelRegistry};
use futures::FutureExt;
use serde::Serialize;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct ChatRequest {
    pub message: String,
    pub conversation_id: Option<String>,
    pub model_preference: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChatReply {
    pub response: String,
    pub conversation_id: String,
    pub is_guest: bool,
    pub model_used: String,
    pub task_type: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    #[error("Conversation belongs to another user")]
    Forbidden,
    #[error("Conversation not found")]
    NotFound,
    #[error(transparent)]
    Store(#[from] StoreError),
}

pub struct ChatService {
    strategy: ResponseStrategy,
    fallback_on_error: bool,
    params: GenerationParams,
    registry: Arc<ModelRegistry>,
    connector: Arc<dyn InferenceConnector>,
    conversations: Arc<ConversationStore>,
    locks: KeyedLock,
}

impl ChatService {
    pub fn new(
        settings: &InferenceSettings,
        registry: Arc<ModelRegistry>,
        connector: Arc<dyn InferenceConnector>,
        conversations: Arc<ConversationStore>,
    ) -> Self {
        Self {
            strategy: settings.strategy,
            fallback_on_error: settings.fallback_on_error,
            params: GenerationParams {
                max_tokens: settings.max_tokens,
                temperature: settings.temperature,
            },
            registry,
            connector,
            conversations,
            locks: KeyedLock::new(),
        }
    }

    pub fn strategy(&self) -> ResponseStrategy {
        self.strategy
    }

    pub fn registry(&self) -> &ModelRegistry {
        &self.registry
    }

    /// Appends the caller's message and the generated answer to the
    /// conversation, creating it on first use.
    ///
    /// Requests on the same conversation id are processed one at a time; the
    /// lock is held from the read until the updated record is stored. Remote
    /// failures never surface here, they come back as reply content.
    #[tracing::instrument(
        name = "Handle chat message.",
        skip(self, owner, request),
        fields(owner = %owner.label(), strategy = %self.strategy)
    )]
    pub async fn handle(&self, owner: Owner, request: ChatRequest) -> Result<ChatReply, ChatError> {
        let ChatRequest {
            message,
            conversation_id,
            model_preference,
        } = request;

        let conversation_id = conversation_id
            .filter(|id| !id.trim().is_empty())
            .unwrap_or_else(|| owner.new_conversation_id());

        let _guard = self.locks.lock(&conversation_id).await;

        let mut conversation =
            match db::chat::fetch(self.conversations.as_ref(), &conversation_id).await? {
                Some(conversation) if !conversation.is_writable_by(&owner) => {
                    tracing::warn!(conversation_id = %conversation_id, "conversation owned by another user");
                    return Err(ChatError::Forbidden);
                }
                Some(conversation) => conversation,
                None => Conversation::new(conversation_id.clone(), owner.clone(), &message),
            };

        conversation.push(Message::user(message.clone()));

        let result = self
            .generate(&conversation.messages, &message, model_preference.as_deref())
            .await;

        conversation.push(Message::assistant(
            result.content.clone(),
            result.model_used.clone(),
            result.task_type.clone(),
        ));
        db::chat::upsert(self.conversations.as_ref(), conversation).await?;

        Ok(ChatReply {
            response: result.content,
            conversation_id,
            is_guest: owner.is_guest(),
            model_used: result.model_used,
            task_type: result.task_type,
        })
    }

    /// Removes a conversation owned by `owner`.
    ///
    /// Waits for any chat in flight on the same id, so a reply being
    /// generated cannot write the record back after it is gone.
    #[tracing::instrument(name = "Delete conversation.", skip(self, owner), fields(owner = %owner.label()))]
    pub async fn delete(&self, owner: &Owner, id: &str) -> Result<Conversation, ChatError> {
        let _guard = self.locks.lock(id).await;

        match db::chat::fetch(self.conversations.as_ref(), id).await? {
            Some(conversation) if !conversation.is_owned_by(owner) => {
                return Err(ChatError::Forbidden);
            }
            Some(_) => {}
            None => return Err(ChatError::NotFound),
        }

        db::chat::delete(self.conversations.as_ref(), id)
            .await?
            .ok_or(ChatError::NotFound)
    }

    async fn generate(
        &self,
        history: &[Message],
        latest: &str,
        model_preference: Option<&str>,
    ) -> GenerationResult {
        if self.strategy == ResponseStrategy::Fallback {
            return GenerationResult::fallback(fallback::respond(latest));
        }

        let task = classifier::classify(latest);
        let model = self.registry.select(task, model_preference);
        tracing::info!(task = %task, model = %model.key, "routing message");

        let result = AssertUnwindSafe(self.connector.generate(model, history, self.params, task))
            .catch_unwind()
            .await
            .unwrap_or_else(|_| {
                tracing::error!(model = %model.key, "inference call panicked");
                GenerationResult::failure(
                    "❌ Error: unexpected failure while generating a reply".to_string(),
                    &model.key,
                    GenerationStatus::Error,
                    None,
                )
            });

        if !result.is_success() {
            tracing::warn!(
                model = %result.model_used,
                status = %result.status,
                error_code = ?result.error_code,
                "remote generation failed"
            );
            if self.fallback_on_error {
                return GenerationResult::fallback(fallback::respond(latest));
            }
        }

        result
    }
}
