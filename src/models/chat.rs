use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Title length taken from the first user message.
const TITLE_CHARS: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Assistant => "assistant",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
    pub timestamp: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_used: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub task_type: Option<String>,
}

impl Message {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
            timestamp: Utc::now(),
            model_used: None,
            task_type: None,
        }
    }

    pub fn assistant(
        content: impl Into<String>,
        model_used: impl Into<String>,
        task_type: impl Into<String>,
    ) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
            timestamp: Utc::now(),
            model_used: Some(model_used.into()),
            task_type: Some(task_type.into()),
        }
    }
}

/// Who a conversation belongs to. Fixed when the conversation is created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "email", rename_all = "lowercase")]
pub enum Owner {
    User(String),
    Guest,
}

impl Owner {
    pub fn is_guest(&self) -> bool {
        matches!(self, Self::Guest)
    }

    pub fn label(&self) -> &str {
        match self {
            Self::User(email) => email.as_str(),
            Self::Guest => "guest",
        }
    }

    /// Id for a conversation started without a caller supplied id.
    pub fn new_conversation_id(&self) -> String {
        format!("{}_{}", self.label(), uuid::Uuid::new_v4())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Conversation {
    pub id: String,
    pub owner: Owner,
    pub title: String,
    pub messages: Vec<Message>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Conversation {
    pub fn new(id: impl Into<String>, owner: Owner, first_message: &str) -> Self {
        let now = Utc::now();
        Self {
            id: id.into(),
            owner,
            title: first_message.chars().take(TITLE_CHARS).collect(),
            messages: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Appends to the end of the history; messages are never reordered or removed.
    pub fn push(&mut self, message: Message) {
        self.updated_at = message.timestamp.max(self.updated_at);
        self.messages.push(message);
    }

    pub fn is_owned_by(&self, owner: &Owner) -> bool {
        &self.owner == owner
    }

    /// Guest conversations stay writable by whoever holds the id.
    pub fn is_writable_by(&self, caller: &Owner) -> bool {
        self.owner.is_guest() || self.is_owned_by(caller)
    }

    pub fn summary(&self) -> ConversationSummary {
        ConversationSummary {
            id: self.id.clone(),
            title: self.title.clone(),
            created_at: self.created_at,
            updated_at: self.updated_at,
            message_count: self.messages.len(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversationSummary {
    pub id: String,
    pub title: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub message_count: usize,
}
