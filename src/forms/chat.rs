use crate::services::ChatRequest;
use serde::{Deserialize, Serialize};
use serde_valid::Validate;

#[derive(Serialize, Deserialize, Debug, Clone, Validate)]
pub struct ChatForm {
    #[validate(min_length = 1)]
    #[validate(max_length = 8000)]
    #[validate(pattern = r"\S")]
    pub message: String,
    #[validate(max_length = 200)]
    pub conversation_id: Option<String>,
    pub model_preference: Option<String>,
}

impl From<ChatForm> for ChatRequest {
    fn from(form: ChatForm) -> Self {
        ChatRequest {
            message: form.message,
            conversation_id: form.conversation_id,
            model_preference: form.model_preference,
        }
    }
}
