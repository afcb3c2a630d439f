pub mod chat;
pub mod classifier;
pub mod fallback;
pub mod model_registry;

pub use chat::{ChatError, ChatReply, ChatRequest, ChatService};
pub use model_registry::{ModelRegistry, DEFAULT_MODEL_KEY};
