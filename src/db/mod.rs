pub mod chat;
mod store;
pub mod user;

pub use chat::ConversationStore;
pub use store::{InMemoryRepository, Repository, StoreError};
pub use user::UserStore;
