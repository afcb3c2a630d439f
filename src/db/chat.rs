use super::{Repository, StoreError};
use crate::models::{Conversation, Owner};

pub type ConversationStore = dyn Repository<Conversation>;

pub async fn fetch(store: &ConversationStore, id: &str) -> Result<Option<Conversation>, StoreError> {
    store.get(id).await
}

pub async fn upsert(store: &ConversationStore, conversation: Conversation) -> Result<(), StoreError> {
    let id = conversation.id.clone();
    store.put(&id, conversation).await
}

pub async fn delete(store: &ConversationStore, id: &str) -> Result<Option<Conversation>, StoreError> {
    store.delete(id).await
}

/// Conversations of `owner`, most recently updated first.
pub async fn fetch_by_owner(
    store: &ConversationStore,
    owner: &Owner,
) -> Result<Vec<Conversation>, StoreError> {
    let mut conversations: Vec<Conversation> = store
        .list()
        .await?
        .into_iter()
        .filter(|conversation| conversation.is_owned_by(owner))
        .collect();
    conversations.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
    Ok(conversations)
}
