pub mod delete;
pub mod get;

use crate::db::{self, ConversationStore};
use crate::helpers::JsonResponse;
use crate::models::{Conversation, Owner};

/// Loads a conversation and checks it belongs to `owner`.
async fn fetch_owned(
    store: &ConversationStore,
    id: &str,
    owner: &Owner,
) -> Result<Conversation, actix_web::Error> {
    db::chat::fetch(store, id)
        .await
        .map_err(|err| JsonResponse::<Conversation>::build().internal_server_error(err.to_string()))
        .and_then(|conversation| match conversation {
            Some(conversation) if !conversation.is_owned_by(owner) => {
                Err(JsonResponse::<Conversation>::build().forbidden("Access denied"))
            }
            Some(conversation) => Ok(conversation),
            None => Err(JsonResponse::<Conversation>::build().not_found("Conversation not found")),
        })
}
