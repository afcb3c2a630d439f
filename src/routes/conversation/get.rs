use super::fetch_owned;
use crate::db::{self, ConversationStore};
use crate::helpers::JsonResponse;
use crate::middleware::authentication::LoggedUser;
use crate::models::{ConversationSummary, Owner};
use actix_web::{get, web, Responder, Result};
use std::sync::Arc;

/// GET /conversations
/// Summaries of the caller's conversations, most recently updated first.
#[tracing::instrument(name = "List conversations.", skip_all)]
#[get("")]
pub async fn list(
    user: LoggedUser,
    store: web::Data<Arc<ConversationStore>>,
) -> Result<impl Responder> {
    let owner = Owner::User(user.email.clone());
    db::chat::fetch_by_owner(store.get_ref().as_ref(), &owner)
        .await
        .map(|conversations| {
            let summaries = conversations
                .iter()
                .map(|conversation| conversation.summary())
                .collect::<Vec<ConversationSummary>>();
            web::Json(summaries)
        })
        .map_err(|err| {
            JsonResponse::<ConversationSummary>::build().internal_server_error(err.to_string())
        })
}

#[tracing::instrument(name = "Get conversation.", skip_all)]
#[get("/{id}")]
pub async fn item(
    user: LoggedUser,
    path: web::Path<(String,)>,
    store: web::Data<Arc<ConversationStore>>,
) -> Result<impl Responder> {
    let id = path.into_inner().0;
    let owner = Owner::User(user.email.clone());
    fetch_owned(store.get_ref().as_ref(), &id, &owner)
        .await
        .map(web::Json)
}
