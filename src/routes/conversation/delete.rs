use crate::helpers::JsonResponse;
use crate::middleware::authentication::LoggedUser;
use crate::models::{Conversation, Owner};
use crate::services::{ChatError, ChatService};
use actix_web::{delete, web, Responder, Result};

#[tracing::instrument(name = "Delete conversation.", skip_all)]
#[delete("/{id}")]
pub async fn item(
    user: LoggedUser,
    path: web::Path<(String,)>,
    chat_service: web::Data<ChatService>,
) -> Result<impl Responder> {
    let id = path.into_inner().0;
    let owner = Owner::User(user.email.clone());

    chat_service
        .delete(&owner, &id)
        .await
        .map(|conversation| {
            JsonResponse::build()
                .set_item(conversation)
                .ok("Conversation deleted")
        })
        .map_err(|err| match err {
            ChatError::Forbidden => JsonResponse::<Conversation>::build().forbidden("Access denied"),
            ChatError::NotFound => {
                JsonResponse::<Conversation>::build().not_found("Conversation not found")
            }
            ChatError::Store(err) => {
                JsonResponse::<Conversation>::build().internal_server_error(err.to_string())
            }
        })
}
