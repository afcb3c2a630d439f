use crate::forms;
use crate::helpers::JsonResponse;
use crate::middleware::authentication::Caller;
use crate::services::{ChatError, ChatReply, ChatService};
use actix_web::{post, web, Responder, Result};
use serde_valid::Validate;

/// POST /chat
/// Open to guests; a verified bearer token attaches the conversation to the user.
#[tracing::instrument(name = "Chat.", skip_all)]
#[post("")]
pub async fn item(
    caller: Caller,
    form: web::Json<forms::ChatForm>,
    chat_service: web::Data<ChatService>,
) -> Result<impl Responder> {
    if let Err(errors) = form.validate() {
        let errors = errors.to_string();
        tracing::debug!("Invalid chat form received {:?}", &errors);
        return Err(JsonResponse::<ChatReply>::build().form_error(errors));
    }

    chat_service
        .handle(caller.owner(), form.into_inner().into())
        .await
        .map(web::Json)
        .map_err(|err| match err {
            ChatError::Forbidden => JsonResponse::<ChatReply>::build().forbidden("Access denied"),
            ChatError::NotFound => {
                JsonResponse::<ChatReply>::build().not_found("Conversation not found")
            }
            ChatError::Store(err) => {
                tracing::error!("Failed to store conversation: {:?}", err);
                JsonResponse::<ChatReply>::build().internal_server_error(err.to_string())
            }
        })
}
