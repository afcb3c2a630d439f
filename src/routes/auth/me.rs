use crate::db::{self, UserStore};
use crate::helpers::JsonResponse;
use crate::middleware::authentication::LoggedUser;
use crate::models::UserProfile;
use actix_web::{get, web, Responder, Result};
use std::sync::Arc;

#[tracing::instrument(name = "Get current user.", skip_all)]
#[get("/me")]
pub async fn me_handler(user: LoggedUser, user_store: web::Data<Arc<UserStore>>) -> Result<impl Responder> {
    db::user::fetch_by_email(user_store.get_ref().as_ref(), &user.email)
        .await
        .map_err(|err| JsonResponse::<UserProfile>::build().internal_server_error(err.to_string()))
        .and_then(|found| match found {
            Some(found) => Ok(web::Json(found.profile())),
            None => Err(JsonResponse::<UserProfile>::build().not_found("User not found")),
        })
}
