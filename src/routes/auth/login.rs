use super::{issue_token, AuthResponse};
use crate::configuration::Settings;
use crate::db::{self, UserStore};
use crate::forms::{self, normalize_email};
use crate::helpers::{auth, JsonResponse};
use actix_web::{post, web, Responder, Result};
use serde_valid::Validate;
use std::sync::Arc;

#[tracing::instrument(name = "Login.", skip_all)]
#[post("/login")]
pub async fn login_handler(
    form: web::Json<forms::LoginForm>,
    user_store: web::Data<Arc<UserStore>>,
    settings: web::Data<Settings>,
) -> Result<impl Responder> {
    if let Err(errors) = form.validate() {
        return Err(JsonResponse::<AuthResponse>::build().form_error(errors.to_string()));
    }

    let forms::LoginForm { email, password } = form.into_inner();
    let user = db::user::fetch_by_email(user_store.get_ref().as_ref(), &normalize_email(&email))
        .await
        .map_err(|err| JsonResponse::<AuthResponse>::build().internal_server_error(err.to_string()))?
        .ok_or_else(|| JsonResponse::<AuthResponse>::build().unauthorized("Invalid credentials"))?;

    let password_hash = user.password_hash.clone();
    let valid = web::block(move || auth::verify_password(&password, &password_hash))
        .await
        .map_err(|err| JsonResponse::<AuthResponse>::build().internal_server_error(err.to_string()))?;
    if !valid {
        return Err(JsonResponse::<AuthResponse>::build().unauthorized("Invalid credentials"));
    }

    let token = issue_token(&settings, &user.email)?;
    Ok(web::Json(AuthResponse {
        token,
        user: user.profile(),
    }))
}
