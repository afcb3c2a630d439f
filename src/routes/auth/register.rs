use super::{issue_token, AuthResponse};
use crate::configuration::Settings;
use crate::db::{self, UserStore};
use crate::forms::{self, normalize_email};
use crate::helpers::{auth, JsonResponse};
use crate::models::User;
use actix_web::{post, web, Responder, Result};
use serde_valid::Validate;
use std::sync::Arc;

#[tracing::instrument(name = "Register user.", skip_all)]
#[post("/register")]
pub async fn register_handler(
    form: web::Json<forms::RegisterForm>,
    user_store: web::Data<Arc<UserStore>>,
    settings: web::Data<Settings>,
) -> Result<impl Responder> {
    if let Err(errors) = form.validate() {
        return Err(JsonResponse::<AuthResponse>::build().form_error(errors.to_string()));
    }

    let forms::RegisterForm {
        email,
        password,
        name,
    } = form.into_inner();
    let email = normalize_email(&email);
    let user_store = user_store.get_ref().as_ref();

    let existing = db::user::fetch_by_email(user_store, &email)
        .await
        .map_err(|err| JsonResponse::<AuthResponse>::build().internal_server_error(err.to_string()))?;
    if existing.is_some() {
        return Err(JsonResponse::<AuthResponse>::build().conflict("Email already registered"));
    }

    let password_hash = web::block(move || auth::hash_password(&password))
        .await
        .map_err(|err| JsonResponse::<AuthResponse>::build().internal_server_error(err.to_string()))?
        .map_err(|err| {
            tracing::error!("Failed to hash password: {}", err);
            JsonResponse::<AuthResponse>::build().internal_server_error("")
        })?;

    let user = User::new(email, name.trim().to_string(), password_hash);
    let inserted = db::user::insert(user_store, user.clone())
        .await
        .map_err(|err| JsonResponse::<AuthResponse>::build().internal_server_error(err.to_string()))?;
    // lost a race with a concurrent registration
    if !inserted {
        return Err(JsonResponse::<AuthResponse>::build().conflict("Email already registered"));
    }
    tracing::info!(email = %user.email, "user registered");

    let token = issue_token(&settings, &user.email)?;
    Ok(web::Json(AuthResponse {
        token,
        user: user.profile(),
    }))
}
