mod login;
mod me;
mod register;

pub use login::*;
pub use me::*;
pub use register::*;

use crate::configuration::Settings;
use crate::helpers::{auth, JsonResponse};
use crate::models::UserProfile;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: UserProfile,
}

fn issue_token(settings: &Settings, email: &str) -> Result<String, actix_web::Error> {
    auth::issue_token(
        email,
        settings.auth.jwt_secret.as_bytes(),
        chrono::Duration::minutes(settings.auth.token_ttl_minutes),
    )
    .map_err(|err| {
        tracing::error!("Failed to issue token: {}", err);
        JsonResponse::<AuthResponse>::build().internal_server_error("")
    })
}
