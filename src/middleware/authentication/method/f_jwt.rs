use crate::configuration::Settings;
use crate::helpers::auth::{extract_bearer_token, verify_token};
use crate::middleware::authentication::{get_header, Authentication};
use crate::models::Identity;
use actix_web::dev::ServiceRequest;
use actix_web::{web, HttpMessage};
use std::sync::Arc;

/// Returns `Ok(false)` when no Authorization header is present so the next
/// method can run. A token that fails verification is recorded as rejected:
/// routes requiring a user answer 401, optional ones treat the caller as guest.
#[tracing::instrument(name = "Authenticate with JWT", skip(req))]
pub fn try_jwt(req: &mut ServiceRequest) -> Result<bool, String> {
    let authorization = match get_header::<String>(req, "authorization")? {
        Some(authorization) => authorization,
        None => return Ok(false),
    };

    let secret = req
        .app_data::<web::Data<Settings>>()
        .map(|settings| settings.auth.jwt_secret.clone())
        .ok_or_else(|| "auth settings are not configured".to_string())?;

    let outcome = match extract_bearer_token(&authorization)
        .and_then(|token| verify_token(token, secret.as_bytes()))
    {
        Ok(claims) => {
            tracing::debug!("JWT authentication successful");
            Authentication::User(Arc::new(Identity { email: claims.sub }))
        }
        Err(err) => {
            tracing::info!("JWT rejected: {}", err);
            Authentication::Rejected(err.to_string())
        }
    };

    if req.extensions_mut().insert(outcome).is_some() {
        return Err("request already authenticated".to_string());
    }

    Ok(true)
}
