use crate::middleware::authentication::Authentication;
use actix_web::dev::ServiceRequest;
use actix_web::HttpMessage;

#[tracing::instrument(name = "authenticate as anonym", skip(req))]
pub fn anonym(req: &mut ServiceRequest) -> Result<bool, String> {
    if req.extensions_mut().insert(Authentication::Anonymous).is_some() {
        return Err("request already authenticated".to_string());
    }

    Ok(true)
}
