use crate::configuration::ResponseStrategy;
use crate::services::ChatService;
use actix_web::{get, web, Responder, Result};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct Health {
    pub status: &'static str,
    pub mode: String,
    pub api: &'static str,
    pub default_model: String,
    pub version: &'static str,
}

#[tracing::instrument(name = "Health check.", skip_all)]
#[get("")]
pub async fn health_check(chat_service: web::Data<ChatService>) -> Result<impl Responder> {
    let api = match chat_service.strategy() {
        ResponseStrategy::Remote => "Hugging Face Inference API",
        ResponseStrategy::Fallback => "Rule-based fallback",
    };

    Ok(web::Json(Health {
        status: "healthy",
        mode: chat_service.strategy().to_string(),
        api,
        default_model: chat_service.registry().default_model().key.clone(),
        version: env!("CARGO_PKG_VERSION"),
    }))
}
