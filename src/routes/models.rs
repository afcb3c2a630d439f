use crate::models::{ModelDescriptor, TaskCategory};
use crate::services::ChatService;
use actix_web::{get, web, HttpResponse};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ModelCatalog<'a> {
    pub mode: String,
    pub models: &'a [ModelDescriptor],
    pub task_types: &'static [TaskCategory],
}

/// GET /models
/// Registry entries with their capabilities, in declaration order.
#[tracing::instrument(name = "List models.", skip_all)]
#[get("")]
pub async fn list_models(chat_service: web::Data<ChatService>) -> HttpResponse {
    HttpResponse::Ok().json(ModelCatalog {
        mode: chat_service.strategy().to_string(),
        models: chat_service.registry().models(),
        task_types: &TaskCategory::ALL,
    })
}
