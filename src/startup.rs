use crate::configuration::Settings;
use crate::connectors::{InferenceClient, InferenceConnector};
use crate::db::{ConversationStore, InMemoryRepository, UserStore};
use crate::helpers::JsonResponse;
use crate::middleware;
use crate::models::{Conversation, User};
use crate::routes;
use crate::services::{ChatService, ModelRegistry};
use actix_cors::Cors;
use actix_web::{dev::Server, error, web, App, HttpServer};
use std::net::TcpListener;
use std::sync::Arc;
use tracing_actix_web::TracingLogger;

pub async fn run(listener: TcpListener, settings: Settings) -> Result<Server, std::io::Error> {
    let registry = Arc::new(ModelRegistry::builtin());
    let conversations: Arc<ConversationStore> = Arc::new(InMemoryRepository::<Conversation>::new());
    let users: Arc<UserStore> = Arc::new(InMemoryRepository::<User>::new());

    let connector: Arc<dyn InferenceConnector> = Arc::new(
        InferenceClient::new(&settings.inference)
            .map_err(|err| std::io::Error::new(std::io::ErrorKind::Other, err))?,
    );

    let chat_service = web::Data::new(ChatService::new(
        &settings.inference,
        registry,
        connector,
        conversations.clone(),
    ));
    let conversations = web::Data::new(conversations);
    let users = web::Data::new(users);
    let settings = web::Data::new(settings);

    let json_config = web::JsonConfig::default().error_handler(|err, _req| {
        let msg = match &err {
            error::JsonPayloadError::Deserialize(err) => format!("Invalid request body: {}", err),
            _ => err.to_string(),
        };
        JsonResponse::<()>::build().bad_request(msg)
    });

    let server = HttpServer::new(move || {
        App::new()
            .wrap(middleware::authentication::Manager::new())
            .wrap(Cors::permissive())
            .wrap(TracingLogger::default())
            .app_data(json_config.clone())
            .app_data(settings.clone())
            .app_data(chat_service.clone())
            .app_data(conversations.clone())
            .app_data(users.clone())
            .service(web::scope("/health").service(routes::health_check))
            .service(web::scope("/models").service(routes::list_models))
            .service(web::scope("/chat").service(routes::chat::item))
            .service(
                web::scope("/auth")
                    .service(routes::auth::register_handler)
                    .service(routes::auth::login_handler)
                    .service(routes::auth::me_handler),
            )
            .service(
                web::scope("/conversations")
                    .service(routes::conversation::get::list)
                    .service(routes::conversation::get::item)
                    .service(routes::conversation::delete::item),
            )
    })
    .listen(listener)?
    .run();

    Ok(server)
}
