use mygpt::configuration::get_configuration;
use mygpt::startup::run;
use mygpt::telemetry::{get_subscriber, init_subscriber};
use std::net::TcpListener;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let subscriber = get_subscriber("mygpt".into(), "info".into(), std::io::stdout);
    init_subscriber(subscriber);

    let settings = get_configuration().expect("Failed to read configuration.");

    tracing::info!(
        strategy = %settings.inference.strategy,
        base_url = %settings.inference.base_url,
        fallback_on_error = settings.inference.fallback_on_error,
        "Chat responses configured"
    );
    if settings.inference.api_key.is_empty() {
        tracing::warn!("HF_API_KEY is not set, remote calls will be rejected upstream");
    }

    let address = settings.address();
    tracing::info!("Start server at {:?}", &address);
    let listener = TcpListener::bind(&address)
        .unwrap_or_else(|err| panic!("failed to bind to {}: {}", address, err));

    run(listener, settings).await?.await
}
