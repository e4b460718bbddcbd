use dotenvy::dotenv;
use std::sync::Arc;

use post_server::application::PostService;
use post_server::data::post_repository::InMemoryPostRepository;
use post_server::infrastructure::logging::init_logging;
use post_server::presentation::http_handlers;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize logging
    init_logging();

    // Bind address from the environment, defaults to all interfaces on 5000
    let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = std::env::var("PORT").unwrap_or_else(|_| "5000".to_string());
    let http_addr = format!("{}:{}", host, port);

    tracing::info!("Starting post server...");
    tracing::info!("HTTP server will listen on {}", http_addr);

    // Initialize services. The store is volatile: it starts empty and is
    // shared by all server workers through the repository lock.
    let post_repo = Arc::new(InMemoryPostRepository::new());
    let post_service = Arc::new(PostService::new(post_repo));

    tracing::info!("In-memory post store initialized");

    run_http_server(http_addr, post_service).await
}

/// Any origin may call the service, credentials included. The origin is
/// echoed back instead of a wildcard: actix-cors rejects the
/// wildcard-with-credentials combination.
fn configure_cors() -> actix_cors::Cors {
    use actix_cors::Cors;

    Cors::default()
        .allowed_origin_fn(|_origin, _req_head| true)
        .allow_any_method()
        .allow_any_header()
        .supports_credentials()
        .max_age(3600)
}

async fn run_http_server(addr: String, post_service: Arc<PostService>) -> anyhow::Result<()> {
    use actix_web::{middleware::Logger, web, App, HttpServer};

    tracing::info!("Configuring HTTP server...");

    let server = HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(configure_cors())
            .app_data(web::Data::new(post_service.clone()))
            .configure(http_handlers::configure)
    })
    .bind(&addr)?
    .run();

    tracing::info!("HTTP server running on {}", addr);

    server.await?;

    Ok(())
}
