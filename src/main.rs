use axum::{extract::Request, ServiceExt};
use dispatch_web::{app, config::Config};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    if dotenv::dotenv().is_ok() {
        info!("Loaded .env file");
    }

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    };

    info!(
        "Starting app on {} with base {}...",
        config.bind_addr, config.base_url
    );
    let app = app::gen_app(&config);

    let listener = match tokio::net::TcpListener::bind(&config.bind_addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!("Failed to bind {}: {}", config.bind_addr, e);
            std::process::exit(1);
        }
    };

    if let Err(e) = axum::serve(listener, ServiceExt::<Request>::into_make_service(app)).await {
        error!("Server stopped: {}", e);
    }
}
