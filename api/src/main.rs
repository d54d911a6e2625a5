mod config;
mod handler;
mod service;

use axum::{routing::any, Router};
use connectors::{ExchangeClients, ExchangeConfig};
use handler::SharedService;
use service::PriceService;
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Build the router serving the price endpoint
pub(crate) fn app(service: SharedService) -> Router {
    let cors = CorsLayer::new()
        .allow_methods(Any)
        .allow_origin(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/binance-price", any(handler::binance_price))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(service)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("Starting price relay API");

    let api_config = config::ApiConfig::from_env();
    let exchange_config = ExchangeConfig::from_env();
    info!("Trading mode: {}", exchange_config.mode);

    // Built once; every request shares these clients
    let clients = ExchangeClients::new(&exchange_config);
    let service = Arc::new(PriceService::new(clients));

    let router = app(service);

    let addr = api_config.socket_addr()?;
    info!("Listening on {}", addr);

    axum::Server::bind(&addr)
        .serve(router.into_make_service())
        .await?;

    Ok(())
}
