use std::sync::Arc;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use groupie_server::{build_router, cors_layer, AppState, Config};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = Config::from_env();
    tracing::info!(api = %config.api_url, geocoder = %config.geocode_url, "upstream endpoints");
    if config.geocode_api_key.is_none() {
        tracing::warn!("GEOCODE_API_KEY not set, place lookups will likely be rejected by the provider");
    }

    let state = Arc::new(AppState::from_config(&config).expect("failed to build HTTP clients"));

    let app = build_router(state);
    let app = match cors_layer(&config.cors_origins) {
        Some(cors) => app.layer(cors),
        None => app,
    };

    let addr = config.bind_addr;
    tracing::info!(%addr, "server started");

    axum::serve(
        tokio::net::TcpListener::bind(addr)
            .await
            .expect("failed to bind listener"),
        app,
    )
    .await
    .expect("server error");
}
