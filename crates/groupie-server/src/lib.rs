use axum::{http::HeaderValue, routing::get, Json, Router};
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    set_header::SetResponseHeaderLayer,
    trace::TraceLayer,
};

use groupie_upstream::{reqwest, GeocodingClient, UpstreamClient};

pub mod api;
pub mod config;

pub use config::Config;

/// Application state shared across handlers.
///
/// Holds only immutable clients; every request rebuilds its data from the
/// upstream API.
#[derive(Debug, Clone)]
pub struct AppState {
    pub upstream: UpstreamClient,
    pub geocoder: GeocodingClient,
    pub public_url: String,
}

impl AppState {
    pub fn from_config(config: &Config) -> Result<Self, reqwest::Error> {
        let timeout = Duration::from_secs(config.upstream_timeout_secs);
        Ok(Self {
            upstream: UpstreamClient::new(&config.api_url, timeout)?
                .with_relations_path(&config.relations_path),
            geocoder: GeocodingClient::new(&config.geocode_url, config.geocode_api_key.clone(), timeout)?,
            public_url: config.public_url.clone(),
        })
    }

    /// Link back to the artist listing.
    pub fn listing_url(&self) -> String {
        format!("{}/api/artists", self.public_url.trim_end_matches('/'))
    }
}

#[derive(Serialize)]
struct ApiStatus {
    status: &'static str,
    version: &'static str,
}

async fn healthz() -> Json<ApiStatus> {
    Json(ApiStatus {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

pub fn build_router(state: Arc<AppState>) -> Router {
    let api_routes = Router::new()
        .route("/artists", get(api::artists::list_artists))
        .route("/dates", get(api::resources::list_dates))
        .route("/locations", get(api::resources::list_locations))
        .route("/relations", get(api::resources::list_relations));

    Router::new()
        .route("/healthz", get(healthz))
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(SetResponseHeaderLayer::overriding(
            axum::http::header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            axum::http::header::X_FRAME_OPTIONS,
            HeaderValue::from_static("DENY"),
        ))
        .with_state(state)
}

/// CORS for the configured origins; `None` when no origin is configured.
pub fn cors_layer(origins: &[String]) -> Option<CorsLayer> {
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|s| HeaderValue::from_str(s).ok())
        .collect();
    if origins.is_empty() {
        return None;
    }
    tracing::info!("CORS allowed origins: {:?}", origins);
    Some(
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods([axum::http::Method::GET, axum::http::Method::OPTIONS])
            .allow_headers(tower_http::cors::Any),
    )
}
