//! Address-to-coordinate lookup.
//!
//! Issues exactly one provider request per call and keeps the provider's top
//! ranked result. Both the Google-style `geometry.location.{lat,lng}` and the
//! flat `geometry.{lat,lng}` result shapes are understood.

use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, warn};

use groupie_core::Coordinates;

use crate::error::GeocodeError;

/// Default geocoding endpoint.
pub const DEFAULT_GEOCODE_URL: &str = "https://maps.googleapis.com/maps/api/geocode/json";

// ── Provider response types ─────────────────────────────────────

#[derive(Deserialize)]
struct GeoResponse {
    #[serde(default)]
    results: Vec<GeoResult>,
}

#[derive(Deserialize)]
struct GeoResult {
    geometry: Geometry,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Geometry {
    Nested { location: LatLng },
    Flat(LatLng),
}

#[derive(Deserialize)]
struct LatLng {
    lat: f64,
    lng: f64,
}

impl From<Geometry> for Coordinates {
    fn from(g: Geometry) -> Self {
        let (Geometry::Nested { location: p } | Geometry::Flat(p)) = g;
        Coordinates { lat: p.lat, lng: p.lng }
    }
}

#[derive(Debug, Clone)]
pub struct GeocodingClient {
    http: reqwest::Client,
    endpoint: String,
    api_key: Option<String>,
}

impl GeocodingClient {
    pub fn new(endpoint: &str, api_key: Option<String>, timeout: Duration) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            endpoint: endpoint.to_string(),
            api_key: api_key.filter(|k| !k.is_empty()),
        })
    }

    fn request_url(&self, address: &str) -> String {
        let sep = if self.endpoint.contains('?') { '&' } else { '?' };
        let mut url = format!(
            "{}{sep}address={}",
            self.endpoint,
            urlencoding::encode(address)
        );
        if let Some(key) = &self.api_key {
            url.push_str("&key=");
            url.push_str(&urlencoding::encode(key));
        }
        url
    }

    /// Resolve an address to the provider's best match.
    pub async fn geocode(&self, address: &str) -> Result<Coordinates, GeocodeError> {
        debug!(address, "geocoding");

        let resp = self
            .http
            .get(self.request_url(address))
            .send()
            .await
            .map_err(|e| GeocodeError::Transport(e.to_string()))?;

        if !resp.status().is_success() {
            warn!(status = %resp.status(), "geocoding provider returned error");
            return Err(GeocodeError::Transport(format!(
                "provider returned HTTP {}",
                resp.status()
            )));
        }

        let body: GeoResponse = resp
            .json()
            .await
            .map_err(|e| GeocodeError::Transport(format!("failed to parse provider response: {e}")))?;

        body.results
            .into_iter()
            .next()
            .map(|r| Coordinates::from(r.geometry))
            .ok_or_else(|| GeocodeError::NotFound(address.to_string()))
    }
}
