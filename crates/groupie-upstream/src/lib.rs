//! HTTP clients for the tour API and the geocoding provider.

pub mod client;
pub mod error;
pub mod geocode;
mod wire;

pub use client::{Resource, UpstreamClient, DEFAULT_BASE_URL};
pub use error::{GeocodeError, UpstreamError};
pub use geocode::{GeocodingClient, DEFAULT_GEOCODE_URL};

/// Re-export for convenience
pub use reqwest;
