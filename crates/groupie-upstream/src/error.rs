//! Upstream error types.

use thiserror::Error;

use crate::client::Resource;

#[derive(Error, Debug)]
pub enum UpstreamError {
    #[error("failed to reach {resource} endpoint: {source}")]
    Fetch {
        resource: Resource,
        #[source]
        source: reqwest::Error,
    },

    #[error("{resource} endpoint returned HTTP {status}")]
    Status { resource: Resource, status: u16 },

    #[error("malformed {resource} payload: {source}")]
    Decode {
        resource: Resource,
        #[source]
        source: serde_json::Error,
    },
}

impl UpstreamError {
    pub fn resource(&self) -> Resource {
        match self {
            Self::Fetch { resource, .. }
            | Self::Status { resource, .. }
            | Self::Decode { resource, .. } => *resource,
        }
    }

    /// True for a payload that arrived but did not have the expected shape.
    pub fn is_decode(&self) -> bool {
        matches!(self, Self::Decode { .. })
    }
}

#[derive(Error, Debug)]
pub enum GeocodeError {
    #[error("no geocoding result for {0:?}")]
    NotFound(String),

    #[error("geocoding transport error: {0}")]
    Transport(String),
}
