//! Tour API client.
//!
//! One GET per resource kind, each decoded into the record sets the join
//! engine consumes. The base URL is injected so tests can point the client at
//! a stub server.

use serde::de::DeserializeOwned;
use std::fmt;
use std::time::Duration;
use tracing::debug;

use groupie_core::{ArtistRecord, DateSet, LocationSet, RelationSet};

use crate::error::UpstreamError;
use crate::wire::{ArtistEntry, DatesEntry, Listing, LocationsEntry, RelationEntry};

/// Public tour API base URL.
pub const DEFAULT_BASE_URL: &str = "https://groupietrackers.herokuapp.com/api";

const USER_AGENT: &str = concat!("groupie/", env!("CARGO_PKG_VERSION"));

/// The four upstream resources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    Artists,
    Dates,
    Locations,
    Relations,
}

impl Resource {
    /// Default path below the base URL.
    pub fn path(self) -> &'static str {
        match self {
            Self::Artists => "/artists",
            Self::Dates => "/dates",
            Self::Locations => "/locations",
            Self::Relations => "/relations",
        }
    }

    pub fn name(self) -> &'static str {
        &self.path()[1..]
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone)]
pub struct UpstreamClient {
    http: reqwest::Client,
    base_url: String,
    relations_path: String,
}

impl UpstreamClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            relations_path: Resource::Relations.path().to_string(),
        })
    }

    /// Serve relations from another path. The public tour API uses `/relation`.
    pub fn with_relations_path(mut self, path: &str) -> Self {
        let path = path.trim_matches('/');
        if !path.is_empty() {
            self.relations_path = format!("/{path}");
        }
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn path(&self, resource: Resource) -> &str {
        match resource {
            Resource::Relations => &self.relations_path,
            other => other.path(),
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, resource: Resource) -> Result<T, UpstreamError> {
        let url = format!("{}{}", self.base_url, self.path(resource));
        debug!(%resource, %url, "fetching upstream resource");

        let resp = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|source| UpstreamError::Fetch { resource, source })?;

        let status = resp.status();
        if !status.is_success() {
            return Err(UpstreamError::Status {
                resource,
                status: status.as_u16(),
            });
        }

        let body = resp
            .bytes()
            .await
            .map_err(|source| UpstreamError::Fetch { resource, source })?;

        serde_json::from_slice(&body).map_err(|source| UpstreamError::Decode { resource, source })
    }

    /// GET /artists, in upstream order.
    pub async fn fetch_artists(&self) -> Result<Vec<ArtistRecord>, UpstreamError> {
        let entries: Vec<ArtistEntry> = self.get_json(Resource::Artists).await?;
        Ok(entries.into_iter().map(ArtistRecord::from).collect())
    }

    pub async fn fetch_dates(&self) -> Result<DateSet, UpstreamError> {
        let listing: Listing<DatesEntry> = self.get_json(Resource::Dates).await?;
        Ok(listing.into_vec().into_iter().map(DatesEntry::into_pair).collect())
    }

    pub async fn fetch_locations(&self) -> Result<LocationSet, UpstreamError> {
        let listing: Listing<LocationsEntry> = self.get_json(Resource::Locations).await?;
        Ok(listing
            .into_vec()
            .into_iter()
            .map(|entry| (entry.id, entry.locations))
            .collect())
    }

    pub async fn fetch_relations(&self) -> Result<RelationSet, UpstreamError> {
        let listing: Listing<RelationEntry> = self.get_json(Resource::Relations).await?;
        Ok(listing.into_vec().into_iter().map(RelationEntry::into_pair).collect())
    }
}
