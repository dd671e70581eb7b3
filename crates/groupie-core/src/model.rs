use serde::Serialize;
use std::collections::BTreeMap;

/// Numeric artist identifier shared by every upstream resource.
pub type ArtistId = u32;

/// Raw tour dates per artist, in upstream order and upstream encoding.
pub type DateSet = BTreeMap<ArtistId, Vec<String>>;

/// Raw "city-country" tokens per artist, in upstream order.
pub type LocationSet = BTreeMap<ArtistId, Vec<String>>;

/// Per-artist venue breakdown: location token to the dates played there.
pub type RelationSet = BTreeMap<ArtistId, BTreeMap<String, Vec<String>>>;

/// An artist as published by the artists resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtistRecord {
    pub id: ArtistId,
    pub name: String,
    pub image: String,
    pub creation_date: i32,
    pub first_album: String,
    pub members: Vec<String>,
}

/// An artist joined with its tour dates and locations.
///
/// Only [`crate::join`] builds these.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct ArtistView {
    pub id: ArtistId,
    pub name: String,
    pub image: String,
    pub creation_date: i32,
    pub first_album: String,
    pub members: Vec<String>,
    pub dates: Vec<String>,
    pub locations: String,
}

/// Single-artist response: the joined view plus its venue breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArtistDetail {
    #[serde(flatten)]
    pub artist: ArtistView,
    pub concerts: BTreeMap<String, Vec<String>>,
    pub back_url: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

/// A location token annotated with the coordinates it geocoded to.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeoLocation {
    pub name: String,
    pub lat: f64,
    pub lng: f64,
}

impl GeoLocation {
    pub fn new(name: impl Into<String>, at: Coordinates) -> Self {
        Self {
            name: name.into(),
            lat: at.lat,
            lng: at.lng,
        }
    }
}

/// Turn an upstream location token into a geocodable address.
///
/// `"los_angeles-usa"` becomes `"los angeles, usa"`.
pub fn humanize_location(token: &str) -> String {
    token
        .split('-')
        .map(|part| part.replace('_', " "))
        .collect::<Vec<_>>()
        .join(", ")
}
