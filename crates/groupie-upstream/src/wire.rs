//! JSON shapes published by the tour API.
//!
//! Decoding is lenient where the API has drifted between versions: list
//! resources may or may not be wrapped in `{"index": [...]}`, and dates may be
//! strings or integers. Everything leaves this module in one canonical form.

use chrono::DateTime;
use serde::Deserialize;
use std::collections::BTreeMap;

use groupie_core::{dates, ArtistId, ArtistRecord};

/// A date as it appears on the wire.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub(crate) enum DateValue {
    Text(String),
    /// Unix timestamp in seconds, used by older API revisions.
    Timestamp(i64),
}

impl DateValue {
    /// Canonical `DD-MM-YYYY` text (markers preserved). Timestamps outside
    /// chrono's range stay as their decimal text and never compare equal.
    pub(crate) fn into_text(self) -> String {
        match self {
            Self::Text(s) => s,
            Self::Timestamp(ts) => DateTime::from_timestamp(ts, 0)
                .map(|dt| dates::format(dt.date_naive()))
                .unwrap_or_else(|| ts.to_string()),
        }
    }
}

fn texts(values: Vec<DateValue>) -> Vec<String> {
    values.into_iter().map(DateValue::into_text).collect()
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum Listing<T> {
    Bare(Vec<T>),
    Indexed { index: Vec<T> },
}

impl<T> Listing<T> {
    pub(crate) fn into_vec(self) -> Vec<T> {
        match self {
            Self::Bare(items) => items,
            Self::Indexed { index } => index,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ArtistEntry {
    id: ArtistId,
    name: String,
    #[serde(default)]
    image: String,
    #[serde(default)]
    creation_date: i32,
    #[serde(default)]
    first_album: Option<DateValue>,
    #[serde(default)]
    members: Vec<String>,
}

impl From<ArtistEntry> for ArtistRecord {
    fn from(a: ArtistEntry) -> Self {
        Self {
            id: a.id,
            name: a.name,
            image: a.image,
            creation_date: a.creation_date,
            first_album: a.first_album.map(DateValue::into_text).unwrap_or_default(),
            members: a.members,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct DatesEntry {
    pub id: ArtistId,
    #[serde(default)]
    dates: Vec<DateValue>,
}

impl DatesEntry {
    pub(crate) fn into_pair(self) -> (ArtistId, Vec<String>) {
        (self.id, texts(self.dates))
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct LocationsEntry {
    pub id: ArtistId,
    #[serde(default)]
    pub locations: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RelationEntry {
    pub id: ArtistId,
    #[serde(rename = "datesLocations", default)]
    dates_locations: BTreeMap<String, Vec<DateValue>>,
}

impl RelationEntry {
    pub(crate) fn into_pair(self) -> (ArtistId, BTreeMap<String, Vec<String>>) {
        let venues = self
            .dates_locations
            .into_iter()
            .map(|(place, values)| (place, texts(values)))
            .collect();
        (self.id, venues)
    }
}
