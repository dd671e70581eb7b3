//! Raw upstream resources, re-served as JSON.
//!
//! Entries come out ordered by artist ID, whatever order the upstream used.

use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;

use groupie_core::model::humanize_location;
use groupie_core::{ArtistId, GeoLocation};
use groupie_upstream::{GeocodeError, GeocodingClient};

use super::error::{self, ApiError};
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct DatesEntry {
    pub id: ArtistId,
    pub dates: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct LocationsEntry {
    pub id: ArtistId,
    pub locations: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Vec<GeoLocation>>,
}

#[derive(Debug, Serialize)]
pub struct RelationsEntry {
    pub id: ArtistId,
    #[serde(rename = "datesLocations")]
    pub dates_locations: BTreeMap<String, Vec<String>>,
}

#[derive(Debug, Default, Deserialize)]
pub struct LocationsParams {
    #[serde(default)]
    pub geocode: bool,
}

/// GET /api/dates
pub async fn list_dates(State(state): State<Arc<AppState>>) -> Result<Json<Vec<DatesEntry>>, ApiError> {
    let dates = state
        .upstream
        .fetch_dates()
        .await
        .map_err(|e| error::upstream_failure(&e))?;
    Ok(Json(
        dates
            .into_iter()
            .map(|(id, dates)| DatesEntry { id, dates })
            .collect(),
    ))
}

/// GET /api/locations?geocode=true
///
/// With `geocode`, each entry carries the coordinates of the locations the
/// provider could resolve. Unresolved locations are left out of
/// `coordinates` but stay in `locations`.
pub async fn list_locations(
    State(state): State<Arc<AppState>>,
    Query(params): Query<LocationsParams>,
) -> Result<Json<Vec<LocationsEntry>>, ApiError> {
    let locations = state
        .upstream
        .fetch_locations()
        .await
        .map_err(|e| error::upstream_failure(&e))?;

    let mut entries = Vec::with_capacity(locations.len());
    for (id, tokens) in locations {
        let coordinates = if params.geocode {
            Some(annotate(&state.geocoder, &tokens).await)
        } else {
            None
        };
        entries.push(LocationsEntry {
            id,
            locations: tokens,
            coordinates,
        });
    }
    Ok(Json(entries))
}

/// GET /api/relations
pub async fn list_relations(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<RelationsEntry>>, ApiError> {
    let relations = state
        .upstream
        .fetch_relations()
        .await
        .map_err(|e| error::upstream_failure(&e))?;
    Ok(Json(
        relations
            .into_iter()
            .map(|(id, dates_locations)| RelationsEntry { id, dates_locations })
            .collect(),
    ))
}

/// Geocode each location token in turn, skipping the ones that fail.
pub(crate) async fn annotate(geocoder: &GeocodingClient, tokens: &[String]) -> Vec<GeoLocation> {
    let mut resolved = Vec::with_capacity(tokens.len());
    for token in tokens {
        match geocoder.geocode(&humanize_location(token)).await {
            Ok(at) => resolved.push(GeoLocation::new(token.as_str(), at)),
            Err(GeocodeError::NotFound(_)) => {
                tracing::debug!(location = %token, "no coordinates, skipping");
            }
            Err(e) => {
                tracing::warn!(location = %token, "skipping location annotation: {e}");
            }
        }
    }
    resolved
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locations_entry_omits_coordinates_when_not_requested() {
        let entry = LocationsEntry {
            id: 1,
            locations: vec!["paris-france".into()],
            coordinates: None,
        };
        let json = serde_json::to_value(&entry).unwrap();
        assert!(json.get("coordinates").is_none());
        assert_eq!(json["locations"][0], "paris-france");
    }

    #[test]
    fn test_relations_entry_uses_upstream_field_name() {
        let entry = RelationsEntry {
            id: 2,
            dates_locations: BTreeMap::from([("oslo-norway".to_string(), vec!["01-01-2000".to_string()])]),
        };
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["datesLocations"]["oslo-norway"][0], "01-01-2000");
    }

    #[test]
    fn test_locations_params_default() {
        let params: LocationsParams = serde_json::from_str("{}").unwrap();
        assert!(!params.geocode);
    }
}
