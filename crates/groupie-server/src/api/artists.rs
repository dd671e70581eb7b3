use axum::{
    extract::{Query, State},
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use groupie_core::{detail, filter, ArtistDetail, ArtistView, FilterCriteria};

use super::error::{self, ApiError};
use super::{load_views, non_empty, secondary};
use crate::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct ArtistsParams {
    pub q: Option<String>,
    pub dates: Option<String>,
    /// Kept as text: anything that is not an integer means "no member filter".
    #[serde(rename = "memberCount")]
    pub member_count: Option<String>,
    pub id: Option<String>,
    pub place: Option<String>,
}

impl ArtistsParams {
    pub fn criteria(&self) -> FilterCriteria {
        FilterCriteria {
            query: self.q.clone(),
            target_date: self.dates.clone(),
            member_count: self
                .member_count
                .as_deref()
                .and_then(|raw| raw.trim().parse().ok()),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ArtistListResponse {
    pub artists: Vec<ArtistView>,
    pub total: usize,
}

#[derive(Debug, Serialize)]
pub struct PlaceResponse {
    pub place: String,
    pub lat: f64,
    pub lng: f64,
}

/// GET /api/artists
///
/// `place` switches to a geocoding lookup and `id` to single-artist detail;
/// otherwise the joined listing is filtered by `q`, `dates` and `memberCount`.
pub async fn list_artists(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ArtistsParams>,
) -> Result<Response, ApiError> {
    if let Some(place) = non_empty(&params.place) {
        return locate_place(&state, place).await.map(|r| Json(r).into_response());
    }
    if let Some(id) = non_empty(&params.id) {
        return artist_detail(&state, id).await.map(|r| Json(r).into_response());
    }

    let views = load_views(&state).await?;
    let artists = filter(views, &params.criteria());
    tracing::debug!(matches = artists.len(), "artist listing");

    Ok(Json(ArtistListResponse {
        total: artists.len(),
        artists,
    })
    .into_response())
}

async fn locate_place(state: &AppState, place: &str) -> Result<PlaceResponse, ApiError> {
    let at = state.geocoder.geocode(place).await.map_err(|e| {
        tracing::error!("geocoding {place:?} failed: {e}");
        error::geocode_failure()
    })?;
    Ok(PlaceResponse {
        place: place.to_string(),
        lat: at.lat,
        lng: at.lng,
    })
}

async fn artist_detail(state: &AppState, raw_id: &str) -> Result<ArtistDetail, ApiError> {
    // Any integer is a well-formed ID; one outside the ID range simply matches nothing.
    let id: i64 = raw_id.parse().map_err(|_| error::invalid_artist_id())?;

    let view = load_views(state)
        .await?
        .into_iter()
        .find(|v| i64::from(v.id) == id)
        .ok_or_else(error::artist_not_found)?;
    let relations = secondary(state.upstream.fetch_relations().await);

    Ok(detail(view, &relations, state.listing_url()))
}
