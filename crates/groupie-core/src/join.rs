use tracing::debug;

use crate::model::{ArtistDetail, ArtistRecord, ArtistView, DateSet, LocationSet, RelationSet};

/// Separator between locations in [`ArtistView::locations`].
pub const LOCATION_SEPARATOR: &str = ", ";

/// Merge artists with their dates and locations, keyed by artist ID.
///
/// Output follows the order of `artists`. An artist missing from `dates` or
/// `locations` gets an empty sequence or string for that field; a secondary
/// resource that failed to load is passed in as an empty set.
pub fn join(artists: Vec<ArtistRecord>, dates: &DateSet, locations: &LocationSet) -> Vec<ArtistView> {
    let mut missing_dates = 0usize;
    let mut missing_locations = 0usize;

    let views: Vec<ArtistView> = artists
        .into_iter()
        .map(|artist| {
            let tour_dates = match dates.get(&artist.id) {
                Some(d) => d.clone(),
                None => {
                    missing_dates += 1;
                    Vec::new()
                }
            };
            let places = match locations.get(&artist.id) {
                Some(l) => l.join(LOCATION_SEPARATOR),
                None => {
                    missing_locations += 1;
                    String::new()
                }
            };

            ArtistView {
                id: artist.id,
                name: artist.name,
                image: artist.image,
                creation_date: artist.creation_date,
                first_album: artist.first_album,
                members: artist.members,
                dates: tour_dates,
                locations: places,
            }
        })
        .collect();

    debug!(
        artists = views.len(),
        missing_dates, missing_locations, "joined tour resources"
    );
    views
}

/// Attach the per-venue breakdown for one artist.
pub fn detail(artist: ArtistView, relations: &RelationSet, back_url: impl Into<String>) -> ArtistDetail {
    let concerts = relations.get(&artist.id).cloned().unwrap_or_default();
    ArtistDetail {
        artist,
        concerts,
        back_url: back_url.into(),
    }
}
