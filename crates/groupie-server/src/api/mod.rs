pub mod artists;
pub mod error;
pub mod resources;

use tracing::warn;

use groupie_core::{join, ArtistView};
use groupie_upstream::UpstreamError;

use crate::AppState;
use error::ApiError;

/// Use a secondary resource if it loaded, otherwise continue without it.
pub(crate) fn secondary<T: Default>(result: Result<T, UpstreamError>) -> T {
    result.unwrap_or_else(|e| {
        warn!(
            resource = %e.resource(),
            malformed = e.is_decode(),
            "continuing without secondary resource: {e}"
        );
        T::default()
    })
}

/// Fetch artists, dates and locations in turn and join them.
///
/// Only a failed artists fetch is an error; dates and locations degrade to
/// empty.
pub(crate) async fn load_views(state: &AppState) -> Result<Vec<ArtistView>, ApiError> {
    let artists = state
        .upstream
        .fetch_artists()
        .await
        .map_err(|e| error::upstream_failure(&e))?;
    let dates = secondary(state.upstream.fetch_dates().await);
    let locations = secondary(state.upstream.fetch_locations().await);
    Ok(join(artists, &dates, &locations))
}

pub(crate) fn non_empty(param: &Option<String>) -> Option<&str> {
    param.as_deref().filter(|s| !s.is_empty())
}
