use axum::http::StatusCode;

use groupie_upstream::UpstreamError;

/// Handler error: status plus a short plain-text body.
pub type ApiError = (StatusCode, String);

pub fn upstream_failure(err: &UpstreamError) -> ApiError {
    tracing::error!("upstream fetch failed: {err}");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        format!("Unable to fetch {}", err.resource()),
    )
}

pub fn invalid_artist_id() -> ApiError {
    (StatusCode::BAD_REQUEST, "Invalid artist ID".to_string())
}

pub fn artist_not_found() -> ApiError {
    (StatusCode::NOT_FOUND, "Artist not found".to_string())
}

pub fn geocode_failure() -> ApiError {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "Unable to geocode location".to_string(),
    )
}
