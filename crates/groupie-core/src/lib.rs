//! Join-and-filter engine for the Groupie tour aggregator.
//!
//! Upstream resources arrive here already decoded into [`ArtistRecord`]s and
//! per-artist lookup sets. [`join`] merges them into [`ArtistView`]s and
//! [`filter`] narrows the joined set down to what a request asked for.

pub mod dates;
pub mod filter;
pub mod join;
pub mod model;

pub use dates::DateParseError;
pub use filter::{filter, FilterCriteria};
pub use join::{detail, join};
pub use model::{
    ArtistDetail, ArtistId, ArtistRecord, ArtistView, Coordinates, DateSet, GeoLocation,
    LocationSet, RelationSet,
};
