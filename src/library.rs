//! Track library: the `Track` record, catalogs of tracks and display helpers.
//!
//! `Track` normalizes every value written to it; `Catalog` builds ordered
//! track lists from configured entries.

mod catalog;
mod display;
mod model;

pub use catalog::{Catalog, TrackEntry, greatest_hits_entries};
pub use display::display_from_fields;
pub use model::*;
