//! trackstudio: a small music catalog built around a self-normalizing
//! `Track` record.
//!
//! Every write to a `Track` is normalized instead of rejected: empty text
//! becomes a placeholder, a non-positive duration becomes 180 seconds and a
//! negative play count becomes zero.

pub mod config;
pub mod library;
pub mod runtime;

pub use library::{Catalog, Track, TrackEntry};
