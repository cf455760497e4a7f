//! Configuration loader and schema types.
//!
//! This module exposes the configuration schema used to drive the studio
//! report and helpers to load configuration from disk.

mod load;
mod schema;

pub use load::{SettingsError, default_config_path, resolve_config_path};
pub use schema::*;

#[cfg(test)]
pub(crate) mod tests;
