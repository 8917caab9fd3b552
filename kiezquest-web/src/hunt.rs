//! Web-specific hunt data wiring.
//!
//! Re-exports the core hunt types and loads the station catalog from the
//! embedded static asset.

// Re-export all types from kiezquest-core
pub use kiezquest_core::*;

/// Load and validate the shipped station catalog.
///
/// The asset is embedded at compile time; a validation failure means the
/// shipped data is broken, so the error is logged and an empty catalog is
/// returned, which renders the hunt inert instead of crashing the app.
#[must_use]
pub fn load_station_catalog() -> StationCatalog {
    let json = include_str!("../static/assets/data/stations.json");
    match StationCatalog::from_json(json) {
        Ok(catalog) => catalog,
        Err(err) => {
            log::error!("station catalog rejected: {err}");
            StationCatalog::default()
        }
    }
}
