//! Station catalog types and validation.

use serde::{Deserialize, Serialize};

/// A single stop on the hunt route. Supplied as static data and immutable
/// for the lifetime of a session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Station {
    /// 1-based position in the route; defines traversal order.
    pub id: u32,
    pub title: String,
    pub riddle: String,
    pub explanation: String,
    /// Candidate answers shown to the player. At least two.
    pub options: Vec<String>,
    /// Index into `options`.
    pub correct_answer: usize,
    pub latitude: f64,
    pub longitude: f64,
    /// Still image shown on the explanation screen.
    pub map_url: String,
    /// External deep link for turn-by-turn directions.
    pub google_maps_link: String,
}

impl Station {
    /// The option string counted as correct, if the index is in range.
    #[must_use]
    pub fn correct_option(&self) -> Option<&str> {
        self.options.get(self.correct_answer).map(String::as_str)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("station catalog is empty")]
    Empty,
    #[error("station at position {position} has id {found}, expected {expected}")]
    OutOfOrder {
        position: usize,
        found: u32,
        expected: u32,
    },
    #[error("station {id} has {count} answer options, need at least 2")]
    TooFewOptions { id: u32, count: usize },
    #[error("station {id} answer index {index} is out of range for {count} options")]
    AnswerOutOfRange { id: u32, index: usize, count: usize },
    #[error("station {id} coordinates ({latitude}, {longitude}) are outside WGS84 bounds")]
    BadCoordinates {
        id: u32,
        latitude: f64,
        longitude: f64,
    },
}

/// The ordered, validated list of stations for one hunt route.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StationCatalog {
    stations: Vec<Station>,
}

impl StationCatalog {
    /// Parse and validate a catalog from its JSON representation.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or any station violates the
    /// catalog invariants (contiguous 1-based ids, ≥ 2 options, in-range
    /// answer index, WGS84 coordinates).
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let catalog: Self = serde_json::from_str(json)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Build a catalog from pre-parsed stations, applying the same checks as
    /// [`Self::from_json`].
    ///
    /// # Errors
    ///
    /// Returns an error if any station violates the catalog invariants.
    pub fn from_stations(stations: Vec<Station>) -> Result<Self, CatalogError> {
        let catalog = Self { stations };
        catalog.validate()?;
        Ok(catalog)
    }

    fn validate(&self) -> Result<(), CatalogError> {
        if self.stations.is_empty() {
            return Err(CatalogError::Empty);
        }
        for (position, station) in self.stations.iter().enumerate() {
            let expected = u32::try_from(position).unwrap_or(u32::MAX).saturating_add(1);
            if station.id != expected {
                return Err(CatalogError::OutOfOrder {
                    position,
                    found: station.id,
                    expected,
                });
            }
            if station.options.len() < 2 {
                return Err(CatalogError::TooFewOptions {
                    id: station.id,
                    count: station.options.len(),
                });
            }
            if station.correct_answer >= station.options.len() {
                return Err(CatalogError::AnswerOutOfRange {
                    id: station.id,
                    index: station.correct_answer,
                    count: station.options.len(),
                });
            }
            if !(-90.0..=90.0).contains(&station.latitude)
                || !(-180.0..=180.0).contains(&station.longitude)
            {
                return Err(CatalogError::BadCoordinates {
                    id: station.id,
                    latitude: station.latitude,
                    longitude: station.longitude,
                });
            }
        }
        Ok(())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.stations.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    /// Look up a station by its 1-based route position.
    #[must_use]
    pub fn station(&self, id: usize) -> Option<&Station> {
        id.checked_sub(1).and_then(|idx| self.stations.get(idx))
    }

    #[must_use]
    pub fn stations(&self) -> &[Station] {
        &self.stations
    }
}
