//! A single journey segment from a traveler's record.

use serde::{Deserialize, Serialize};

use super::partial_date::PartialDate;

/// Geographic position of a place, in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub longitude: f64,
    pub latitude: f64,
}

/// One visit to a place, bounded by two partial dates.
///
/// `place` is the destination identity used for aggregation: two visits
/// belong to the same destination when their `place` strings are equal,
/// byte for byte. Callers are expected to supply a non-empty identifier.
///
/// Hover and click state is not stored here; see
/// [`SelectionState`](crate::services::selection::SelectionState).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisitRecord {
    pub place: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub start: PartialDate,
    #[serde(default)]
    pub end: PartialDate,
}

impl VisitRecord {
    /// A visit without coordinates.
    pub fn new(place: impl Into<String>, start: PartialDate, end: PartialDate) -> Self {
        Self {
            place: place.into(),
            longitude: None,
            latitude: None,
            start,
            end,
        }
    }

    pub fn with_coordinates(mut self, longitude: f64, latitude: f64) -> Self {
        self.longitude = Some(longitude);
        self.latitude = Some(latitude);
        self
    }

    /// Both coordinates, when the record carries them.
    pub fn coordinates(&self) -> Option<Coordinates> {
        match (self.longitude, self.latitude) {
            (Some(longitude), Some(latitude)) => Some(Coordinates {
                longitude,
                latitude,
            }),
            _ => None,
        }
    }

    /// Returns `true` if the visit can be placed on a map.
    pub fn is_mappable(&self) -> bool {
        self.coordinates().is_some()
    }
}
