//! Loading traveler entries from the entries API format.
//!
//! The API answers `GET {base_url}{traveler_id}` with:
//!
//! ```json
//! {
//!   "entry": {
//!     "fullName": "Boswell, James",
//!     "travels": [
//!       { "place": "Rome", "latitude": 41.9, "longitude": 12.5,
//!         "startDay": 14, "startMonth": 2, "startYear": 1765,
//!         "endDay": null, "endMonth": 4, "endYear": 1765 }
//!     ]
//!   }
//! }
//! ```
//!
//! Date components may be `null` or absent. Other fields are ignored.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{TravelerError, TravelerResult};
use crate::models::{PartialDate, VisitRecord};

/// Raw JSON structure for one travel
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawTravel {
    #[serde(default)]
    place: Option<String>,
    #[serde(default)]
    latitude: Option<f64>,
    #[serde(default)]
    longitude: Option<f64>,
    #[serde(default)]
    start_day: Option<u32>,
    #[serde(default)]
    start_month: Option<u32>,
    #[serde(default)]
    start_year: Option<i32>,
    #[serde(default)]
    end_day: Option<u32>,
    #[serde(default)]
    end_month: Option<u32>,
    #[serde(default)]
    end_year: Option<i32>,
}

/// Raw JSON structure for an entry
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawEntry {
    #[serde(default)]
    full_name: Option<String>,
    #[serde(default)]
    travels: Vec<RawTravel>,
}

/// Container for the API response body
#[derive(Debug, Deserialize)]
struct EntryEnvelope {
    entry: RawEntry,
}

/// A traveler and their visits, in record order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TravelerEntry {
    pub full_name: Option<String>,
    pub travels: Vec<VisitRecord>,
}

impl RawTravel {
    fn into_visit(self, index: usize) -> TravelerResult<VisitRecord> {
        let place = self
            .place
            .filter(|p| !p.trim().is_empty())
            .ok_or(TravelerError::MissingPlace { index })?;

        Ok(VisitRecord {
            place,
            longitude: self.longitude,
            latitude: self.latitude,
            start: PartialDate::new(self.start_day, self.start_month, self.start_year),
            end: PartialDate::new(self.end_day, self.end_month, self.end_year),
        })
    }
}

impl TryFrom<RawEntry> for TravelerEntry {
    type Error = TravelerError;

    fn try_from(raw: RawEntry) -> TravelerResult<Self> {
        let travels = raw
            .travels
            .into_iter()
            .enumerate()
            .map(|(index, travel)| travel.into_visit(index))
            .collect::<TravelerResult<Vec<_>>>()?;

        Ok(TravelerEntry {
            full_name: raw.full_name,
            travels,
        })
    }
}

/// Parse a traveler entry from an API response body.
///
/// # Errors
/// * `TravelerError::Json` when the body is not a valid entry, with the
///   path of the offending field
/// * `TravelerError::MissingPlace` when a travel has no non-blank `place`
pub fn parse_traveler_str(json: &str) -> TravelerResult<TravelerEntry> {
    let de = &mut serde_json::Deserializer::from_str(json);
    let envelope: EntryEnvelope = serde_path_to_error::deserialize(de)?;
    TravelerEntry::try_from(envelope.entry)
}

/// Parse a traveler entry from a file holding an API response body.
pub fn load_traveler_file<P: AsRef<Path>>(path: P) -> TravelerResult<TravelerEntry> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| TravelerError::io(path, e))?;
    parse_traveler_str(&content)
}

/// Fetch a traveler entry from the entries API.
///
/// `base_url` is joined with `traveler_id` by plain concatenation, so it
/// should end with a slash.
#[cfg(feature = "remote")]
pub async fn fetch_traveler(base_url: &str, traveler_id: &str) -> TravelerResult<TravelerEntry> {
    let url = format!("{}{}", base_url, traveler_id);
    log::debug!("Fetching traveler entry from {}", url);

    let body = reqwest::get(&url).await?.error_for_status()?.text().await?;
    parse_traveler_str(&body)
}
