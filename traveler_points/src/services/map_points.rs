//! Preparing a traveler entry for the map view.
//!
//! The map only draws places it can project, so visits lacking either
//! coordinate are dropped before aggregation. The remaining destinations
//! are sized by the configured radius scale.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::config::MapConfig;
use crate::models::{UniqueDestination, VisitRecord};

use super::radius_scale::RadiusScale;
use super::traveler::TravelerEntry;

/// One circle on the map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapPoint {
    #[serde(flatten)]
    pub destination: UniqueDestination,
    pub radius: f64,
}

/// Visits carrying both latitude and longitude, in input order.
pub fn mappable_visits(visits: &[VisitRecord]) -> Vec<VisitRecord> {
    let kept: Vec<VisitRecord> = visits.iter().filter(|v| v.is_mappable()).cloned().collect();
    if kept.len() < visits.len() {
        debug!(
            "Dropped {} of {} visits without coordinates",
            visits.len() - kept.len(),
            visits.len()
        );
    }
    kept
}

/// Filter, aggregate and size the visits of `entry`.
///
/// `source_indices` of the returned destinations refer to positions in the
/// filtered visit list, not in `entry.travels`.
pub fn build_map_points(entry: &TravelerEntry, config: &MapConfig) -> Vec<MapPoint> {
    let visits = mappable_visits(&entry.travels);
    let destinations = config.aggregator().aggregate(&visits);
    let scale = RadiusScale::fit(
        &destinations,
        config.scale.min_radius,
        config.scale.max_radius,
    );

    destinations
        .into_iter()
        .map(|destination| {
            let radius = scale.radius(destination.total_stay_length);
            MapPoint {
                destination,
                radius,
            }
        })
        .collect()
}
