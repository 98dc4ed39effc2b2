//! Aggregated view of every visit to one place.

use serde::{Deserialize, Serialize};

use super::visit::{Coordinates, VisitRecord};

/// Projected map position of a destination, in view pixels.
///
/// The aggregator never fills this in; projection belongs to whatever draws
/// the map.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScreenPosition {
    pub x: f64,
    pub y: f64,
}

/// One distinct place with the summed stay length of all visits to it.
///
/// # Fields
///
/// * `place` - Destination identity shared by all source visits
/// * `visit_count` - Number of contributing visits
/// * `total_stay_length` - Sum of resolved stay lengths, never negative
/// * `position` - Projected position, set by the rendering layer
/// * `source_visits` - Contributing visits in input order
/// * `source_indices` - Index of each source visit in the aggregated input
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UniqueDestination {
    pub place: String,
    pub visit_count: usize,
    pub total_stay_length: qtty::Days,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<ScreenPosition>,
    pub source_visits: Vec<VisitRecord>,
    pub source_indices: Vec<usize>,
}

impl UniqueDestination {
    /// Starts a destination from its first visit.
    pub fn seed(index: usize, visit: &VisitRecord, stay_length: qtty::Days) -> Self {
        Self {
            place: visit.place.clone(),
            visit_count: 1,
            total_stay_length: stay_length,
            position: None,
            source_visits: vec![visit.clone()],
            source_indices: vec![index],
        }
    }

    /// Folds another visit to the same place into this destination.
    pub fn absorb(&mut self, index: usize, visit: &VisitRecord, stay_length: qtty::Days) {
        self.visit_count += 1;
        self.total_stay_length = qtty::Days::new(self.total_stay_length.value() + stay_length.value());
        self.source_visits.push(visit.clone());
        self.source_indices.push(index);
    }

    /// Coordinates of the first source visit that has them.
    pub fn coordinates(&self) -> Option<Coordinates> {
        self.source_visits.iter().find_map(VisitRecord::coordinates)
    }

    /// Mean stay length per visit.
    pub fn mean_stay_length(&self) -> qtty::Days {
        if self.visit_count == 0 {
            return qtty::Days::new(0.0);
        }
        qtty::Days::new(self.total_stay_length.value() / self.visit_count as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PartialDate;

    #[test]
    fn test_seed_and_absorb() {
        let first = VisitRecord::new("Rome", PartialDate::empty(), PartialDate::empty());
        let second = first.clone().with_coordinates(12.5, 41.9);

        let mut destination = UniqueDestination::seed(0, &first, qtty::Days::new(5.0));
        destination.absorb(3, &second, qtty::Days::new(26.0));

        assert_eq!(destination.visit_count, 2);
        assert_eq!(destination.total_stay_length.value(), 31.0);
        assert_eq!(destination.source_indices, vec![0, 3]);
        assert_eq!(destination.source_visits, vec![first, second]);
        assert_eq!(destination.mean_stay_length().value(), 15.5);
        assert_eq!(destination.coordinates().unwrap().latitude, 41.9);
    }

    #[test]
    fn test_serializes_camel_case() {
        let visit = VisitRecord::new("Venice", PartialDate::year_of(1760), PartialDate::year_of(1760));
        let destination = UniqueDestination::seed(0, &visit, qtty::Days::new(26.0));
        let json = serde_json::to_value(&destination).unwrap();

        assert_eq!(json["visitCount"], 1);
        assert_eq!(json["totalStayLength"], 26.0);
        assert!(json.get("position").is_none());
    }
}
