//! Folding visit records into one entry per destination.

use std::collections::HashMap;

use crate::models::{UniqueDestination, VisitRecord};

use super::stay_length::StayLengthEstimator;

/// Groups visits by `place` and sums their estimated stay lengths.
///
/// Holds no state besides the estimator; every call builds a fresh list.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DestinationAggregator {
    estimator: StayLengthEstimator,
}

impl DestinationAggregator {
    pub fn new(estimator: StayLengthEstimator) -> Self {
        Self { estimator }
    }

    pub fn estimator(&self) -> &StayLengthEstimator {
        &self.estimator
    }

    /// Aggregates `visits` into unique destinations.
    ///
    /// Output order is the order in which each distinct place first appears
    /// in `visits`. Places are compared exactly, with no case folding or
    /// trimming. Visits are not filtered by coordinates; do that beforehand
    /// if only mappable visits should count (see
    /// [`mappable_visits`](crate::services::map_points::mappable_visits)).
    pub fn aggregate(&self, visits: &[VisitRecord]) -> Vec<UniqueDestination> {
        let mut destinations: Vec<UniqueDestination> = Vec::new();
        let mut slots: HashMap<&str, usize> = HashMap::new();

        for (index, visit) in visits.iter().enumerate() {
            let estimate = self.estimator.estimate(&visit.start, &visit.end);
            // Raw records may put the end before the start.
            let stay_length = qtty::Days::new(estimate.days().value().abs());

            match slots.get(visit.place.as_str()) {
                Some(&slot) => destinations[slot].absorb(index, visit, stay_length),
                None => {
                    slots.insert(visit.place.as_str(), destinations.len());
                    destinations.push(UniqueDestination::seed(index, visit, stay_length));
                }
            }
        }

        destinations
    }
}

/// Aggregates `visits` using the default estimator.
///
/// # Examples
///
/// ```
/// use traveler_points::algorithms::aggregate;
/// use traveler_points::models::{PartialDate, VisitRecord};
///
/// let visits = vec![
///     VisitRecord::new("Florence", PartialDate::exact(1, 5, 1770), PartialDate::exact(10, 5, 1770)),
///     VisitRecord::new("Rome", PartialDate::empty(), PartialDate::empty()),
///     VisitRecord::new("Florence", PartialDate::exact(1, 9, 1770), PartialDate::exact(2, 9, 1770)),
/// ];
///
/// let destinations = aggregate(&visits);
/// assert_eq!(destinations[0].place, "Florence");
/// assert_eq!(destinations[0].visit_count, 2);
/// assert_eq!(destinations[0].total_stay_length.value(), 12.0);
/// assert_eq!(destinations[1].place, "Rome");
/// ```
pub fn aggregate(visits: &[VisitRecord]) -> Vec<UniqueDestination> {
    DestinationAggregator::default().aggregate(visits)
}
