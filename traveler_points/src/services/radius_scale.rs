//! Linear mapping from total stay length to circle radius.

use serde::{Deserialize, Serialize};

use crate::models::UniqueDestination;

/// Maps `[0, domain_max]` days onto `[min_radius, max_radius]`.
///
/// Inputs outside the domain extrapolate along the same line. A zero-width
/// domain maps every input to `min_radius`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RadiusScale {
    pub domain_max: f64,
    pub min_radius: f64,
    pub max_radius: f64,
}

impl RadiusScale {
    pub fn new(domain_max: f64, min_radius: f64, max_radius: f64) -> Self {
        Self {
            domain_max,
            min_radius,
            max_radius,
        }
    }

    /// Fits the domain to the longest total stay among `destinations`.
    pub fn fit(destinations: &[UniqueDestination], min_radius: f64, max_radius: f64) -> Self {
        let domain_max = destinations
            .iter()
            .map(|d| d.total_stay_length.value())
            .fold(0.0_f64, f64::max);
        Self::new(domain_max, min_radius, max_radius)
    }

    pub fn radius(&self, days: qtty::Days) -> f64 {
        if self.domain_max <= 0.0 {
            return self.min_radius;
        }
        let t = days.value() / self.domain_max;
        self.min_radius + t * (self.max_radius - self.min_radius)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{PartialDate, VisitRecord};

    fn destination(place: &str, days: f64) -> UniqueDestination {
        let visit = VisitRecord::new(place, PartialDate::empty(), PartialDate::empty());
        UniqueDestination::seed(0, &visit, qtty::Days::new(days))
    }

    #[test]
    fn test_linear_mapping() {
        let scale = RadiusScale::new(100.0, 2.0, 12.0);
        assert_eq!(scale.radius(qtty::Days::new(0.0)), 2.0);
        assert_eq!(scale.radius(qtty::Days::new(50.0)), 7.0);
        assert_eq!(scale.radius(qtty::Days::new(100.0)), 12.0);
    }

    #[test]
    fn test_extrapolates_past_domain() {
        let scale = RadiusScale::new(10.0, 0.0, 10.0);
        assert_eq!(scale.radius(qtty::Days::new(20.0)), 20.0);
    }

    #[test]
    fn test_fit_uses_longest_stay() {
        let destinations = vec![destination("Rome", 31.0), destination("Paris", 62.0)];
        let scale = RadiusScale::fit(&destinations, 2.0, 12.0);
        assert_eq!(scale.domain_max, 62.0);
        assert_eq!(scale.radius(destinations[1].total_stay_length), 12.0);
        assert_eq!(scale.radius(destinations[0].total_stay_length), 7.0);
    }

    #[test]
    fn test_empty_domain_maps_to_min() {
        let scale = RadiusScale::fit(&[], 3.0, 9.0);
        assert_eq!(scale.domain_max, 0.0);
        assert_eq!(scale.radius(qtty::Days::new(40.0)), 3.0);
    }
}
