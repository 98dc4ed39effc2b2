//! Dataset-level statistics over a traveler's estimated stays.

use serde::{Deserialize, Serialize};

use crate::algorithms::StayLengthEstimator;
use crate::models::VisitRecord;

/// How much of a traveler's record is dated exactly versus guessed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StaySummary {
    pub visit_count: usize,
    pub exact_count: usize,
    pub guessed_count: usize,
    /// Guesses backed by a date range rather than the flat average
    pub ranged_count: usize,
    pub total_days: f64,
    pub mean_days: f64,
    pub median_days: f64,
}

/// Compute stay statistics for `visits`.
///
/// Stay lengths are taken as absolute values, as in aggregation.
pub fn summarize(visits: &[VisitRecord], estimator: &StayLengthEstimator) -> StaySummary {
    let mut exact_count = 0;
    let mut ranged_count = 0;
    let mut lengths = Vec::with_capacity(visits.len());

    for visit in visits {
        let result = estimator.estimate(&visit.start, &visit.end);
        if result.is_exact() {
            exact_count += 1;
        } else if result.range().is_some() {
            ranged_count += 1;
        }
        lengths.push(result.days().value().abs());
    }

    let count = lengths.len();
    let total_days: f64 = lengths.iter().sum();
    let mean_days = if count > 0 { total_days / count as f64 } else { 0.0 };

    lengths.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let median_days = match count {
        0 => 0.0,
        n if n % 2 == 0 => (lengths[n / 2 - 1] + lengths[n / 2]) / 2.0,
        n => lengths[n / 2],
    };

    StaySummary {
        visit_count: count,
        exact_count,
        guessed_count: count - exact_count,
        ranged_count,
        total_days,
        mean_days,
        median_days,
    }
}
