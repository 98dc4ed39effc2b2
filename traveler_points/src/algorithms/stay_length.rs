//! Stay-length estimation from partial arrival and departure dates.
//!
//! The estimator applies four rules in order, first match wins:
//!
//! 1. Either endpoint is entirely unknown: guess the average stay.
//! 2. Both endpoints are complete: count the calendar days occupied,
//!    end day included.
//! 3. Both endpoints carry the same components (but are not complete):
//!    guess the average stay.
//! 4. Otherwise resolve each endpoint into its earliest and latest possible
//!    day and guess the midpoint of the shortest and longest possible stay.

use chrono::NaiveDate;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::models::PartialDate;

/// Average stay in days, measured over visits with exact dates in the
/// traveler dataset. Used whenever a stay cannot be bounded.
pub const AVG_STAY_DAYS: f64 = 26.0;

/// Shortest and longest stay consistent with two partial dates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StayRange {
    pub lower: qtty::Days,
    pub upper: qtty::Days,
}

impl StayRange {
    /// Returns `true` if `days` lies within the range, bounds included.
    pub fn contains(&self, days: qtty::Days) -> bool {
        self.lower.value() <= days.value() && days.value() <= self.upper.value()
    }

    pub fn width(&self) -> qtty::Days {
        qtty::Days::new(self.upper.value() - self.lower.value())
    }
}

/// Outcome of estimating one stay.
///
/// `days` is never negative. When a `Guess` carries a range,
/// `range.lower <= days <= range.upper`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StayLengthResult {
    /// Both endpoints were fully specified
    Exact { days: qtty::Days },
    /// At least one endpoint was ambiguous
    Guess {
        days: qtty::Days,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        range: Option<StayRange>,
    },
}

impl StayLengthResult {
    /// The resolved stay length, exact or guessed.
    pub fn days(&self) -> qtty::Days {
        match self {
            StayLengthResult::Exact { days } | StayLengthResult::Guess { days, .. } => *days,
        }
    }

    pub fn range(&self) -> Option<StayRange> {
        match self {
            StayLengthResult::Exact { .. } => None,
            StayLengthResult::Guess { range, .. } => *range,
        }
    }

    pub fn is_exact(&self) -> bool {
        matches!(self, StayLengthResult::Exact { .. })
    }
}

/// Whole days from `a` to `b`; negative when `b` precedes `a`.
pub fn day_diff(a: NaiveDate, b: NaiveDate) -> f64 {
    b.signed_duration_since(a).num_days() as f64
}

/// Estimates stay lengths, falling back to a configurable average.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StayLengthEstimator {
    average_stay: qtty::Days,
}

impl Default for StayLengthEstimator {
    fn default() -> Self {
        Self::new(AVG_STAY_DAYS)
    }
}

impl StayLengthEstimator {
    pub fn new(average_stay_days: f64) -> Self {
        Self {
            average_stay: qtty::Days::new(average_stay_days),
        }
    }

    pub fn average_stay(&self) -> qtty::Days {
        self.average_stay
    }

    /// Estimates the stay between `start` and `end`.
    ///
    /// # Examples
    ///
    /// ```
    /// use traveler_points::algorithms::StayLengthEstimator;
    /// use traveler_points::models::PartialDate;
    ///
    /// let estimator = StayLengthEstimator::default();
    /// let result = estimator.estimate(&PartialDate::year_of(2020), &PartialDate::year_of(2021));
    ///
    /// let range = result.range().unwrap();
    /// assert_eq!(range.lower.value(), 1.0);
    /// assert_eq!(range.upper.value(), 730.0);
    /// assert_eq!(result.days().value(), 365.5);
    /// ```
    pub fn estimate(&self, start: &PartialDate, end: &PartialDate) -> StayLengthResult {
        if start.is_empty() || end.is_empty() {
            return self.average_guess();
        }

        if start.is_complete() && end.is_complete() {
            return match (start.to_date(), end.to_date()) {
                // End day inclusive: count days occupied, not the open interval.
                (Some(first), Some(last)) => StayLengthResult::Exact {
                    days: qtty::Days::new((day_diff(first, last) + 1.0).abs()),
                },
                _ => {
                    debug!("No such calendar day in {} .. {}, using average stay", start, end);
                    self.average_guess()
                }
            };
        }

        if start == end {
            return self.average_guess();
        }

        match (start.bounds(), end.bounds()) {
            (Some(start_bounds), Some(end_bounds)) => {
                let lower = day_diff(start_bounds.upper, end_bounds.lower);
                let upper = day_diff(start_bounds.lower, end_bounds.upper);
                ranged_guess(lower, upper)
            }
            _ => {
                debug!("Cannot bound stay {} .. {}, using average stay", start, end);
                self.average_guess()
            }
        }
    }

    fn average_guess(&self) -> StayLengthResult {
        StayLengthResult::Guess {
            days: self.average_stay,
            range: None,
        }
    }
}

/// Midpoint guess for a `[lower, upper]` stay range.
///
/// A range describing an end before its start is mirrored around zero so the
/// guess stays non-negative and inside its range.
fn ranged_guess(lower: f64, upper: f64) -> StayLengthResult {
    let midpoint = (lower + upper) / 2.0;
    let (lower, upper, midpoint) = if midpoint < 0.0 {
        (-upper, -lower, -midpoint)
    } else {
        (lower, upper, midpoint)
    };

    StayLengthResult::Guess {
        days: qtty::Days::new(midpoint),
        range: Some(StayRange {
            lower: qtty::Days::new(lower),
            upper: qtty::Days::new(upper),
        }),
    }
}

/// Estimates a stay with the default average of [`AVG_STAY_DAYS`].
pub fn estimate(start: &PartialDate, end: &PartialDate) -> StayLengthResult {
    StayLengthEstimator::default().estimate(start, end)
}
