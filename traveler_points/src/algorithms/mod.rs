//! Stay-length estimation and destination aggregation.
//!
//! # Components
//!
//! - [`stay_length`]: Estimate days spent between two partial dates
//! - [`aggregation`]: Fold visits into one entry per distinct place
//!
//! Both are pure functions of their input and safe to call from any thread.

pub mod aggregation;
pub mod stay_length;

#[cfg(test)]
mod aggregation_tests;

pub use aggregation::{aggregate, DestinationAggregator};
pub use stay_length::{
    day_diff, estimate, StayLengthEstimator, StayLengthResult, StayRange, AVG_STAY_DAYS,
};
