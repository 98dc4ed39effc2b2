//! # Traveler Points
//!
//! Stay-length estimation and destination aggregation for the traveler
//! points mini map.
//!
//! Travel records carry partial dates: the day, month and year of each
//! endpoint may each be missing. This crate turns those fragments into a
//! best-effort number of days spent at each place, folds repeated visits to
//! the same place into one destination, and prepares the result for a map
//! view that sizes one circle per destination.
//!
//! ## Architecture
//!
//! - [`models`]: Partial dates, visit records and aggregated destinations
//! - [`algorithms`]: The stay-length estimator and the destination aggregator
//! - [`services`]: Traveler entry loading, map point preparation, radius
//!   scaling, selection state and summary statistics
//! - [`config`]: TOML configuration with environment overrides
//! - [`error`]: Error types for loading and configuration
//!
//! ## Example
//!
//! ```
//! use traveler_points::algorithms::{aggregate, estimate};
//! use traveler_points::models::{PartialDate, VisitRecord};
//!
//! let start = PartialDate::exact(1, 6, 2020);
//! let end = PartialDate::exact(5, 6, 2020);
//! assert_eq!(estimate(&start, &end).days().value(), 5.0);
//!
//! let visits = vec![
//!     VisitRecord::new("Rome", start, end),
//!     VisitRecord::new("Rome", PartialDate::empty(), PartialDate::empty()),
//! ];
//! let destinations = aggregate(&visits);
//! assert_eq!(destinations.len(), 1);
//! assert_eq!(destinations[0].total_stay_length.value(), 31.0);
//! ```

pub mod algorithms;
pub mod config;
pub mod error;
pub mod models;
pub mod services;

pub use error::{TravelerError, TravelerResult};
