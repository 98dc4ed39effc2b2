//! Domain models for traveler records.
//!
//! Visits are the raw input, partial dates describe their endpoints, and
//! destinations are what the aggregator produces from them.

pub mod destination;
pub mod partial_date;
pub mod visit;

pub use destination::*;
pub use partial_date::*;
pub use visit::*;
