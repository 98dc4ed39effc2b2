//! Service layer between raw traveler data and the map view.
//!
//! Services load traveler entries, drop what the map cannot draw, run the
//! aggregation, and keep the interaction state the map and the visit list
//! share.

pub mod map_points;
pub mod radius_scale;
pub mod selection;
pub mod summary;
pub mod traveler;


pub use map_points::{build_map_points, mappable_visits, MapPoint};
pub use radius_scale::RadiusScale;
pub use selection::{
    diff_snapshots, visit_flags, HoverSweep, SelectionFlags, SelectionState, SnapshotDiff, SweepFrame,
};
pub use summary::{summarize, StaySummary};
#[cfg(feature = "remote")]
pub use traveler::fetch_traveler;
pub use traveler::{load_traveler_file, parse_traveler_str, TravelerEntry};
