//! Hover and click state shared between the map and the visit list.
//!
//! Aggregation results are immutable snapshots. Interaction state lives
//! here instead, keyed by destination `place`, so the list view and the map
//! view can both read it without mutating each other's data. When a new
//! snapshot arrives, [`diff_snapshots`] tells the view what to redraw and
//! [`SelectionState::retain_known`] drops state for places that vanished.

use std::collections::HashMap;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::models::{UniqueDestination, VisitRecord};

/// Interaction flags for one destination or visit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionFlags {
    pub hovered: bool,
    pub clicked: bool,
}

/// Which destination is under the pointer and which are clicked.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionState {
    hovered: Option<String>,
    clicked: Vec<String>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hover(&mut self, place: impl Into<String>) {
        self.hovered = Some(place.into());
    }

    /// Clears the hover only if `place` is the hovered destination.
    pub fn unhover(&mut self, place: &str) {
        if self.hovered.as_deref() == Some(place) {
            self.hovered = None;
        }
    }

    pub fn clear_hover(&mut self) {
        self.hovered = None;
    }

    /// Flips the clicked flag of `place` and returns its new value.
    pub fn toggle_click(&mut self, place: &str) -> bool {
        match self.clicked.iter().position(|p| p == place) {
            Some(pos) => {
                self.clicked.remove(pos);
                false
            }
            None => {
                self.clicked.push(place.to_string());
                true
            }
        }
    }

    pub fn hovered(&self) -> Option<&str> {
        self.hovered.as_deref()
    }

    pub fn is_hovered(&self, place: &str) -> bool {
        self.hovered() == Some(place)
    }

    pub fn is_clicked(&self, place: &str) -> bool {
        self.clicked.iter().any(|p| p == place)
    }

    /// Clicked places, oldest click first.
    pub fn clicked_places(&self) -> &[String] {
        &self.clicked
    }

    pub fn flags(&self, place: &str) -> SelectionFlags {
        SelectionFlags {
            hovered: self.is_hovered(place),
            clicked: self.is_clicked(place),
        }
    }

    /// Drops hover and click state for places absent from `destinations`.
    pub fn retain_known(&mut self, destinations: &[UniqueDestination]) {
        let known = |place: &str| destinations.iter().any(|d| d.place == place);
        if let Some(hovered) = &self.hovered {
            if !known(hovered.as_str()) {
                self.hovered = None;
            }
        }
        self.clicked.retain(|p| known(p.as_str()));
    }
}

/// Per-visit flags derived from destination state, for the list view.
pub fn visit_flags(state: &SelectionState, visits: &[VisitRecord]) -> Vec<SelectionFlags> {
    visits.iter().map(|v| state.flags(&v.place)).collect()
}

/// Differences between two aggregation snapshots, by place.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotDiff {
    /// Places only in the new snapshot, in new-snapshot order
    pub added: Vec<String>,
    /// Places only in the old snapshot, in old-snapshot order
    pub removed: Vec<String>,
    /// Places in both whose total stay length changed, in new-snapshot order
    pub resized: Vec<String>,
}

impl SnapshotDiff {
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty() && self.resized.is_empty()
    }
}

pub fn diff_snapshots(previous: &[UniqueDestination], next: &[UniqueDestination]) -> SnapshotDiff {
    let before: HashMap<&str, f64> = previous
        .iter()
        .map(|d| (d.place.as_str(), d.total_stay_length.value()))
        .collect();
    let after: HashMap<&str, f64> = next
        .iter()
        .map(|d| (d.place.as_str(), d.total_stay_length.value()))
        .collect();

    let mut diff = SnapshotDiff::default();
    for destination in next {
        match before.get(destination.place.as_str()) {
            None => diff.added.push(destination.place.clone()),
            Some(&days) if days != destination.total_stay_length.value() => {
                diff.resized.push(destination.place.clone())
            }
            Some(_) => {}
        }
    }
    diff.removed = previous
        .iter()
        .filter(|d| !after.contains_key(d.place.as_str()))
        .map(|d| d.place.clone())
        .collect();
    diff
}

/// One step of the initial hover sweep, as visit indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SweepFrame {
    pub unhover: Option<usize>,
    pub hover: Option<usize>,
}

impl SweepFrame {
    /// Applies this frame to `state`, resolving visit indices to places.
    pub fn apply(&self, visits: &[VisitRecord], state: &mut SelectionState) {
        if let Some(visit) = self.unhover.and_then(|i| visits.get(i)) {
            state.unhover(&visit.place);
        }
        if let Some(visit) = self.hover.and_then(|i| visits.get(i)) {
            state.hover(visit.place.clone());
        }
    }
}

/// Hovers each visit in turn once a traveler loads, then clears the hover.
///
/// Yields `len + 1` frames: frame `i` unhovers visit `i - 1` and hovers
/// visit `i`, so the last frame only unhovers.
#[derive(Debug, Clone)]
pub struct HoverSweep {
    len: usize,
    next: usize,
    interval: Duration,
}

impl HoverSweep {
    pub fn new(len: usize) -> Self {
        Self::with_interval(len, Duration::from_millis(150))
    }

    pub fn with_interval(len: usize, interval: Duration) -> Self {
        Self {
            len,
            next: 0,
            interval,
        }
    }

    /// Delay between frames.
    pub fn interval(&self) -> Duration {
        self.interval
    }
}

impl Iterator for HoverSweep {
    type Item = SweepFrame;

    fn next(&mut self) -> Option<SweepFrame> {
        if self.next > self.len {
            return None;
        }
        let i = self.next;
        self.next += 1;
        Some(SweepFrame {
            unhover: i.checked_sub(1),
            hover: (i < self.len).then_some(i),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.len + 1).saturating_sub(self.next);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for HoverSweep {}
