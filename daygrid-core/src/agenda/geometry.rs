//! Column assignment and pixel geometry for laid-out events.

use serde::Serialize;

use crate::agenda::slots::SlotOccupancy;

/// Horizontal lane of one event.
///
/// `column` is 1-based; `column_count` is the most events that share any
/// slot with this event, and sets the rendered width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CollisionAssignment {
    pub column: u32,
    pub column_count: u32,
}

impl Default for CollisionAssignment {
    fn default() -> Self {
        CollisionAssignment {
            column: 1,
            column_count: 1,
        }
    }
}

/// Pixel box of one event inside the agenda container.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventGeometry {
    pub index: usize,
    pub headline: String,
    pub top: f64,
    pub height: f64,
    pub left: f64,
    pub width: f64,
    pub column: u32,
    pub column_count: u32,
}

/// The current-time line and its dot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NowMarker {
    pub top: f64,
    pub height: f64,
    pub left: f64,
    pub width: f64,
    pub dot: Dot,
    /// False when the time falls outside the visible window
    pub visible: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Dot {
    pub top: f64,
    pub left: f64,
    pub size: f64,
}

/// Derive column counts and offsets from slot occupancy.
///
/// Only slots shared by more than one event matter. The first shared slot
/// an event appears in fixes its offset; later slots can only widen the
/// column count.
pub fn derive_column_geometry(occupancy: &SlotOccupancy, event_count: usize) -> Vec<CollisionAssignment> {
    let mut counts = vec![1u32; event_count];
    let mut offsets: Vec<Option<u32>> = vec![None; event_count];

    for slot in occupancy.slots() {
        let count = slot.len() as u32;
        if count <= 1 {
            continue;
        }

        for (&id, &column) in slot {
            counts[id] = counts[id].max(count);
            if offsets[id].is_none() {
                offsets[id] = Some(column);
            }
        }
    }

    counts
        .into_iter()
        .zip(offsets)
        .map(|(column_count, offset)| CollisionAssignment {
            column: offset.unwrap_or(1),
            column_count,
        })
        .collect()
}
