//! Half-hour slot occupancy.
//!
//! The visible window is cut into 30-minute slots. Each event claims a
//! column in every slot its `[start, end)` interval touches. The column
//! search for an event continues from the column it used in its previous
//! slot instead of restarting at 1, so an event's column never decreases
//! across the slots it spans. This shapes the visible layout and must not be
//! replaced by an independent per-slot assignment.

use std::collections::BTreeMap;

use crate::agenda::{AgendaConfig, AgendaEvent};

pub const SLOT_MINUTES: i64 = 30;

/// Per slot, the column claimed by each event index present in it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SlotOccupancy {
    slots: Vec<BTreeMap<usize, u32>>,
}

impl SlotOccupancy {
    /// Assign slot orders for `events` in input order.
    pub fn assign(events: &[AgendaEvent], config: &AgendaConfig) -> Self {
        let slot_count = config.slot_count();
        let mut slots: Vec<BTreeMap<usize, u32>> = vec![BTreeMap::new(); slot_count];
        let event_count = events.len() as u32;

        for (id, event) in events.iter().enumerate() {
            let start = config.minutes_from_start(event.start);
            let end = config.minutes_from_start(event.end);
            if start >= end {
                continue;
            }

            let first = start.div_euclid(SLOT_MINUTES).max(0);
            let last = (end - 1).div_euclid(SLOT_MINUTES).min(slot_count as i64 - 1);

            let mut column = 1;
            for slot in first..=last {
                let taken = &mut slots[slot as usize];
                while column < event_count && taken.values().any(|&c| c == column) {
                    column += 1;
                }
                taken.insert(id, column);
            }
        }

        SlotOccupancy { slots }
    }

    pub fn slots(&self) -> &[BTreeMap<usize, u32>] {
        &self.slots
    }

    pub fn column_in(&self, slot: usize, event: usize) -> Option<u32> {
        self.slots.get(slot)?.get(&event).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;

    fn at(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn event(start: (u32, u32), end: (u32, u32)) -> AgendaEvent {
        AgendaEvent::new("e", at(start.0, start.1), at(end.0, end.1))
    }

    #[test]
    fn test_overlapping_events_get_distinct_columns() {
        let events = vec![event((9, 0), (10, 0)), event((9, 30), (10, 30))];
        let occupancy = SlotOccupancy::assign(&events, &AgendaConfig::default());

        assert_eq!(occupancy.slots().len(), 24);
        assert_eq!(occupancy.column_in(0, 0), Some(1));
        assert_eq!(occupancy.column_in(1, 0), Some(1));
        assert_eq!(occupancy.column_in(1, 1), Some(2));
        assert_eq!(occupancy.column_in(2, 1), Some(2), "column does not fall back to 1");
        assert_eq!(occupancy.column_in(0, 1), None);
    }

    #[test]
    fn test_unaligned_event_touches_its_last_slot() {
        // 9:20-9:40 touches 9:00-9:30 and 9:30-10:00
        let events = vec![event((9, 20), (9, 40))];
        let occupancy = SlotOccupancy::assign(&events, &AgendaConfig::default());
        assert_eq!(occupancy.column_in(0, 0), Some(1));
        assert_eq!(occupancy.column_in(1, 0), Some(1));
        assert_eq!(occupancy.column_in(2, 0), None);
    }

    #[test]
    fn test_column_search_continues_from_previous_slot() {
        let events = vec![
            event((9, 0), (9, 30)),
            event((9, 0), (10, 30)),
            event((9, 30), (11, 0)),
            event((10, 30), (11, 0)),
        ];
        let occupancy = SlotOccupancy::assign(&events, &AgendaConfig::default());

        assert_eq!(occupancy.column_in(0, 1), Some(2));
        // Column 1 is free again at 9:30, but event 1 keeps searching from 2
        assert_eq!(occupancy.column_in(1, 1), Some(2));
        assert_eq!(occupancy.column_in(1, 2), Some(1));
        assert_eq!(occupancy.column_in(3, 3), Some(2));
    }

    #[test]
    fn test_empty_or_inverted_intervals_touch_nothing() {
        let events = vec![event((10, 0), (10, 0)), event((11, 0), (10, 0))];
        let occupancy = SlotOccupancy::assign(&events, &AgendaConfig::default());
        assert!(occupancy.slots().iter().all(|slot| slot.is_empty()));
    }

    #[test]
    fn test_events_outside_window_are_clipped() {
        let events = vec![event((7, 0), (8, 0)), event((8, 30), (9, 15)), event((20, 45), (23, 0))];
        let occupancy = SlotOccupancy::assign(&events, &AgendaConfig::default());

        assert!(occupancy.slots().iter().all(|slot| !slot.contains_key(&0)));
        assert_eq!(occupancy.column_in(0, 1), Some(1));
        assert_eq!(occupancy.column_in(23, 2), Some(1));
    }
}
