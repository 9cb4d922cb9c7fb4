//! Execution timeline (Gantt chart) model.
//!
//! A timeline is the ordered record of which process held the CPU over
//! which half-open interval `[start, end)`. Slots are appended in
//! dispatch order and never overlap; the only permitted mutation is
//! extending the most recent slot while the same process keeps running.
//!
//! # Reference
//! Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5.3

use serde::{Deserialize, Serialize};

/// One scheduled execution interval.
///
/// Half-open: the process held the CPU for ticks `start..end`, `end > start`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineSlot {
    /// Process occupying the interval.
    pub id: String,
    /// First tick of the interval (inclusive).
    pub start: i64,
    /// First tick after the interval (exclusive).
    pub end: i64,
}

impl TimelineSlot {
    /// Creates a slot.
    pub fn new(id: impl Into<String>, start: i64, end: i64) -> Self {
        Self {
            id: id.into(),
            start,
            end,
        }
    }

    /// Interval length in ticks.
    #[inline]
    pub fn duration(&self) -> i64 {
        self.end - self.start
    }
}

/// An append-only sequence of execution slots in dispatch order.
///
/// Slots are in non-decreasing `start` order and never overlap; gaps
/// between consecutive slots are idle CPU time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timeline {
    /// Execution slots in dispatch order.
    pub slots: Vec<TimelineSlot>,
}

impl Timeline {
    /// Creates an empty timeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a whole slot `[start, end)`.
    pub fn record(&mut self, id: impl Into<String>, start: i64, end: i64) {
        self.slots.push(TimelineSlot::new(id, start, end));
    }

    /// Accounts one tick `[tick, tick + 1)` of execution to `id`.
    ///
    /// If the most recent slot belongs to the same process it is extended
    /// by one tick; otherwise a new slot is opened. Adjacent ticks of an
    /// uninterrupted process therefore merge into a single slot — the
    /// merge condition is `same id as the previous slot`, nothing else.
    pub fn extend_or_open(&mut self, id: &str, tick: i64) {
        match self.slots.last_mut() {
            Some(last) if last.id == id && last.end == tick => last.end = tick + 1,
            _ => self.slots.push(TimelineSlot::new(id, tick, tick + 1)),
        }
    }

    /// Total CPU time accounted to a process across all its slots.
    pub fn busy_time_for(&self, id: &str) -> i64 {
        self.slots
            .iter()
            .filter(|s| s.id == id)
            .map(TimelineSlot::duration)
            .sum()
    }

    /// Tick at which a process was first dispatched.
    pub fn first_dispatch(&self, id: &str) -> Option<i64> {
        self.slots.iter().find(|s| s.id == id).map(|s| s.start)
    }

    /// Slots belonging to a given process, in dispatch order.
    pub fn slots_for(&self, id: &str) -> Vec<&TimelineSlot> {
        self.slots.iter().filter(|s| s.id == id).collect()
    }

    /// Latest end tick across all slots (0 when empty).
    pub fn makespan(&self) -> i64 {
        self.slots.iter().map(|s| s.end).max().unwrap_or(0)
    }

    /// Total busy time across all slots.
    pub fn busy_time(&self) -> i64 {
        self.slots.iter().map(TimelineSlot::duration).sum()
    }

    /// Idle CPU time between t=0 and the makespan.
    pub fn idle_time(&self) -> i64 {
        self.makespan() - self.busy_time()
    }

    /// Number of slots.
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// Whether slots are sorted by start and pairwise non-overlapping.
    pub fn is_well_formed(&self) -> bool {
        self.slots.iter().all(|s| s.end > s.start)
            && self.slots.windows(2).all(|w| w[0].end <= w[1].start)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_timeline() -> Timeline {
        let mut t = Timeline::new();
        t.record("P1", 0, 2);
        t.record("P2", 2, 4);
        t.record("P1", 4, 6);
        t
    }

    #[test]
    fn test_slot_duration() {
        let s = TimelineSlot::new("P1", 3, 8);
        assert_eq!(s.duration(), 5);
    }

    #[test]
    fn test_busy_time_for() {
        let t = sample_timeline();
        assert_eq!(t.busy_time_for("P1"), 4);
        assert_eq!(t.busy_time_for("P2"), 2);
        assert_eq!(t.busy_time_for("P9"), 0);
    }

    #[test]
    fn test_first_dispatch() {
        let t = sample_timeline();
        assert_eq!(t.first_dispatch("P1"), Some(0));
        assert_eq!(t.first_dispatch("P2"), Some(2));
        assert_eq!(t.first_dispatch("P9"), None);
    }

    #[test]
    fn test_makespan_and_idle() {
        let mut t = Timeline::new();
        // Idle gap [0, 3) before the only slot.
        t.record("P1", 3, 5);
        assert_eq!(t.makespan(), 5);
        assert_eq!(t.busy_time(), 2);
        assert_eq!(t.idle_time(), 3);
    }

    #[test]
    fn test_extend_or_open_merges_adjacent_ticks() {
        let mut t = Timeline::new();
        t.extend_or_open("P1", 0);
        t.extend_or_open("P1", 1);
        t.extend_or_open("P2", 2);
        t.extend_or_open("P1", 3);

        assert_eq!(t.slot_count(), 3);
        assert_eq!(t.slots[0], TimelineSlot::new("P1", 0, 2));
        assert_eq!(t.slots[1], TimelineSlot::new("P2", 2, 3));
        assert_eq!(t.slots[2], TimelineSlot::new("P1", 3, 4));
    }

    #[test]
    fn test_extend_or_open_does_not_merge_across_idle() {
        let mut t = Timeline::new();
        t.extend_or_open("P1", 0);
        // Same process again after an idle gap: a new slot, not an extension.
        t.extend_or_open("P1", 4);
        assert_eq!(t.slot_count(), 2);
        assert_eq!(t.slots[1].start, 4);
    }

    #[test]
    fn test_well_formed() {
        assert!(sample_timeline().is_well_formed());

        let mut bad = Timeline::new();
        bad.record("P1", 0, 3);
        bad.record("P2", 2, 4); // Overlaps
        assert!(!bad.is_well_formed());
    }

    #[test]
    fn test_empty_timeline() {
        let t = Timeline::new();
        assert_eq!(t.makespan(), 0);
        assert_eq!(t.slot_count(), 0);
        assert!(t.is_well_formed());
    }

    #[test]
    fn test_serde_round_trip() {
        let t = sample_timeline();
        let json = serde_json::to_string(&t).unwrap();
        let back: Timeline = serde_json::from_str(&json).unwrap();
        assert_eq!(back, t);
    }
}
