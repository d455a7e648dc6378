//! Timeline (Gantt feed) model.
//!
//! A timeline is the execution-ordered list of intervals produced by an
//! FCFS run: one slot per valid process, preceded by an idle slot when the
//! first dispatch happens after t=0. It is a static snapshot for
//! visualization and carries no animation state.

use serde::{Deserialize, Serialize};

use super::ProcessId;

/// What occupies a timeline slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SlotStatus {
    /// CPU idle before the first dispatch.
    Idle,
    /// A valid process executing to completion.
    Running,
}

/// One interval `[start, start + burst)` on the timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineSlot {
    /// Process name, or `"IDLE"` for the idle slot.
    pub name: String,
    /// Start time.
    pub start: i64,
    /// Length of the interval.
    pub burst: i64,
    /// Slot classification.
    pub status: SlotStatus,
    /// Process identity; `None` for the idle slot.
    pub process_id: Option<ProcessId>,
}

/// Execution-ordered timeline of an FCFS run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timeline {
    /// Slots in execution order.
    pub slots: Vec<TimelineSlot>,
}

impl TimelineSlot {
    /// Creates the leading idle slot `[0, until)`.
    pub fn idle(until: i64) -> Self {
        Self {
            name: "IDLE".to_string(),
            start: 0,
            burst: until,
            status: SlotStatus::Idle,
            process_id: None,
        }
    }

    /// Creates a running slot.
    pub fn running(id: ProcessId, name: impl Into<String>, start: i64, burst: i64) -> Self {
        Self {
            name: name.into(),
            start,
            burst,
            status: SlotStatus::Running,
            process_id: Some(id),
        }
    }

    /// End of the interval.
    #[inline]
    pub fn end(&self) -> i64 {
        self.start.saturating_add(self.burst)
    }

    /// Whether this is the idle slot.
    #[inline]
    pub fn is_idle(&self) -> bool {
        self.status == SlotStatus::Idle
    }
}

impl Timeline {
    /// Creates an empty timeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a slot.
    pub fn push(&mut self, slot: TimelineSlot) {
        self.slots.push(slot);
    }

    /// Whether there are no slots.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Number of slots (idle slot included).
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Latest end time across all slots.
    pub fn makespan(&self) -> i64 {
        self.slots.iter().map(TimelineSlot::end).max().unwrap_or(0)
    }

    /// Slots occupied by processes, in execution order.
    pub fn running_slots(&self) -> impl Iterator<Item = &TimelineSlot> {
        self.slots.iter().filter(|s| !s.is_idle())
    }

    /// Finds the slot for a process.
    pub fn slot_for(&self, id: ProcessId) -> Option<&TimelineSlot> {
        self.slots.iter().find(|s| s.process_id == Some(id))
    }

    /// Total time the CPU is busy.
    pub fn busy_time(&self) -> i64 {
        self.running_slots().map(|s| s.burst).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_timeline() -> Timeline {
        let mut t = Timeline::new();
        t.push(TimelineSlot::idle(2));
        t.push(TimelineSlot::running(ProcessId(1), "A", 2, 3));
        t.push(TimelineSlot::running(ProcessId(2), "B", 7, 1));
        t
    }

    #[test]
    fn test_makespan() {
        assert_eq!(sample_timeline().makespan(), 8);
        assert_eq!(Timeline::new().makespan(), 0);
    }

    #[test]
    fn test_running_slots_skip_idle() {
        let t = sample_timeline();
        let names: Vec<_> = t.running_slots().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["A", "B"]);
        assert_eq!(t.len(), 3);
    }

    #[test]
    fn test_slot_for() {
        let t = sample_timeline();
        assert_eq!(t.slot_for(ProcessId(2)).map(|s| s.start), Some(7));
        assert!(t.slot_for(ProcessId(9)).is_none());
    }

    #[test]
    fn test_busy_time() {
        assert_eq!(sample_timeline().busy_time(), 4);
    }

    #[test]
    fn test_idle_slot() {
        let s = TimelineSlot::idle(5);
        assert!(s.is_idle());
        assert_eq!(s.end(), 5);
        assert_eq!(s.process_id, None);
    }
}
