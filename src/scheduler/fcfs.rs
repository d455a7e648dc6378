//! First-Come-First-Served scheduling engine.
//!
//! # Algorithm
//!
//! 1. Partition records into valid and invalid.
//! 2. Stable-sort valid record indices by arrival time.
//! 3. Start the clock at the earliest valid arrival.
//! 4. For each record in order, idle forward to its arrival if the CPU is
//!    free earlier, dispatch it, and advance the clock by its burst.
//! 5. Zero the derived metrics of every invalid record.
//!
//! The stored collection keeps insertion order. Execution order exists
//! only as an index ordering over it.
//!
//! # Complexity
//! O(n log n) where n = number of records.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3.1

use tracing::{debug, warn};

use super::{report, ScheduleKpi};
use crate::models::{Process, ProcessId, Timeline, TimelineSlot};
use crate::validation;

/// Maximum number of records held at once.
pub const MAX_PROCESSES: usize = 10;

/// Bounded, single-server, non-preemptive FCFS scheduler.
///
/// Owns its records exclusively. All operations run to completion and
/// none of them fail: a full engine rejects insertions with `false`,
/// and empty or wholly invalid collections degrade to no-ops.
///
/// # Example
///
/// ```
/// use fcfs_schedule::scheduler::FcfsScheduler;
///
/// let mut scheduler = FcfsScheduler::new();
/// assert!(scheduler.add_process("P1", 0, 5));
/// assert!(scheduler.add_process("P2", 1, 3));
/// scheduler.calculate_metrics();
///
/// let p2 = &scheduler.processes()[1];
/// assert_eq!(p2.waiting_time, 4);
/// assert_eq!(p2.completion_time, 8);
/// ```
#[derive(Debug, Clone, Default)]
pub struct FcfsScheduler {
    processes: Vec<Process>,
    next_id: u64,
}

impl FcfsScheduler {
    /// Creates an empty scheduler.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a record if capacity allows.
    ///
    /// Arrival and burst are not checked here; invalid values are stored
    /// and reported later. Returns `false` when the name is empty or blank,
    /// or when the engine already holds [`MAX_PROCESSES`] records.
    pub fn add_process(
        &mut self,
        name: impl Into<String>,
        arrival_time: i32,
        burst_time: i32,
    ) -> bool {
        let name = name.into();
        if name.trim().is_empty() {
            warn!("process rejected: empty name");
            return false;
        }
        if self.processes.len() >= MAX_PROCESSES {
            warn!(
                name = %name,
                capacity = MAX_PROCESSES,
                "process rejected: scheduler at capacity"
            );
            return false;
        }

        self.next_id += 1;
        let id = ProcessId(self.next_id);
        debug!(%id, name = %name, arrival_time, burst_time, "process added");
        self.processes
            .push(Process::new(name, arrival_time, burst_time).with_id(id));
        true
    }

    /// Removes all records.
    pub fn clear_processes(&mut self) {
        debug!(count = self.processes.len(), "processes cleared");
        self.processes.clear();
    }

    /// Read view of the records in insertion order.
    pub fn processes(&self) -> &[Process] {
        &self.processes
    }

    /// Capacity constant.
    pub fn max_processes(&self) -> usize {
        MAX_PROCESSES
    }

    /// Number of records held.
    pub fn len(&self) -> usize {
        self.processes.len()
    }

    /// Whether no records are held.
    pub fn is_empty(&self) -> bool {
        self.processes.is_empty()
    }

    /// How many more records can be added.
    pub fn remaining_capacity(&self) -> usize {
        MAX_PROCESSES.saturating_sub(self.processes.len())
    }

    /// Indices of valid records in execution order.
    pub fn execution_order(&self) -> Vec<usize> {
        execution_order(&self.processes)
    }

    /// Computes FCFS metrics for every held record.
    ///
    /// No-op when the collection is empty or holds no valid record.
    pub fn calculate_metrics(&mut self) {
        if self.processes.is_empty() {
            return;
        }

        let plan = dispatch_plan(&self.processes);
        if plan.is_empty() {
            debug!(
                count = self.processes.len(),
                "no valid processes, metrics left untouched"
            );
            return;
        }

        for &(idx, dispatch) in &plan {
            self.processes[idx].apply_dispatch(dispatch);
        }

        let (_, invalid) = validation::partition_indices(&self.processes);
        for &idx in &invalid {
            self.processes[idx].reset_metrics();
        }

        debug!(
            valid = plan.len(),
            invalid = invalid.len(),
            "FCFS metrics calculated"
        );
    }

    /// Execution-ordered timeline of the current records.
    ///
    /// Derived by the same simulation as [`calculate_metrics`](Self::calculate_metrics)
    /// without mutating any record. Starts with an idle slot when the first
    /// dispatch is after t=0.
    pub fn timeline(&self) -> Timeline {
        let mut timeline = Timeline::new();
        let plan = dispatch_plan(&self.processes);

        if let Some(&(_, first_dispatch)) = plan.first() {
            if first_dispatch > 0 {
                timeline.push(TimelineSlot::idle(first_dispatch));
            }
        }

        for (idx, dispatch) in plan {
            let p = &self.processes[idx];
            timeline.push(TimelineSlot::running(
                p.id,
                &p.name,
                dispatch,
                i64::from(p.burst_time),
            ));
        }

        timeline
    }

    /// Aggregate metrics over the current records.
    pub fn kpi(&self) -> ScheduleKpi {
        ScheduleKpi::calculate(&self.processes)
    }

    /// Human-readable report with CRLF line endings.
    pub fn result_summary(&self) -> String {
        report::result_summary(&self.processes)
    }
}

/// Returns valid record indices stable-sorted by arrival time.
fn execution_order(processes: &[Process]) -> Vec<usize> {
    let (mut valid, _) = validation::partition_indices(processes);
    valid.sort_by_key(|&i| processes[i].arrival_time);
    valid
}

/// Simulates the single server and returns `(index, dispatch_time)` pairs
/// in execution order.
fn dispatch_plan(processes: &[Process]) -> Vec<(usize, i64)> {
    let order = execution_order(processes);
    let Some(&first) = order.first() else {
        return Vec::new();
    };

    // At most MAX_PROCESSES i32 bursts past an i32 arrival: fits in i64.
    let mut clock = i64::from(processes[first].arrival_time);
    order
        .into_iter()
        .map(|idx| {
            let p = &processes[idx];
            // Idle until the next arrival; never skip ahead to a later job.
            clock = clock.max(i64::from(p.arrival_time));
            let dispatch = clock;
            clock += i64::from(p.burst_time);
            (idx, dispatch)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SlotStatus;

    fn scheduler_with(entries: &[(&str, i32, i32)]) -> FcfsScheduler {
        let mut s = FcfsScheduler::new();
        for &(name, arrival, burst) in entries {
            assert!(s.add_process(name, arrival, burst));
        }
        s
    }

    fn metrics(p: &Process) -> (i64, i64, i64, i64) {
        (
            p.waiting_time,
            p.completion_time,
            p.turnaround_time,
            p.response_time,
        )
    }

    #[test]
    fn test_basic_three_processes() {
        let mut s = scheduler_with(&[("P1", 0, 5), ("P2", 1, 3), ("P3", 2, 8)]);
        s.calculate_metrics();

        let p = s.processes();
        assert_eq!(metrics(&p[0]), (0, 5, 5, 0));
        assert_eq!(metrics(&p[1]), (4, 8, 7, 4));
        assert_eq!(metrics(&p[2]), (6, 16, 14, 6));
    }

    #[test]
    fn test_capacity_limit() {
        let mut s = FcfsScheduler::new();
        for i in 0..MAX_PROCESSES {
            assert!(s.add_process(format!("P{i}"), i as i32, 1));
        }
        assert_eq!(s.remaining_capacity(), 0);
        assert!(!s.add_process("overflow", 0, 1));
        assert_eq!(s.len(), MAX_PROCESSES);
        assert_eq!(s.max_processes(), 10);
    }

    #[test]
    fn test_blank_name_rejected() {
        let mut s = FcfsScheduler::new();
        assert!(!s.add_process("", 0, 1));
        assert!(!s.add_process("  ", 0, 1));
        assert!(s.is_empty());
        assert!(s.add_process(" P1 ", 0, 1));
        assert_eq!(s.processes()[0].name, " P1 ");
    }

    #[test]
    fn test_invalid_inputs_are_stored() {
        let s = scheduler_with(&[("Bad", -1, 5), ("Zero", 0, 0)]);
        assert_eq!(s.len(), 2);
    }

    #[test]
    fn test_ids_are_unique_and_not_reused() {
        let mut s = scheduler_with(&[("A", 0, 1), ("A", 0, 1)]);
        let first: Vec<_> = s.processes().iter().map(|p| p.id).collect();
        assert_ne!(first[0], first[1]);

        s.clear_processes();
        s.add_process("A", 0, 1);
        assert!(!first.contains(&s.processes()[0].id));
    }

    #[test]
    fn test_unsorted_arrivals_keep_insertion_order() {
        let mut s = scheduler_with(&[("late", 10, 2), ("early", 0, 4)]);
        s.calculate_metrics();

        let p = s.processes();
        assert_eq!(p[0].name, "late");
        assert_eq!(metrics(&p[0]), (0, 12, 2, 0));
        assert_eq!(metrics(&p[1]), (0, 4, 4, 0));
        assert_eq!(s.execution_order(), vec![1, 0]);
    }

    #[test]
    fn test_extreme_inputs_keep_invariants() {
        let max = i64::from(i32::MAX);
        let mut s = scheduler_with(&[("A", 0, i32::MAX), ("B", 0, 5), ("C", i32::MAX, 1)]);
        s.calculate_metrics();

        let p = s.processes();
        assert_eq!(metrics(&p[0]), (0, max, max, 0));
        // B queues behind A's full burst.
        assert_eq!(p[1].dispatch_time(), Some(max));
        assert_eq!(p[1].completion_time, max + 5);
        // C arrives at i32::MAX and waits for B.
        assert_eq!(p[2].waiting_time, 5);
        assert_eq!(p[2].completion_time, max + 6);
        assert_eq!(p[2].turnaround_time, 6);

        let t = s.timeline();
        assert!(t.running_slots().all(|slot| slot.burst > 0));
        assert_eq!(t.makespan(), max + 6);
    }

    #[test]
    fn test_idle_gap_between_arrivals() {
        let mut s = scheduler_with(&[("A", 0, 2), ("B", 5, 3)]);
        s.calculate_metrics();
        let b = &s.processes()[1];
        assert_eq!(b.waiting_time, 0);
        assert_eq!(b.completion_time, 8);
    }

    #[test]
    fn test_late_first_arrival() {
        let mut s = scheduler_with(&[("A", 5, 2)]);
        s.calculate_metrics();
        let a = &s.processes()[0];
        assert_eq!(a.waiting_time, 0);
        assert_eq!(a.completion_time, 7);
    }

    #[test]
    fn test_equal_arrivals_keep_insertion_order() {
        let mut s = scheduler_with(&[("X", 2, 3), ("Y", 2, 1)]);
        s.calculate_metrics();
        assert_eq!(s.execution_order(), vec![0, 1]);
        assert_eq!(s.processes()[1].waiting_time, 3);
    }

    #[test]
    fn test_invalid_records_zeroed_and_skipped() {
        let mut s = scheduler_with(&[("A", 0, 3), ("Bad", -1, 5), ("B", 1, 2), ("Zero", 0, 0)]);
        s.calculate_metrics();

        let p = s.processes();
        assert_eq!(metrics(&p[1]), (0, 0, 0, 0));
        assert_eq!(metrics(&p[3]), (0, 0, 0, 0));
        // Invalid records never occupy the CPU.
        assert_eq!(metrics(&p[2]), (2, 5, 4, 2));
    }

    #[test]
    fn test_all_invalid_is_noop() {
        let mut s = scheduler_with(&[("Bad", -1, 5)]);
        s.calculate_metrics();
        assert_eq!(metrics(&s.processes()[0]), (0, 0, 0, 0));
        assert!(s.timeline().is_empty());
    }

    #[test]
    fn test_empty_is_noop() {
        let mut s = FcfsScheduler::new();
        s.calculate_metrics();
        assert!(s.is_empty());
        assert!(s.timeline().is_empty());
    }

    #[test]
    fn test_recalculate_is_stable() {
        let mut s = scheduler_with(&[("P1", 0, 5), ("P2", 1, 3)]);
        s.calculate_metrics();
        let once = s.processes().to_vec();
        s.calculate_metrics();
        assert_eq!(s.processes(), once.as_slice());
    }

    #[test]
    fn test_timeline_with_leading_idle() {
        let s = scheduler_with(&[("B", 6, 1), ("A", 3, 2), ("Bad", -1, 1)]);
        let t = s.timeline();

        assert_eq!(t.len(), 3);
        assert_eq!(t.slots[0].status, SlotStatus::Idle);
        assert_eq!((t.slots[0].start, t.slots[0].burst), (0, 3));
        assert_eq!(t.slots[1].name, "A");
        assert_eq!((t.slots[1].start, t.slots[1].burst), (3, 2));
        assert_eq!(t.slots[2].name, "B");
        assert_eq!(t.slots[2].start, 6);
        assert_eq!(t.makespan(), 7);
    }

    #[test]
    fn test_timeline_without_idle() {
        let s = scheduler_with(&[("P1", 0, 5), ("P2", 1, 3)]);
        let t = s.timeline();
        assert_eq!(t.len(), 2);
        assert!(t.slots.iter().all(|slot| slot.status == SlotStatus::Running));
        assert_eq!(t.slots[1].start, 5);
    }

    #[test]
    fn test_timeline_matches_metrics() {
        let mut s = scheduler_with(&[("P1", 4, 2), ("P2", 0, 1), ("P3", 9, 3)]);
        s.calculate_metrics();
        let t = s.timeline();
        for p in s.processes() {
            let slot = t.slot_for(p.id).unwrap();
            assert_eq!(Some(slot.start), p.dispatch_time());
            assert_eq!(slot.end(), p.completion_time);
        }
    }

    #[test]
    fn test_clear_then_summary() {
        let mut s = scheduler_with(&[("P1", 0, 5)]);
        s.clear_processes();
        assert!(s.processes().is_empty());
        assert_eq!(s.result_summary(), report::NO_PROCESSES_MESSAGE);
    }
}
