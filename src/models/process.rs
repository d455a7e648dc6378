//! Process record model.
//!
//! A process record holds one process's static inputs (name, arrival,
//! burst) and the timing metrics derived by the FCFS engine.
//!
//! Records are never validated on construction. Out-of-range inputs are
//! stored as-is and classified later, so they can be reported as invalid
//! input instead of being silently dropped.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::validation::{self, ValidationError};

/// Engine-assigned record identity.
///
/// Names are display labels and may repeat; the id is what presentation
/// state and timeline slots key on.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
pub struct ProcessId(pub u64);

impl fmt::Display for ProcessId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A process submitted for FCFS scheduling.
///
/// # Time Representation
/// All times are integer ticks relative to t=0. The caller defines what a
/// tick means. Inputs are `i32`; derived metrics are `i64`, so a full
/// collection of maximal inputs never overflows the simulated clock.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Process {
    /// Engine-assigned identity.
    pub id: ProcessId,
    /// Display label (not required to be unique).
    pub name: String,
    /// Arrival time. Negative values mark the record invalid.
    pub arrival_time: i32,
    /// Required service time. Zero or negative values mark the record invalid.
    pub burst_time: i32,
    /// Time at which execution finished.
    pub completion_time: i64,
    /// Time spent in the ready queue before dispatch.
    pub waiting_time: i64,
    /// Completion minus arrival.
    pub turnaround_time: i64,
    /// Dispatch minus arrival (equal to waiting time under FCFS).
    pub response_time: i64,
}

impl Process {
    /// Creates a record with all derived metrics at zero.
    pub fn new(name: impl Into<String>, arrival_time: i32, burst_time: i32) -> Self {
        Self {
            id: ProcessId::default(),
            name: name.into(),
            arrival_time,
            burst_time,
            completion_time: 0,
            waiting_time: 0,
            turnaround_time: 0,
            response_time: 0,
        }
    }

    /// Sets the record identity.
    pub fn with_id(mut self, id: ProcessId) -> Self {
        self.id = id;
        self
    }

    /// Whether `arrival_time >= 0` and `burst_time > 0`.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.arrival_time >= 0 && self.burst_time > 0
    }

    /// Every input constraint this record violates (empty when valid).
    pub fn violations(&self) -> Vec<ValidationError> {
        match validation::validate_process(self) {
            Ok(()) => Vec::new(),
            Err(errors) => errors,
        }
    }

    /// Simulated clock value at which the record started executing.
    ///
    /// `None` for invalid records.
    pub fn dispatch_time(&self) -> Option<i64> {
        self.is_valid()
            .then(|| i64::from(self.arrival_time) + self.waiting_time)
    }

    /// Zeroes all derived metrics.
    pub fn reset_metrics(&mut self) {
        self.completion_time = 0;
        self.waiting_time = 0;
        self.turnaround_time = 0;
        self.response_time = 0;
    }

    /// Records the outcome of dispatching this process at `dispatch`.
    pub(crate) fn apply_dispatch(&mut self, dispatch: i64) {
        let arrival = i64::from(self.arrival_time);
        self.response_time = dispatch - arrival;
        self.waiting_time = self.response_time;
        self.completion_time = dispatch + i64::from(self.burst_time);
        self.turnaround_time = self.completion_time - arrival;
    }
}
