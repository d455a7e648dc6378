//! Schedule quality metrics (KPIs).
//!
//! Aggregates the per-record metrics left by the last
//! `calculate_metrics` call. Only valid records contribute.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Avg Waiting | Mean(dispatch - arrival) |
//! | Avg Turnaround | Mean(completion - arrival) |
//! | Avg Response | Mean(first dispatch - arrival) |
//! | Makespan | Latest completion time |
//! | Idle Time | Makespan minus total burst |
//! | CPU Utilization | Total burst / makespan |
//! | Throughput | Valid records / makespan |

use serde::{Deserialize, Serialize};

use crate::models::Process;

/// FCFS performance indicators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleKpi {
    /// Records held.
    pub process_count: usize,
    /// Records with valid input.
    pub valid_count: usize,
    /// Records with invalid input.
    pub invalid_count: usize,
    /// Mean waiting time. `None` when no record is valid.
    pub avg_waiting_time: Option<f64>,
    /// Mean turnaround time. `None` when no record is valid.
    pub avg_turnaround_time: Option<f64>,
    /// Mean response time. `None` when no record is valid.
    pub avg_response_time: Option<f64>,
    /// Latest completion time.
    pub makespan: i64,
    /// Time in `[0, makespan)` with no process running.
    pub idle_time: i64,
    /// Busy fraction of `[0, makespan)` (0.0..1.0).
    pub cpu_utilization: f64,
    /// Completed records per tick.
    pub throughput: f64,
}

impl ScheduleKpi {
    /// Computes KPIs from the stored records.
    pub fn calculate(processes: &[Process]) -> Self {
        let mut valid_count: usize = 0;
        let mut total_waiting: f64 = 0.0;
        let mut total_turnaround: f64 = 0.0;
        let mut total_response: f64 = 0.0;
        let mut busy: i64 = 0;
        let mut makespan: i64 = 0;

        for p in processes.iter().filter(|p| p.is_valid()) {
            valid_count += 1;
            total_waiting += p.waiting_time as f64;
            total_turnaround += p.turnaround_time as f64;
            total_response += p.response_time as f64;
            busy += i64::from(p.burst_time);
            makespan = makespan.max(p.completion_time);
        }

        let mean = |total: f64| (valid_count > 0).then(|| total / valid_count as f64);

        // Before any calculation completion times are all zero.
        let (idle_time, cpu_utilization, throughput) = if makespan > 0 {
            (
                (makespan - busy).max(0),
                busy as f64 / makespan as f64,
                valid_count as f64 / makespan as f64,
            )
        } else {
            (0, 0.0, 0.0)
        };

        Self {
            process_count: processes.len(),
            valid_count,
            invalid_count: processes.len() - valid_count,
            avg_waiting_time: mean(total_waiting),
            avg_turnaround_time: mean(total_turnaround),
            avg_response_time: mean(total_response),
            makespan,
            idle_time,
            cpu_utilization,
            throughput,
        }
    }

    /// Whether at least one record contributed to the averages.
    pub fn has_valid(&self) -> bool {
        self.valid_count > 0
    }
}
