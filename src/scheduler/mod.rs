//! FCFS scheduler, KPI evaluation, and text reporting.
//!
//! # Algorithm
//!
//! `FcfsScheduler` runs strict arrival-order, non-preemptive,
//! single-server scheduling over a bounded record collection. Invalid
//! records are kept for reporting but never occupy the CPU.
//!
//! # KPI
//!
//! `ScheduleKpi` aggregates waiting, turnaround, and response averages
//! over valid records, plus makespan, idle time, utilization, and
//! throughput.
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

mod fcfs;
mod kpi;
pub mod report;

pub use fcfs::{FcfsScheduler, MAX_PROCESSES};
pub use kpi::ScheduleKpi;
