//! First-Come-First-Served CPU scheduling.
//!
//! Computes FCFS metrics (completion, waiting, turnaround, response) for a
//! bounded set of processes, and renders them as a text report and a
//! Gantt timeline. Invalid inputs are kept and explained in the report
//! instead of corrupting the averages.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Process`, `ProcessId`, `Timeline`, `TimelineSlot`
//! - **`validation`**: Per-record input classification (negative arrival, non-positive burst)
//! - **`scheduler`**: `FcfsScheduler` engine, `ScheduleKpi`, and the text report
//! - **`presentation`**: UI-owned visual state (color, animation, hover) keyed by `ProcessId`
//! - **`gantt`**: Plain-text Gantt chart rendering
//! - **`workload`**: Reading process triples from JSON or text
//!
//! # Example
//!
//! ```
//! use fcfs_schedule::scheduler::FcfsScheduler;
//!
//! let mut scheduler = FcfsScheduler::new();
//! scheduler.add_process("P1", 0, 5);
//! scheduler.add_process("Bad", -1, 5);
//! scheduler.calculate_metrics();
//!
//! let report = scheduler.result_summary();
//! assert!(report.contains("Status: INVALID INPUT"));
//! assert_eq!(scheduler.timeline().len(), 1);
//! ```
//!
//! # Concurrency
//!
//! The engine is single-threaded and synchronous. Callers sharing it across
//! threads must wrap it in their own lock.

pub mod gantt;
pub mod models;
pub mod presentation;
pub mod scheduler;
pub mod validation;
pub mod workload;
