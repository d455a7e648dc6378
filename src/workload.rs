//! Workload input: `(name, arrival, burst)` triples from JSON or text.
//!
//! # Formats
//!
//! JSON, an array of objects:
//!
//! ```json
//! [{ "name": "P1", "arrival": 0, "burst": 5 }]
//! ```
//!
//! Text, one process per line as `NAME:ARRIVAL:BURST` or
//! `NAME,ARRIVAL,BURST`. Blank lines and `#` comments are skipped.
//!
//! Only structural problems are errors. Negative arrivals or non-positive
//! bursts parse fine and are reported as invalid by the scheduler.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;
use tracing::warn;

use crate::scheduler::FcfsScheduler;

/// Errors raised while reading a workload.
#[derive(Debug, Error)]
pub enum WorkloadError {
    #[error("line {line}: expected NAME:ARRIVAL:BURST, got {text:?}")]
    Malformed { line: usize, text: String },

    #[error("line {line}: {field} {value:?} is not an integer")]
    NotAnInteger {
        line: usize,
        field: &'static str,
        value: String,
    },

    #[error("line {line}: process name is empty")]
    EmptyName { line: usize },

    #[error("invalid JSON workload: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to read workload: {0}")]
    Io(#[from] std::io::Error),
}

/// One submitted process, before it enters the scheduler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessSpec {
    pub name: String,
    pub arrival: i32,
    pub burst: i32,
}

impl ProcessSpec {
    /// Creates a spec.
    pub fn new(name: impl Into<String>, arrival: i32, burst: i32) -> Self {
        Self {
            name: name.into(),
            arrival,
            burst,
        }
    }
}

/// Outcome of loading specs into a scheduler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LoadSummary {
    /// Specs stored.
    pub accepted: usize,
    /// Specs the scheduler refused (full, or a blank name).
    pub rejected: usize,
}

/// Parses one `NAME:ARRIVAL:BURST` (or comma-separated) entry.
///
/// `line` is used only for error messages.
pub fn parse_entry(text: &str, line: usize) -> Result<ProcessSpec, WorkloadError> {
    let sep = if text.contains(':') { ':' } else { ',' };
    let fields: Vec<&str> = text.split(sep).map(str::trim).collect();
    let [name, arrival, burst] = fields.as_slice() else {
        return Err(WorkloadError::Malformed {
            line,
            text: text.to_string(),
        });
    };

    if name.is_empty() {
        return Err(WorkloadError::EmptyName { line });
    }

    Ok(ProcessSpec {
        name: (*name).to_string(),
        arrival: parse_int(arrival, "arrival", line)?,
        burst: parse_int(burst, "burst", line)?,
    })
}

fn parse_int(value: &str, field: &'static str, line: usize) -> Result<i32, WorkloadError> {
    value.parse().map_err(|_| WorkloadError::NotAnInteger {
        line,
        field,
        value: value.to_string(),
    })
}

/// Parses the line-oriented text format.
pub fn parse_text(input: &str) -> Result<Vec<ProcessSpec>, WorkloadError> {
    input
        .lines()
        .enumerate()
        .map(|(i, raw)| (i + 1, raw.trim()))
        .filter(|(_, text)| !text.is_empty() && !text.starts_with('#'))
        .map(|(line, text)| parse_entry(text, line))
        .collect()
}

/// Parses the JSON format.
pub fn parse_json(input: &str) -> Result<Vec<ProcessSpec>, WorkloadError> {
    let specs: Vec<ProcessSpec> = serde_json::from_str(input)?;
    if let Some(pos) = specs.iter().position(|s| s.name.trim().is_empty()) {
        return Err(WorkloadError::EmptyName { line: pos + 1 });
    }
    Ok(specs)
}

/// Parses either format, picking JSON when the input starts with `[`.
pub fn parse(input: &str) -> Result<Vec<ProcessSpec>, WorkloadError> {
    if input.trim_start().starts_with('[') {
        parse_json(input)
    } else {
        parse_text(input)
    }
}

/// Reads and parses a workload file.
pub fn load_file(path: impl AsRef<Path>) -> Result<Vec<ProcessSpec>, WorkloadError> {
    let input = std::fs::read_to_string(path)?;
    parse(&input)
}

/// Adds specs to the scheduler in order until it is full.
pub fn load_into(scheduler: &mut FcfsScheduler, specs: &[ProcessSpec]) -> LoadSummary {
    let mut summary = LoadSummary::default();
    for spec in specs {
        if scheduler.add_process(spec.name.as_str(), spec.arrival, spec.burst) {
            summary.accepted += 1;
        } else {
            summary.rejected += 1;
        }
    }
    if summary.rejected > 0 {
        warn!(
            rejected = summary.rejected,
            capacity = scheduler.max_processes(),
            "scheduler refused part of the workload"
        );
    }
    summary
}
