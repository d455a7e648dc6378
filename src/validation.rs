//! Input validation for process records.
//!
//! A record is valid iff `arrival_time >= 0` and `burst_time > 0`.
//! Validation never rejects a record from the engine: it classifies
//! stored records so the metric computation can skip them and the report
//! can explain which input was wrong.
//!
//! Every violated constraint is reported, not just the first.

use std::fmt;

use crate::models::Process;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Arrival time below zero.
    NegativeArrival,
    /// Burst time zero or below.
    NonPositiveBurst,
}

impl ValidationErrorKind {
    /// Short reason used as a report annotation.
    pub const fn reason(&self) -> &'static str {
        match self {
            Self::NegativeArrival => "cannot be negative",
            Self::NonPositiveBurst => "must be positive",
        }
    }
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Validates one process record.
///
/// Checks:
/// 1. Arrival time is not negative
/// 2. Burst time is positive
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_process(process: &Process) -> ValidationResult {
    let mut errors = Vec::new();

    if process.arrival_time < 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::NegativeArrival,
            format!(
                "Process '{}' has negative arrival time {}",
                process.name, process.arrival_time
            ),
        ));
    }

    if process.burst_time <= 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::NonPositiveBurst,
            format!(
                "Process '{}' has non-positive burst time {}",
                process.name, process.burst_time
            ),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Splits records into valid and invalid index lists, preserving order.
pub fn partition_indices(processes: &[Process]) -> (Vec<usize>, Vec<usize>) {
    (0..processes.len()).partition(|&i| processes[i].is_valid())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_process() {
        assert!(validate_process(&Process::new("P1", 0, 5)).is_ok());
    }

    #[test]
    fn test_negative_arrival() {
        let errors = validate_process(&Process::new("Bad", -1, 5)).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::NegativeArrival);
        assert!(errors[0].message.contains("Bad"));
    }

    #[test]
    fn test_zero_burst() {
        let errors = validate_process(&Process::new("Z", 2, 0)).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::NonPositiveBurst));
    }

    #[test]
    fn test_multiple_errors() {
        let errors = validate_process(&Process::new("X", -4, -4)).unwrap_err();
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn test_partition_indices() {
        let processes = vec![
            Process::new("A", 0, 1),
            Process::new("B", -1, 1),
            Process::new("C", 3, 2),
            Process::new("D", 1, 0),
        ];
        let (valid, invalid) = partition_indices(&processes);
        assert_eq!(valid, vec![0, 2]);
        assert_eq!(invalid, vec![1, 3]);
    }

    #[test]
    fn test_reason_text() {
        assert_eq!(
            ValidationErrorKind::NegativeArrival.reason(),
            "cannot be negative"
        );
        assert_eq!(
            ValidationErrorKind::NonPositiveBurst.reason(),
            "must be positive"
        );
    }
}
