//! Text report for an FCFS run.
//!
//! Lines end in CRLF and sections are separated by a blank line. Averages
//! cover valid records only; per-record blocks follow the stored
//! (insertion) order, not execution order.

use super::ScheduleKpi;
use crate::models::Process;
use crate::validation::ValidationErrorKind;

/// Report for an empty collection.
pub const NO_PROCESSES_MESSAGE: &str = "No processes to display.";

/// Replaces the averages when no record is valid.
pub const NO_VALID_PROCESSES_MESSAGE: &str = "No valid processes for calculation.";

/// Line terminator used by every text output of the crate.
pub const CRLF: &str = "\r\n";

/// Builds the human-readable report for `processes`.
pub fn result_summary(processes: &[Process]) -> String {
    if processes.is_empty() {
        return NO_PROCESSES_MESSAGE.to_string();
    }

    let kpi = ScheduleKpi::calculate(processes);
    let mut out = String::new();

    push_line(&mut out, "Results:");
    out.push_str(CRLF);

    match (
        kpi.avg_waiting_time,
        kpi.avg_turnaround_time,
        kpi.avg_response_time,
    ) {
        (Some(waiting), Some(turnaround), Some(response)) => {
            push_line(&mut out, &format!("Average Waiting Time: {}", format_average(waiting)));
            push_line(
                &mut out,
                &format!("Average Turnaround Time: {}", format_average(turnaround)),
            );
            push_line(&mut out, &format!("Average Response Time: {}", format_average(response)));
        }
        _ => push_line(&mut out, NO_VALID_PROCESSES_MESSAGE),
    }
    out.push_str(CRLF);

    push_line(&mut out, "Process Details:");
    for process in processes {
        write_process_block(&mut out, process);
    }

    out
}

fn write_process_block(out: &mut String, p: &Process) {
    push_line(out, &format!("Process {}:", p.name));

    if p.is_valid() {
        push_line(out, "Status: VALID");
        push_line(out, &format!("Arrival Time: {}", p.arrival_time));
        push_line(out, &format!("Burst Time: {}", p.burst_time));
        push_line(out, &format!("Completion Time: {}", p.completion_time));
        push_line(out, &format!("Waiting Time: {}", p.waiting_time));
        push_line(out, &format!("Turnaround Time: {}", p.turnaround_time));
        push_line(out, &format!("Response Time: {}", p.response_time));
    } else {
        let violations = p.violations();
        let annotation = |kind: ValidationErrorKind| {
            violations
                .iter()
                .find(|v| v.kind == kind)
                .map(|v| format!(" ({})", v.kind.reason()))
                .unwrap_or_default()
        };

        push_line(out, "Status: INVALID INPUT");
        push_line(
            out,
            &format!(
                "Arrival Time: {}{}",
                p.arrival_time,
                annotation(ValidationErrorKind::NegativeArrival)
            ),
        );
        push_line(
            out,
            &format!(
                "Burst Time: {}{}",
                p.burst_time,
                annotation(ValidationErrorKind::NonPositiveBurst)
            ),
        );
        push_line(out, "Cannot calculate metrics for invalid input.");
    }
    out.push_str(CRLF);
}

fn push_line(out: &mut String, line: &str) {
    out.push_str(line);
    out.push_str(CRLF);
}

/// Formats an average like C's `%g`: six significant digits, trailing
/// zeros removed, exponent form below `1e-4` or from `1e6` on.
///
/// `5.0` renders as `5`, `10.0 / 3.0` as `3.33333`, `1234567.0` as
/// `1.23457e+06`.
pub fn format_average(value: f64) -> String {
    if value == 0.0 || !value.is_finite() {
        return "0".to_string();
    }

    // Exponent after rounding, so 999999.6 carries into 1e+06.
    let scientific = format!("{value:.5e}");
    let (mantissa, exponent) = match scientific.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => (scientific.as_str(), 0),
    };

    if (-4..6).contains(&exponent) {
        let decimals = (5 - exponent) as usize;
        trim_fraction(&format!("{value:.decimals$}")).to_string()
    } else {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}e{sign}{:02}", trim_fraction(mantissa), exponent.abs())
    }
}

fn trim_fraction(formatted: &str) -> &str {
    if formatted.contains('.') {
        formatted.trim_end_matches('0').trim_end_matches('.')
    } else {
        formatted
    }
}
