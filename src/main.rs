//! FCFS scheduler command-line driver.
//!
//! Loads processes from a workload file and/or `--process` flags, runs
//! FCFS, and prints the report and a Gantt chart (or JSON).

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use serde::Serialize;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use fcfs_schedule::gantt::{self, GanttOptions};
use fcfs_schedule::models::{Process, Timeline};
use fcfs_schedule::scheduler::{FcfsScheduler, ScheduleKpi};
use fcfs_schedule::workload::{self, ProcessSpec};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Parser)]
#[command(name = "fcfs-schedule", version, about = "First-Come-First-Served CPU scheduling metrics")]
struct Cli {
    /// Workload file: a JSON array or NAME:ARRIVAL:BURST lines
    #[arg(short, long, value_name = "FILE")]
    input: Option<PathBuf>,

    /// Inline process, repeatable; appended after the workload file
    #[arg(short, long = "process", value_name = "NAME:ARRIVAL:BURST", value_parser = parse_process_arg)]
    processes: Vec<ProcessSpec>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Maximum Gantt chart width in characters
    #[arg(long, default_value_t = 72)]
    chart_width: usize,

    /// Skip the Gantt chart in text output
    #[arg(long)]
    no_chart: bool,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    processes: &'a [Process],
    kpi: ScheduleKpi,
    timeline: Timeline,
}

fn parse_process_arg(arg: &str) -> Result<ProcessSpec, String> {
    workload::parse_entry(arg, 1).map_err(|e| e.to_string())
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let mut specs = Vec::new();
    if let Some(path) = &cli.input {
        let loaded = workload::load_file(path)
            .with_context(|| format!("loading workload {}", path.display()))?;
        specs.extend(loaded);
    }
    specs.extend(cli.processes.iter().cloned());

    let mut scheduler = FcfsScheduler::new();
    let loaded = workload::load_into(&mut scheduler, &specs);
    info!(
        accepted = loaded.accepted,
        rejected = loaded.rejected,
        "Processes added: {}/{}",
        scheduler.len(),
        scheduler.max_processes()
    );

    scheduler.calculate_metrics();
    let kpi = scheduler.kpi();
    if !kpi.has_valid() {
        warn!(invalid = kpi.invalid_count, "no valid processes to schedule");
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match cli.format {
        OutputFormat::Json => {
            let report = JsonReport {
                processes: scheduler.processes(),
                kpi,
                timeline: scheduler.timeline(),
            };
            serde_json::to_writer_pretty(&mut out, &report).context("writing JSON report")?;
            writeln!(out)?;
        }
        OutputFormat::Text => {
            let options = GanttOptions::new().with_max_width(cli.chart_width);
            let chart = (!cli.no_chart).then_some(&options);
            write!(out, "{}", gantt::text_report(&scheduler, chart))?;
        }
    }

    Ok(())
}
