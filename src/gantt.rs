//! Plain-text Gantt chart rendering.
//!
//! Draws a [`Timeline`] as a bar line and a time axis:
//!
//! ```text
//! |IDLE|P1      |P2   |     |P3  |
//! 0    2        6     9    12   14
//! ```
//!
//! Each tick is `unit_width` characters wide. When the chart would exceed
//! `max_width`, the scale shrinks to fit and a scale line is prepended.
//! Gaps between slots (CPU idle between arrivals) stay blank.
//!
//! Lines end in CRLF, matching the text report.

use crate::models::{SlotStatus, Timeline};
use crate::presentation::PresentationState;
use crate::scheduler::report::CRLF;
use crate::scheduler::FcfsScheduler;

/// Chart layout settings.
#[derive(Debug, Clone, PartialEq)]
pub struct GanttOptions {
    /// Widest chart allowed, in characters.
    pub max_width: usize,
    /// Characters per tick before scaling.
    pub unit_width: usize,
}

impl Default for GanttOptions {
    fn default() -> Self {
        Self {
            max_width: 72,
            unit_width: 4,
        }
    }
}

impl GanttOptions {
    /// Creates default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the maximum chart width.
    pub fn with_max_width(mut self, max_width: usize) -> Self {
        self.max_width = max_width.max(1);
        self
    }

    /// Sets the per-tick width.
    pub fn with_unit_width(mut self, unit_width: usize) -> Self {
        self.unit_width = unit_width.max(1);
        self
    }

    /// Characters per tick for a chart ending at `makespan`.
    pub fn scale(&self, makespan: i64) -> f64 {
        let natural = self.unit_width as f64;
        if makespan > 0 && makespan as f64 * natural > self.max_width as f64 {
            self.max_width as f64 / makespan as f64
        } else {
            natural
        }
    }
}

/// Renders a static chart. Empty timelines render as an empty string.
pub fn render(timeline: &Timeline, options: &GanttOptions) -> String {
    render_frame(timeline, options, None)
}

/// Renders one animation frame.
///
/// Running bars are filled up to their animation progress, and hovered
/// bars are filled with `=` instead of blanks.
pub fn render_animated(
    timeline: &Timeline,
    options: &GanttOptions,
    presentation: &PresentationState,
) -> String {
    render_frame(timeline, options, Some(presentation))
}

fn render_frame(
    timeline: &Timeline,
    options: &GanttOptions,
    presentation: Option<&PresentationState>,
) -> String {
    if timeline.is_empty() {
        return String::new();
    }

    let makespan = timeline.makespan();
    let scale = options.scale(makespan);
    let col = |t: i64| (t.max(0) as f64 * scale).round() as usize;

    let width = col(makespan) + 1;
    let mut bar = vec![' '; width];

    for slot in &timeline.slots {
        let (a, b) = (col(slot.start), col(slot.end()));
        bar[a] = '|';
        bar[b] = '|';
        if b <= a + 1 {
            continue;
        }

        let interior = b - a - 1;
        let visual = slot
            .process_id
            .and_then(|id| presentation.and_then(|p| p.get(id)));
        let drawn = match (slot.status, visual) {
            (SlotStatus::Running, Some(v)) => {
                (interior as f32 * v.progress.clamp(0.0, 1.0)).round() as usize
            }
            _ => interior,
        };
        let fill = match visual {
            Some(v) if v.hovered => '=',
            _ => ' ',
        };

        let label: Vec<char> = slot.name.chars().take(drawn).collect();
        for (offset, cell) in bar[a + 1..b].iter_mut().enumerate() {
            *cell = if offset < label.len() {
                label[offset]
            } else if offset < drawn {
                fill
            } else {
                ' '
            };
        }
    }

    let mut axis = vec![' '; width];
    let mut cursor = 0;
    let marks = timeline
        .slots
        .iter()
        .map(|s| s.start)
        .chain(std::iter::once(makespan));
    for t in marks {
        let at = col(t);
        if at < cursor {
            continue;
        }
        let text: Vec<char> = t.to_string().chars().collect();
        if axis.len() < at + text.len() {
            axis.resize(at + text.len(), ' ');
        }
        axis[at..at + text.len()].copy_from_slice(&text);
        cursor = at + text.len() + 1;
    }

    let mut out = String::new();
    if (scale - options.unit_width as f64).abs() > f64::EPSILON {
        out.push_str(&format!("Scale: 1 unit = {scale:.3} chars{CRLF}"));
    }
    out.push_str(bar.iter().collect::<String>().trim_end());
    out.push_str(CRLF);
    out.push_str(axis.iter().collect::<String>().trim_end());
    out.push_str(CRLF);
    out
}

/// Full text output: the report, then the chart section when `chart` is
/// set and there is something to draw.
///
/// The chart section is a `Gantt Chart:` heading, the chart, and a CPU
/// busy line. Every line ends in CRLF.
pub fn text_report(scheduler: &FcfsScheduler, chart: Option<&GanttOptions>) -> String {
    let mut out = scheduler.result_summary();
    if !out.ends_with(CRLF) {
        out.push_str(CRLF);
    }

    let Some(options) = chart else {
        return out;
    };
    let timeline = scheduler.timeline();
    let rendered = render(&timeline, options);
    if rendered.is_empty() {
        return out;
    }

    out.push_str("Gantt Chart:");
    out.push_str(CRLF);
    out.push_str(&rendered);
    out.push_str(&format!(
        "CPU busy: {} of {} ticks{CRLF}",
        timeline.busy_time(),
        timeline.makespan()
    ));
    out
}
