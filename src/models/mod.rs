//! FCFS scheduling domain models.
//!
//! Provides the data types for the scheduling input (process records) and
//! its visualization output (timeline slots).
//!
//! # Domain Mappings
//!
//! | fcfs-schedule | Operating System | Batch Queue |
//! |---------------|------------------|-------------|
//! | Process | Process / PCB | Job |
//! | Timeline | Gantt chart | Run log |
//! | TimelineSlot | CPU burst | Job execution |

mod process;
mod timeline;

pub use process::{Process, ProcessId};
pub use timeline::{SlotStatus, Timeline, TimelineSlot};
