//! Scheduling domain models.
//!
//! Provides the data types shared by every discipline: the process
//! records that go in and the reports that come out.
//!
//! # Domain Mappings
//!
//! | cpu-schedule | Textbook term | Report column |
//! |--------------|---------------|---------------|
//! | Process | PCB / job | ID, Priority, Burst, Arrival |
//! | RunInterval | Gantt chart cell | - |
//! | ScheduleRow | Timing table row | Wait, Turnaround, Exit |
//! | Averages | Performance measures | footer |

mod discipline;
mod process;
mod report;

pub use discipline::{Discipline, UnknownDiscipline};
pub use process::Process;
pub use report::{Averages, RunInterval, ScheduleReport, ScheduleRow};
