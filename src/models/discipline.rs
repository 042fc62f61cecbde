//! Scheduling discipline identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The dispatch discipline that produced a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Discipline {
    /// First-Come-First-Served.
    Fcfs,
    /// Shortest-Job-First (non-preemptive).
    Sjf,
    /// Priority with aging (non-preemptive).
    Priority,
    /// Round-Robin with a fixed quantum.
    RoundRobin,
}

impl Discipline {
    /// All disciplines, in reporting order.
    pub const ALL: [Discipline; 4] = [
        Discipline::Fcfs,
        Discipline::Sjf,
        Discipline::Priority,
        Discipline::RoundRobin,
    ];

    /// Short identifier (e.g., "FCFS", "RR").
    pub fn code(&self) -> &'static str {
        match self {
            Discipline::Fcfs => "FCFS",
            Discipline::Sjf => "SJF",
            Discipline::Priority => "PRIORITY",
            Discipline::RoundRobin => "RR",
        }
    }

    /// Title used for a report when the caller has none of its own.
    pub fn default_title(&self) -> &'static str {
        match self {
            Discipline::Fcfs => "First-come, first-serve",
            Discipline::Sjf => "Shortest-job-first",
            Discipline::Priority => "Priority",
            Discipline::RoundRobin => "Round-robin",
        }
    }
}

impl fmt::Display for Discipline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Error returned when a discipline name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownDiscipline(pub String);

impl fmt::Display for UnknownDiscipline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown discipline '{}' (expected fcfs, sjf, priority or rr)",
            self.0
        )
    }
}

impl std::error::Error for UnknownDiscipline {}

impl FromStr for Discipline {
    type Err = UnknownDiscipline;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fcfs" | "fifo" => Ok(Discipline::Fcfs),
            "sjf" => Ok(Discipline::Sjf),
            "priority" | "prio" => Ok(Discipline::Priority),
            "rr" | "round-robin" | "roundrobin" => Ok(Discipline::RoundRobin),
            _ => Err(UnknownDiscipline(s.to_string())),
        }
    }
}
