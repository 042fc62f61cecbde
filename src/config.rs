//! Simulation configuration.
//!
//! Selects which disciplines to run, the round-robin quantum and the wait
//! accounting mode. Can be built in code or loaded from JSON:
//!
//! ```json
//! { "disciplines": ["fcfs", "round-robin"], "quantum": 2, "accounting": "exact" }
//! ```
//!
//! Missing keys take their defaults: all four disciplines, quantum 1,
//! cumulative accounting.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

use crate::dispatching::rules::DEFAULT_QUANTUM;
use crate::models::{Discipline, Process, ScheduleReport};
use crate::scheduler::{scheduler_for, WaitAccounting};
use crate::validation::{validate_processes, ValidationErrors};

/// Settings for one simulation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Disciplines to run, in reporting order.
    pub disciplines: Vec<Discipline>,
    /// Round-robin quantum in ticks.
    pub quantum: i64,
    /// How wait and turnaround are derived.
    pub accounting: WaitAccounting,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            disciplines: Discipline::ALL.to_vec(),
            quantum: DEFAULT_QUANTUM,
            accounting: WaitAccounting::Cumulative,
        }
    }
}

/// Configuration errors.
#[derive(Debug)]
pub enum ConfigError {
    /// The config file could not be read.
    Io(std::io::Error),
    /// The config file is not valid JSON for this schema.
    Parse(serde_json::Error),
    /// Quantum below one tick.
    InvalidQuantum(i64),
    /// No discipline selected.
    NoDisciplines,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "cannot read config: {e}"),
            ConfigError::Parse(e) => write!(f, "invalid config: {e}"),
            ConfigError::InvalidQuantum(q) => write!(f, "quantum must be at least 1, got {q}"),
            ConfigError::NoDisciplines => write!(f, "no scheduling discipline selected"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Parse(e) => Some(e),
            _ => None,
        }
    }
}

impl SimulationConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the discipline list.
    pub fn with_disciplines(mut self, disciplines: Vec<Discipline>) -> Self {
        self.disciplines = disciplines;
        self
    }

    /// Sets the round-robin quantum.
    pub fn with_quantum(mut self, quantum: i64) -> Self {
        self.quantum = quantum;
        self
    }

    /// Sets the wait accounting mode.
    pub fn with_accounting(mut self, accounting: WaitAccounting) -> Self {
        self.accounting = accounting;
        self
    }

    /// Parses and checks a JSON configuration.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and checks a JSON configuration file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path).map_err(ConfigError::Io)?;
        Self::from_json_str(&json)
    }

    /// Checks the settings.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.quantum < 1 {
            return Err(ConfigError::InvalidQuantum(self.quantum));
        }
        if self.disciplines.is_empty() {
            return Err(ConfigError::NoDisciplines);
        }
        Ok(())
    }

    /// Runs every configured discipline over the batch.
    ///
    /// The batch is validated once up front; each discipline then works on
    /// its own copy. Reports use each discipline's default title.
    pub fn run(&self, processes: &[Process]) -> Result<Vec<ScheduleReport>, ValidationErrors> {
        validate_processes(processes)?;

        self.disciplines
            .iter()
            .map(|&d| {
                scheduler_for(d, self.quantum).schedule_with(
                    processes,
                    d.default_title(),
                    self.accounting,
                )
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationErrorKind;

    #[test]
    fn test_default_config() {
        let config = SimulationConfig::default();
        assert_eq!(config.disciplines.len(), 4);
        assert_eq!(config.quantum, 1);
        assert_eq!(config.accounting, WaitAccounting::Cumulative);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_json_partial() {
        let json = r#"{"disciplines": ["sjf", "round-robin"], "quantum": 3}"#;
        let config = SimulationConfig::from_json_str(json).unwrap();
        assert_eq!(config.disciplines, vec![Discipline::Sjf, Discipline::RoundRobin]);
        assert_eq!(config.quantum, 3);
        assert_eq!(config.accounting, WaitAccounting::Cumulative);
    }

    #[test]
    fn test_from_json_rejects_bad_quantum() {
        let err = SimulationConfig::from_json_str(r#"{"quantum": 0}"#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidQuantum(0)));
    }

    #[test]
    fn test_from_json_rejects_unknown_discipline() {
        let err = SimulationConfig::from_json_str(r#"{"disciplines": ["lottery"]}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_no_disciplines() {
        let config = SimulationConfig::new().with_disciplines(Vec::new());
        assert!(matches!(config.validate(), Err(ConfigError::NoDisciplines)));
    }

    #[test]
    fn test_run_all() {
        let processes = vec![
            Process::new(1, 0, 24),
            Process::new(2, 0, 3),
            Process::new(3, 0, 3),
        ];
        let reports = SimulationConfig::new().run(&processes).unwrap();
        let orders: Vec<Vec<i64>> = reports.iter().map(|r| r.run_order()).collect();
        assert_eq!(orders[0], vec![1, 2, 3]);
        assert_eq!(orders[1], vec![2, 3, 1]);
        assert_eq!(reports[0].title, "First-come, first-serve");
        assert_eq!(reports[3].discipline, Discipline::RoundRobin);
    }

    #[test]
    fn test_run_rejects_invalid_batch() {
        let errors = SimulationConfig::new()
            .run(&[Process::new(1, 0, 0)])
            .unwrap_err();
        assert!(errors.contains_kind(&ValidationErrorKind::NonPositiveBurst));
    }

    #[test]
    fn test_run_exact_accounting() {
        let config = SimulationConfig::new()
            .with_disciplines(vec![Discipline::RoundRobin])
            .with_accounting(WaitAccounting::Exact);
        let reports = config
            .run(&[Process::new(1, 0, 24), Process::new(2, 0, 3), Process::new(3, 0, 3)])
            .unwrap();
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].row_for(2).unwrap().wait, 5);
    }
}
