//! Input validation for process batches.
//!
//! Checks every record before any discipline runs. Detects:
//! - Non-positive burst durations
//! - Negative arrival times
//! - Batches whose timeline would run past `i64::MAX`
//!
//! All offending records are reported together; no partial schedule is
//! ever produced from an invalid batch.

use std::fmt;

use crate::models::Process;

/// Validation result.
pub type ValidationResult = Result<(), ValidationErrors>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Position of the offending record in the input slice.
    pub index: usize,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Burst duration is zero or negative.
    NonPositiveBurst,
    /// Arrival time is before t=0.
    NegativeArrival,
    /// Latest arrival plus total burst does not fit in an `i64` tick.
    TimeOverflow,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, index: usize, message: impl Into<String>) -> Self {
        Self {
            kind,
            index,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "record {}: {}", self.index, self.message)
    }
}

impl std::error::Error for ValidationError {}

/// All errors found in one batch.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationErrors(pub Vec<ValidationError>);

impl ValidationErrors {
    /// The individual errors.
    pub fn errors(&self) -> &[ValidationError] {
        &self.0
    }

    /// Number of errors.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether there are no errors.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether any error has the given kind.
    pub fn contains_kind(&self, kind: &ValidationErrorKind) -> bool {
        self.0.iter().any(|e| &e.kind == kind)
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} invalid process record(s)", self.0.len())?;
        for err in &self.0 {
            write!(f, "; {err}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

/// Validates a process batch.
///
/// Checks:
/// 1. Every burst is strictly positive
/// 2. Every arrival is non-negative
/// 3. The latest arrival plus the sum of all bursts fits in an `i64`; no
///    tick any discipline computes can exceed that bound
///
/// An empty batch is valid; schedulers report it as "no data".
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_processes(processes: &[Process]) -> ValidationResult {
    let mut errors = Vec::new();

    for (index, p) in processes.iter().enumerate() {
        if p.burst <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveBurst,
                index,
                format!("Process {} has non-positive burst {}", p.id, p.burst),
            ));
        }
        if p.arrival < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeArrival,
                index,
                format!("Process {} has negative arrival {}", p.id, p.arrival),
            ));
        }
    }

    if errors.is_empty() {
        if let Some(index) = horizon_overflow(processes) {
            errors.push(ValidationError::new(
                ValidationErrorKind::TimeOverflow,
                index,
                format!(
                    "Process {} pushes the schedule past tick {}",
                    processes[index].id,
                    i64::MAX
                ),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ValidationErrors(errors))
    }
}

/// Index of the first record whose burst overflows the schedule horizon.
fn horizon_overflow(processes: &[Process]) -> Option<usize> {
    let mut horizon = processes.iter().map(|p| p.arrival).max().unwrap_or(0);
    for (index, p) in processes.iter().enumerate() {
        match horizon.checked_add(p.burst) {
            Some(next) => horizon = next,
            None => return Some(index),
        }
    }
    None
}
