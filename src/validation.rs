//! Input validation for simulation requests.
//!
//! The scheduling engine assumes a well-formed batch and does not
//! re-validate; these checks run on the caller side, before an algorithm
//! is invoked. Detects:
//! - Arrival/burst sequence length mismatch
//! - Empty input
//! - Non-positive burst or negative arrival
//! - Duplicate process IDs
//! - Non-positive quantum for Round Robin

use crate::models::Process;
use crate::scheduler::Algorithm;
use std::collections::HashSet;

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
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Arrival and burst sequences differ in length.
    LengthMismatch,
    /// No processes supplied.
    EmptyInput,
    /// A burst is zero or negative.
    InvalidBurst,
    /// An arrival is negative.
    InvalidArrival,
    /// Two processes share the same ID.
    DuplicateId,
    /// Round Robin selected with a non-positive quantum.
    InvalidQuantum,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Assembles a process batch from raw input sequences.
///
/// Processes are labeled `P1..Pn` in input order. The priority sequence
/// may be shorter than the others (or empty); missing entries default
/// to 0. Priorities beyond `bursts.len()` are ignored.
///
/// # Returns
/// The assembled batch, or every detected issue.
///
/// # Example
///
/// ```
/// use cpu_sched::validation::build_processes;
///
/// let batch = build_processes(&[0, 1], &[5, 3], &[2]).unwrap();
/// assert_eq!(batch[0].id, "P1");
/// assert_eq!(batch[0].priority, 2);
/// assert_eq!(batch[1].priority, 0); // Padded
/// ```
pub fn build_processes(
    arrivals: &[i64],
    bursts: &[i64],
    priorities: &[i32],
) -> Result<Vec<Process>, Vec<ValidationError>> {
    let mut errors = Vec::new();

    if arrivals.len() != bursts.len() {
        errors.push(ValidationError::new(
            ValidationErrorKind::LengthMismatch,
            format!(
                "{} arrival times but {} burst times",
                arrivals.len(),
                bursts.len()
            ),
        ));
    }
    if arrivals.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyInput,
            "Arrival and burst times must be entered for all processes",
        ));
    }
    if !errors.is_empty() {
        return Err(errors);
    }

    let batch: Vec<Process> = arrivals
        .iter()
        .zip(bursts)
        .enumerate()
        .map(|(i, (&arrival, &burst))| {
            Process::new(format!("P{}", i + 1), arrival, burst)
                .with_priority(priorities.get(i).copied().unwrap_or(0))
        })
        .collect();

    check_batch(&batch, &mut errors);
    if errors.is_empty() {
        Ok(batch)
    } else {
        Err(errors)
    }
}

/// Validates an already assembled batch against an algorithm selector.
///
/// # Checks
/// 1. Batch is non-empty
/// 2. No duplicate process IDs
/// 3. Every burst is positive, every arrival non-negative
/// 4. Quantum is positive when Round Robin is selected
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_request(processes: &[Process], algorithm: &Algorithm) -> ValidationResult {
    let mut errors = Vec::new();

    if processes.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyInput,
            "Arrival and burst times must be entered for all processes",
        ));
    }
    check_batch(processes, &mut errors);

    if let Algorithm::RoundRobin { quantum } = algorithm {
        if *quantum <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidQuantum,
                format!("Time quantum must be positive, got {quantum}"),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_batch(processes: &[Process], errors: &mut Vec<ValidationError>) {
    let mut ids = HashSet::new();
    for p in processes {
        if !ids.insert(p.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate process ID: {}", p.id),
            ));
        }
        if p.burst <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidBurst,
                format!("Process '{}' has non-positive burst {}", p.id, p.burst),
            ));
        }
        if p.arrival < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidArrival,
                format!("Process '{}' has negative arrival {}", p.id, p.arrival),
            ));
        }
    }
}
