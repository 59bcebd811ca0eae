//! Input validation for dispatching simulations.
//!
//! Checks structural integrity of a process batch before any policy
//! runs. Detects:
//! - Empty batches
//! - Non-positive burst times
//! - Negative arrival times
//! - Duplicate IDs
//! - Missing priorities (priority policy only)
//! - Non-positive quanta (round-robin only)
//!
//! Once these checks pass, every policy loop is total: each iteration
//! strictly shrinks either the pending set or some remaining burst, and
//! every map lookup is over keys present by construction.

use crate::models::Process;
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
    /// The batch contains no processes.
    EmptyInput,
    /// A process has a burst time ≤ 0.
    NonPositiveBurst,
    /// A process has an arrival time < 0.
    NegativeArrival,
    /// Two processes share the same ID.
    DuplicateId,
    /// A process lacks the priority the priority policy requires.
    MissingPriority,
    /// The round-robin quantum is ≤ 0.
    NonPositiveQuantum,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates the checks shared by every policy.
///
/// Checks:
/// 1. The batch is not empty
/// 2. Every burst time is > 0
/// 3. Every arrival time is ≥ 0
/// 4. No duplicate process IDs
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_processes(processes: &[Process]) -> ValidationResult {
    let mut errors = Vec::new();

    if processes.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyInput,
            "No processes to schedule",
        ));
    }

    let mut seen_ids = HashSet::new();
    for p in processes {
        if !seen_ids.insert(p.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate process ID: {}", p.id),
            ));
        }

        if p.burst <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveBurst,
                format!("Process '{}' has non-positive burst time {}", p.id, p.burst),
            ));
        }

        if p.arrival < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeArrival,
                format!("Process '{}' has negative arrival time {}", p.id, p.arrival),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates that every process carries a priority.
///
/// Required by the priority policy only.
pub fn validate_priorities(processes: &[Process]) -> ValidationResult {
    let errors: Vec<ValidationError> = processes
        .iter()
        .filter(|p| !p.has_priority())
        .map(|p| {
            ValidationError::new(
                ValidationErrorKind::MissingPriority,
                format!("Process '{}' has no priority", p.id),
            )
        })
        .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates the round-robin quantum.
pub fn validate_quantum(quantum: i64) -> ValidationResult {
    if quantum > 0 {
        Ok(())
    } else {
        Err(vec![ValidationError::new(
            ValidationErrorKind::NonPositiveQuantum,
            format!("Quantum must be positive, got {quantum}"),
        )])
    }
}
