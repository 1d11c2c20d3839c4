//! Input validation for simulation requests.
//!
//! Checks process records before the engine builds its working copy.
//! Detects:
//! - Negative arrival times
//! - Non-positive burst times
//! - Empty display names
//! - Duplicate process IDs

use std::collections::HashSet;

use crate::models::Process;

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
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// A process arrives before t=0.
    NegativeArrival,
    /// A process requires zero or negative CPU time.
    NonPositiveBurst,
    /// A process has an empty display name.
    EmptyName,
    /// Two processes share the same ID.
    DuplicateId,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a process list before simulation.
///
/// Checks:
/// 1. No duplicate process IDs
/// 2. All arrival times >= 0
/// 3. All burst times > 0
/// 4. All names non-empty
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_processes(processes: &[Process]) -> ValidationResult {
    let mut errors = Vec::new();
    let mut seen_ids = HashSet::new();

    for p in processes {
        if !seen_ids.insert(p.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate process ID: {}", p.id),
            ));
        }

        if p.arrival < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeArrival,
                format!("Process '{}' has negative arrival time {}", p.name, p.arrival),
            ));
        }

        if p.burst <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveBurst,
                format!("Process '{}' has non-positive burst time {}", p.name, p.burst),
            ));
        }

        if p.name.is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyName,
                format!("Process {} has an empty name", p.id),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
