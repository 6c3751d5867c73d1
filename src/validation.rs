//! Input validation for rosters.
//!
//! Checks a roster as written, before any worker is registered, and
//! reports every problem at once rather than stopping at the first.
//! Detects:
//! - Duplicate worker names
//! - Empty worker names
//! - Unknown day labels
//! - Unknown shift labels
//! - A day listed twice for the same worker
//! - Engine limits out of range (slot capacity, weekly cap)

use std::collections::HashSet;

use crate::engine::{EngineConfig, MAX_SLOT_CAPACITY};
use crate::models::{Day, ShiftKind};
use crate::roster::{RosterFile, WorkerEntry};

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
    /// Two workers share the same name.
    DuplicateName,
    /// A worker name is empty or whitespace.
    EmptyName,
    /// A preference names a day that doesn't exist.
    UnknownDay,
    /// A preference names a shift that doesn't exist.
    UnknownShift,
    /// A worker lists the same day twice.
    RepeatedDay,
    /// An engine limit is out of range.
    InvalidConfig,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a roster's workers.
///
/// Checks:
/// 1. Every name is non-empty
/// 2. No two workers share a name
/// 3. Every day label parses
/// 4. Every shift label parses
/// 5. No worker lists a day twice
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_roster(workers: &[WorkerEntry]) -> ValidationResult {
    let mut errors = Vec::new();
    let mut names = HashSet::new();

    for worker in workers {
        if worker.name.trim().is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyName,
                "Worker with empty name",
            ));
        } else if !names.insert(worker.name.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateName,
                format!("Duplicate worker name: {}", worker.name),
            ));
        }

        let mut days = HashSet::new();
        for (day_label, shift_label) in worker.preferences.iter() {
            match day_label.parse::<Day>() {
                Ok(day) => {
                    if !days.insert(day) {
                        errors.push(ValidationError::new(
                            ValidationErrorKind::RepeatedDay,
                            format!("Worker '{}' lists {} more than once", worker.name, day),
                        ));
                    }
                }
                Err(_) => errors.push(ValidationError::new(
                    ValidationErrorKind::UnknownDay,
                    format!("Worker '{}' has unknown day '{}'", worker.name, day_label),
                )),
            }

            if shift_label.parse::<ShiftKind>().is_err() {
                errors.push(ValidationError::new(
                    ValidationErrorKind::UnknownShift,
                    format!(
                        "Worker '{}' has unknown shift '{}'",
                        worker.name, shift_label
                    ),
                ));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates engine limits.
///
/// Checks:
/// 1. `slot_capacity` is between 1 and [`MAX_SLOT_CAPACITY`]
/// 2. `max_workdays` is between 1 and the number of days in a week
pub fn validate_config(config: &EngineConfig) -> ValidationResult {
    let mut errors = Vec::new();

    if !(1..=MAX_SLOT_CAPACITY).contains(&config.slot_capacity) {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidConfig,
            format!(
                "slot_capacity must be between 1 and {}, got {}",
                MAX_SLOT_CAPACITY, config.slot_capacity
            ),
        ));
    }
    if !(1..=Day::COUNT).contains(&config.max_workdays) {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidConfig,
            format!(
                "max_workdays must be between 1 and {}, got {}",
                Day::COUNT,
                config.max_workdays
            ),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates a whole roster file: its engine limits, then its workers.
///
/// All problems from both checks are reported together.
pub fn validate_roster_file(roster: &RosterFile) -> ValidationResult {
    let mut errors = validate_config(&roster.config).err().unwrap_or_default();
    errors.extend(validate_roster(&roster.workers).err().unwrap_or_default());

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
