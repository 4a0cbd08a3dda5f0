//! Input validation for timetable requests.
//!
//! The allocator assumes well-formed input. These checks run before a build
//! and detect:
//! - Empty or blank identifiers
//! - Zero periods per day, or no sections / subjects / faculty / rooms
//! - Duplicate IDs
//! - Faculty with no subjects, or claiming unknown subjects
//! - Scheduled subjects with no instructor
//! - Subjects claimed by more than one instructor
//! - Sections needing more sessions than the week has slots

use std::collections::HashSet;

use thiserror::Error;

use crate::scheduler::TimetableRequest;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{message}")]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// An identifier is empty or whitespace.
    EmptyName,
    /// Two entities of the same kind share an ID.
    DuplicateId,
    /// A count that must be positive is zero.
    NonPositiveCount,
    /// A faculty member lists a subject that does not exist.
    UnknownSubject,
    /// A subject with sessions has no instructor.
    UnassignedSubject,
    /// Several instructors claim the same subject.
    ConflictingAssignment,
    /// A faculty member teaches nothing.
    EmptyTeachingLoad,
    /// A section needs more sessions than the week has slots.
    Overbooked,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a request before building.
///
/// Checks:
/// 1. Periods per day and every entity list are non-empty
/// 2. No blank IDs
/// 3. No duplicate section, room, subject or faculty IDs
/// 4. Every faculty member teaches at least one known subject
/// 5. Every subject with sessions has an instructor
/// 6. No subject is claimed by two instructors
/// 7. Each section's sessions fit in the week
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_request(request: &TimetableRequest) -> ValidationResult {
    let mut errors = Vec::new();

    if request.periods_per_day == 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::NonPositiveCount,
            "Periods per day must be positive",
        ));
    } else if request.is_overbooked() {
        errors.push(ValidationError::new(
            ValidationErrorKind::Overbooked,
            format!(
                "Each section needs {} sessions but the week has only {} slots",
                request.events_per_section(),
                request.week().slot_count()
            ),
        ));
    }

    let faculty_ids: Vec<&str> = request.roster.faculty().iter().map(|f| f.id.as_str()).collect();
    let subject_ids: Vec<&str> = request.subjects.iter().map(|s| s.id.as_str()).collect();
    let section_ids: Vec<&str> = request.sections.iter().map(String::as_str).collect();
    let room_ids: Vec<&str> = request.rooms.iter().map(String::as_str).collect();

    check_ids("section", &section_ids, &mut errors);
    check_ids("subject", &subject_ids, &mut errors);
    check_ids("faculty", &faculty_ids, &mut errors);
    check_ids("room", &room_ids, &mut errors);

    // Faculty → subject references
    let known: HashSet<&str> = subject_ids.iter().copied().collect();
    for f in request.roster.faculty() {
        if f.subjects.is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyTeachingLoad,
                format!("Faculty {} must teach at least one subject", f.id),
            ));
        }
        for s in &f.subjects {
            if !known.contains(s.as_str()) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::UnknownSubject,
                    format!("Faculty {} assigned unknown subject {}", f.id, s),
                ));
            }
        }
    }

    // Subject → faculty coverage
    for subject in &request.subjects {
        if subject.weekly_sessions() > 0 && request.roster.instructor_for(&subject.id).is_none() {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnassignedSubject,
                format!("Subject {} has no assigned faculty", subject.id),
            ));
        }
    }

    for (subject, claimants) in request.roster.conflicts() {
        errors.push(ValidationError::new(
            ValidationErrorKind::ConflictingAssignment,
            format!(
                "Subject {} is claimed by several faculty: {}",
                subject,
                claimants.join(", ")
            ),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_ids(entity: &str, ids: &[&str], errors: &mut Vec<ValidationError>) {
    if ids.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::NonPositiveCount,
            format!("At least one {entity} is required"),
        ));
    }

    let mut seen = HashSet::new();
    for id in ids {
        if id.trim().is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyName,
                format!("{entity} name cannot be empty"),
            ));
        } else if !seen.insert(*id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate {entity} ID: {id}"),
            ));
        }
    }
}
