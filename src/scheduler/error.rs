//! Timetable build errors.
//!
//! A build either completes for every section or fails as a whole. None of
//! these variants come with a partial timetable.

use thiserror::Error;

use super::Event;

/// Error returned by [`build_schedule`](super::build_schedule).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimetableError {
    /// An event found no free slot with an available instructor and room.
    ///
    /// The build stops at the first such event. Earlier placements are not
    /// revisited.
    #[error("could not place {event} for section {section}")]
    InfeasibleAssignment { section: String, event: Event },

    /// A subject with a non-zero quota has no instructor in the roster.
    ///
    /// Input validation normally rejects this before a build starts.
    #[error("subject '{subject}' has no assigned instructor")]
    UnassignedSubject { subject: String },
}

impl TimetableError {
    /// Section the failure occurred in, if it is a placement failure.
    pub fn section(&self) -> Option<&str> {
        match self {
            TimetableError::InfeasibleAssignment { section, .. } => Some(section),
            TimetableError::UnassignedSubject { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SessionKind;

    #[test]
    fn test_infeasible_message() {
        let err = TimetableError::InfeasibleAssignment {
            section: "B".into(),
            event: Event::new("Math", SessionKind::Theory, "T1"),
        };
        assert_eq!(
            err.to_string(),
            "could not place Math (T, T1) for section B"
        );
        assert_eq!(err.section(), Some("B"));
    }

    #[test]
    fn test_unassigned_message() {
        let err = TimetableError::UnassignedSubject {
            subject: "Art".into(),
        };
        assert_eq!(err.to_string(), "subject 'Art' has no assigned instructor");
        assert_eq!(err.section(), None);
    }
}
