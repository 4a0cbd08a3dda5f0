//! Faculty (instructor) model.
//!
//! Each faculty member owns a list of subjects they can teach. The roster
//! keeps the reverse, single-valued subject → instructor mapping that the
//! event generator resolves against.
//!
//! # Conflicting claims
//! When two faculty members list the same subject, the roster keeps the
//! last one added. [`FacultyRoster::conflicts`] reports such subjects so a
//! caller can reject them during validation.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

/// An instructor and the subjects they are qualified to teach.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Faculty {
    /// Unique instructor identifier.
    pub id: String,
    /// Subject IDs this instructor teaches.
    pub subjects: Vec<String>,
}

impl Faculty {
    /// Creates an instructor with no subjects.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            subjects: Vec::new(),
        }
    }

    /// Adds a subject.
    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subjects.push(subject.into());
        self
    }

    /// Whether this instructor teaches the subject.
    pub fn teaches(&self, subject: &str) -> bool {
        self.subjects.iter().any(|s| s == subject)
    }
}

/// All instructors plus the resolved subject → instructor mapping.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacultyRoster {
    faculty: Vec<Faculty>,
    subject_to_faculty: HashMap<String, String>,
}

impl FacultyRoster {
    /// Creates an empty roster.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a roster from instructors in order; later claims on a subject
    /// overwrite earlier ones.
    pub fn from_faculty(faculty: impl IntoIterator<Item = Faculty>) -> Self {
        faculty
            .into_iter()
            .fold(Self::new(), |roster, f| roster.with_faculty(f))
    }

    /// Adds an instructor and maps each of their subjects to them.
    pub fn with_faculty(mut self, faculty: Faculty) -> Self {
        for subject in &faculty.subjects {
            self.assign(subject.clone(), faculty.id.clone());
        }
        self.faculty.push(faculty);
        self
    }

    /// Sets the instructor for a subject directly, replacing any previous
    /// assignment.
    pub fn with_assignment(
        mut self,
        subject: impl Into<String>,
        instructor: impl Into<String>,
    ) -> Self {
        self.assign(subject.into(), instructor.into());
        self
    }

    fn assign(&mut self, subject: String, instructor: String) {
        if let Some(previous) = self.subject_to_faculty.get(&subject) {
            if *previous != instructor {
                debug!(
                    subject = %subject,
                    previous = %previous,
                    instructor = %instructor,
                    "subject reassigned, keeping last instructor"
                );
            }
        }
        self.subject_to_faculty.insert(subject, instructor);
    }

    /// Instructor assigned to a subject.
    pub fn instructor_for(&self, subject: &str) -> Option<&str> {
        self.subject_to_faculty.get(subject).map(String::as_str)
    }

    /// All instructors, in insertion order.
    pub fn faculty(&self) -> &[Faculty] {
        &self.faculty
    }

    /// Looks up an instructor by ID.
    pub fn get(&self, id: &str) -> Option<&Faculty> {
        self.faculty.iter().find(|f| f.id == id)
    }

    /// The subject → instructor mapping.
    pub fn assignments(&self) -> &HashMap<String, String> {
        &self.subject_to_faculty
    }

    /// Subjects claimed by more than one distinct instructor, with every
    /// claimant in insertion order. Sorted by subject for stable output.
    pub fn conflicts(&self) -> Vec<(String, Vec<String>)> {
        let mut claims: HashMap<&str, Vec<String>> = HashMap::new();
        for f in &self.faculty {
            for subject in &f.subjects {
                let claimants = claims.entry(subject.as_str()).or_default();
                if !claimants.contains(&f.id) {
                    claimants.push(f.id.clone());
                }
            }
        }

        let mut conflicts: Vec<(String, Vec<String>)> = claims
            .into_iter()
            .filter(|(_, claimants)| claimants.len() > 1)
            .map(|(subject, claimants)| (subject.to_string(), claimants))
            .collect();
        conflicts.sort_by(|a, b| a.0.cmp(&b.0));
        conflicts
    }

    /// Number of instructors.
    pub fn len(&self) -> usize {
        self.faculty.len()
    }

    /// Whether the roster has no instructors.
    pub fn is_empty(&self) -> bool {
        self.faculty.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roster_reverse_mapping() {
        let roster = FacultyRoster::from_faculty(vec![
            Faculty::new("T1").with_subject("Math").with_subject("Physics"),
            Faculty::new("T2").with_subject("Eng"),
        ]);

        assert_eq!(roster.instructor_for("Math"), Some("T1"));
        assert_eq!(roster.instructor_for("Physics"), Some("T1"));
        assert_eq!(roster.instructor_for("Eng"), Some("T2"));
        assert_eq!(roster.instructor_for("Art"), None);
        assert_eq!(roster.len(), 2);
        assert!(roster.get("T2").unwrap().teaches("Eng"));
    }

    #[test]
    fn test_last_claim_wins() {
        let roster = FacultyRoster::from_faculty(vec![
            Faculty::new("T1").with_subject("Math"),
            Faculty::new("T2").with_subject("Math"),
        ]);

        assert_eq!(roster.instructor_for("Math"), Some("T2"));
        assert_eq!(
            roster.conflicts(),
            vec![("Math".to_string(), vec!["T1".to_string(), "T2".to_string()])]
        );
    }

    #[test]
    fn test_explicit_assignment_overrides() {
        let roster = FacultyRoster::new()
            .with_faculty(Faculty::new("T1").with_subject("Math"))
            .with_assignment("Math", "T9");
        assert_eq!(roster.instructor_for("Math"), Some("T9"));
    }

    #[test]
    fn test_no_conflicts_for_repeated_subject_same_instructor() {
        let roster = FacultyRoster::from_faculty(vec![Faculty::new("T1")
            .with_subject("Math")
            .with_subject("Math")]);
        assert!(roster.conflicts().is_empty());
    }
}
