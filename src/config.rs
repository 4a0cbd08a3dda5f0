//! Problem file loading.
//!
//! A problem file describes one timetable build in YAML:
//! ```yaml
//! seed: 42
//! periods_per_day: 7
//! sections: [A, B, C]     # or section_count: 3  → A, B, C
//! rooms: [R1, R2, R3]     # or room_count: 3     → CR1, CR2, CR3
//! subjects:
//!   - { name: NETW, theory: 5, practical: 1 }
//!   - { name: DAA, theory: 4, practical: 1 }
//! faculty:
//!   - { name: Suman, subjects: [NETW] }
//!   - { name: Nipa, subjects: [DAA] }
//! ```
//!
//! Explicit `sections` / `rooms` lists take precedence over the counts.
//! List order is kept: it decides allocation order and room preference.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::models::{Faculty, FacultyRoster, Subject};
use crate::scheduler::TimetableRequest;

/// Seed used when neither the file nor the caller provides one.
pub const DEFAULT_SEED: u64 = 42;

/// A subject entry in the problem file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubjectEntry {
    pub name: String,
    #[serde(default)]
    pub theory: u32,
    #[serde(default)]
    pub practical: u32,
}

/// A faculty entry in the problem file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacultyEntry {
    pub name: String,
    #[serde(default)]
    pub subjects: Vec<String>,
}

/// A complete timetabling problem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProblemConfig {
    /// RNG seed for the build.
    #[serde(default)]
    pub seed: Option<u64>,
    pub periods_per_day: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sections: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub section_count: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rooms: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub room_count: Option<usize>,
    #[serde(default)]
    pub subjects: Vec<SubjectEntry>,
    #[serde(default)]
    pub faculty: Vec<FacultyEntry>,
}

impl ProblemConfig {
    /// Parses a problem file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or is not valid YAML for
    /// this layout.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read problem file: {}", path.display()))?;
        let config = Self::from_yaml_str(&text)
            .with_context(|| format!("Failed to parse problem file: {}", path.display()))?;
        info!(
            path = %path.display(),
            subjects = config.subjects.len(),
            faculty = config.faculty.len(),
            "Loaded problem file"
        );
        Ok(config)
    }

    /// Parses a problem from YAML text.
    pub fn from_yaml_str(text: &str) -> Result<Self> {
        serde_yaml::from_str(text).context("Invalid problem YAML")
    }

    /// Built-in three-section demo problem.
    pub fn sample() -> Self {
        let subject = |name: &str, theory, practical| SubjectEntry {
            name: name.into(),
            theory,
            practical,
        };
        let faculty = |name: &str, subject: &str| FacultyEntry {
            name: name.into(),
            subjects: vec![subject.into()],
        };

        Self {
            seed: Some(DEFAULT_SEED),
            periods_per_day: 7,
            sections: Some(vec!["A".into(), "B".into(), "C".into()]),
            section_count: None,
            rooms: Some(vec!["R1".into(), "R2".into(), "R3".into()]),
            room_count: None,
            subjects: vec![
                subject("NETW", 5, 1),
                subject("DAA", 4, 1),
                subject("DBMS", 3, 1),
                subject("AI", 3, 1),
            ],
            faculty: vec![
                faculty("Suman", "NETW"),
                faculty("Nipa", "DAA"),
                faculty("Sujata", "DBMS"),
                faculty("Diapayan", "AI"),
            ],
        }
    }

    /// Section IDs: the explicit list, or `A`, `B`, ... from the count.
    pub fn section_ids(&self) -> Vec<String> {
        match (&self.sections, self.section_count) {
            (Some(list), _) => list.clone(),
            (None, Some(n)) => (0..n).map(section_name).collect(),
            (None, None) => Vec::new(),
        }
    }

    /// Room IDs: the explicit list, or `CR1`, `CR2`, ... from the count.
    pub fn room_ids(&self) -> Vec<String> {
        match (&self.rooms, self.room_count) {
            (Some(list), _) => list.clone(),
            (None, Some(n)) => (1..=n).map(|i| format!("CR{i}")).collect(),
            (None, None) => Vec::new(),
        }
    }

    /// Converts the problem into a build request.
    pub fn to_request(&self) -> TimetableRequest {
        let roster = FacultyRoster::from_faculty(self.faculty.iter().map(|f| Faculty {
            id: f.name.trim().to_string(),
            subjects: f.subjects.iter().map(|s| s.trim().to_string()).collect(),
        }));

        let request = TimetableRequest {
            sections: self.section_ids(),
            subjects: self
                .subjects
                .iter()
                .map(|s| {
                    Subject::new(s.name.trim())
                        .with_theory(s.theory)
                        .with_practical(s.practical)
                })
                .collect(),
            roster,
            periods_per_day: self.periods_per_day,
            rooms: self.room_ids(),
        };
        debug!(
            sections = request.sections.len(),
            rooms = request.rooms.len(),
            "Built request from problem"
        );
        request
    }
}

/// Spreadsheet-style section names: A..Z, then AA, AB, ...
fn section_name(index: usize) -> String {
    let mut n = index + 1;
    let mut name = Vec::new();
    while n > 0 {
        let rem = (n - 1) % 26;
        name.push(b'A' + rem as u8);
        n = (n - 1) / 26;
    }
    name.reverse();
    String::from_utf8(name).unwrap_or_default()
}
