//! Subject model.
//!
//! A subject is a course taught to every section, with a weekly quota of
//! theory and practical sessions.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of a class session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SessionKind {
    /// Lecture session.
    Theory,
    /// Lab / hands-on session.
    Practical,
}

impl SessionKind {
    /// Both kinds, in generation order.
    pub const ALL: [SessionKind; 2] = [SessionKind::Theory, SessionKind::Practical];

    /// Single-letter code used in rendered cells ("T" / "P").
    pub fn code(self) -> &'static str {
        match self {
            SessionKind::Theory => "T",
            SessionKind::Practical => "P",
        }
    }
}

impl fmt::Display for SessionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Sessions per week required for one subject, per section.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyQuota {
    /// Theory sessions per week.
    pub theory: u32,
    /// Practical sessions per week.
    pub practical: u32,
}

impl WeeklyQuota {
    /// Creates a quota.
    pub fn new(theory: u32, practical: u32) -> Self {
        Self { theory, practical }
    }

    /// Quota for the given session kind.
    pub fn count(&self, kind: SessionKind) -> u32 {
        match kind {
            SessionKind::Theory => self.theory,
            SessionKind::Practical => self.practical,
        }
    }

    /// Total sessions per week. Widened so that two `u32` quotas never
    /// overflow.
    pub fn total(&self) -> u64 {
        u64::from(self.theory) + u64::from(self.practical)
    }
}

/// A subject with its weekly quota.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    /// Unique subject identifier (e.g. "Math").
    pub id: String,
    /// Weekly session quota.
    pub quota: WeeklyQuota,
}

impl Subject {
    /// Creates a subject with an empty quota.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            quota: WeeklyQuota::default(),
        }
    }

    /// Sets the theory quota.
    pub fn with_theory(mut self, count: u32) -> Self {
        self.quota.theory = count;
        self
    }

    /// Sets the practical quota.
    pub fn with_practical(mut self, count: u32) -> Self {
        self.quota.practical = count;
        self
    }

    /// Sessions per week across both kinds.
    pub fn weekly_sessions(&self) -> u64 {
        self.quota.total()
    }
}
