//! Event generation.
//!
//! Expands each subject's weekly quota into individual session events for
//! a section, then shuffles them. Shuffle order decides which events get
//! first pick of scarce slots.

use std::fmt;

use rand::seq::SliceRandom;
use rand::Rng;

use super::TimetableError;
use crate::models::{FacultyRoster, SessionKind, Subject};

/// One required session: a subject, its kind, and the instructor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    /// Subject ID.
    pub subject: String,
    /// Session kind.
    pub kind: SessionKind,
    /// Instructor resolved from the roster.
    pub instructor: String,
}

impl Event {
    /// Creates an event.
    pub fn new(
        subject: impl Into<String>,
        kind: SessionKind,
        instructor: impl Into<String>,
    ) -> Self {
        Self {
            subject: subject.into(),
            kind,
            instructor: instructor.into(),
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}, {})", self.subject, self.kind, self.instructor)
    }
}

/// Builds the unshuffled event list for one section.
///
/// For each subject in order: `theory` Theory events, then `practical`
/// Practical events. Subjects with a zero quota need no instructor.
///
/// # Errors
/// [`TimetableError::UnassignedSubject`] if a subject with sessions has no
/// instructor in `roster`.
pub fn expand_quotas(
    subjects: &[Subject],
    roster: &FacultyRoster,
) -> Result<Vec<Event>, TimetableError> {
    let mut events = Vec::new();
    for (subject, instructor) in resolve_instructors(subjects, roster)? {
        for kind in SessionKind::ALL {
            for _ in 0..subject.quota.count(kind) {
                events.push(Event::new(&subject.id, kind, instructor));
            }
        }
    }
    Ok(events)
}

/// Draws the first `len` events of a shuffled section list without
/// expanding the whole list.
///
/// Each draw takes one remaining (subject, kind) session with probability
/// proportional to how many of that pair are left, so the prefix is
/// distributed like the head of a full shuffle. Used when a section needs
/// more sessions than the week has slots. The draws differ from
/// [`generate_events`] for the same seed.
///
/// # Errors
/// [`TimetableError::UnassignedSubject`] as for [`expand_quotas`].
pub fn sample_events<R: Rng + ?Sized>(
    subjects: &[Subject],
    roster: &FacultyRoster,
    len: usize,
    rng: &mut R,
) -> Result<Vec<Event>, TimetableError> {
    let mut pool: Vec<(Event, u64)> = Vec::new();
    for (subject, instructor) in resolve_instructors(subjects, roster)? {
        for kind in SessionKind::ALL {
            let count = u64::from(subject.quota.count(kind));
            if count > 0 {
                pool.push((Event::new(&subject.id, kind, instructor), count));
            }
        }
    }

    let mut remaining = pool
        .iter()
        .fold(0u64, |acc, (_, count)| acc.saturating_add(*count));
    let mut events = Vec::new();
    while events.len() < len && remaining > 0 {
        let mut pick = rng.random_range(0..remaining);
        for (event, count) in pool.iter_mut() {
            if pick < *count {
                *count -= 1;
                events.push(event.clone());
                break;
            }
            pick -= *count;
        }
        remaining -= 1;
    }
    Ok(events)
}

/// Subjects with at least one session, paired with their instructor.
fn resolve_instructors<'a>(
    subjects: &'a [Subject],
    roster: &'a FacultyRoster,
) -> Result<Vec<(&'a Subject, &'a str)>, TimetableError> {
    subjects
        .iter()
        .filter(|s| s.weekly_sessions() > 0)
        .map(|subject| {
            roster
                .instructor_for(&subject.id)
                .map(|instructor| (subject, instructor))
                .ok_or_else(|| TimetableError::UnassignedSubject {
                    subject: subject.id.clone(),
                })
        })
        .collect()
}

/// Builds and shuffles the event list for one section.
pub fn generate_events<R: Rng + ?Sized>(
    subjects: &[Subject],
    roster: &FacultyRoster,
    rng: &mut R,
) -> Result<Vec<Event>, TimetableError> {
    let mut events = expand_quotas(subjects, roster)?;
    events.shuffle(rng);
    Ok(events)
}

/// Builds a shuffled event list for every section, in section order.
///
/// One shuffle is drawn per section, so sections get independent orders.
pub fn generate_all<R: Rng + ?Sized>(
    section_count: usize,
    subjects: &[Subject],
    roster: &FacultyRoster,
    rng: &mut R,
) -> Result<Vec<Vec<Event>>, TimetableError> {
    let template = expand_quotas(subjects, roster)?;
    Ok((0..section_count)
        .map(|_| {
            let mut events = template.clone();
            events.shuffle(rng);
            events
        })
        .collect())
}
