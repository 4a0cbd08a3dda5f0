//! Greedy slot allocator.
//!
//! # Algorithm
//!
//! 1. Expand quotas into a shuffled event list per section.
//! 2. Precompute the per-slot room rotation.
//! 3. For each section in input order, shuffle the week's slots once.
//! 4. For each event in order, take the first slot (in that shuffled order)
//!    that is free in the section's grid and where the instructor is not
//!    busy in any section; give it the first free room in the slot's
//!    rotation order.
//! 5. If no slot works, the whole build fails. Nothing is retried or
//!    undone.
//!
//! Occupancy is shared across all sections of one build.
//!
//! # Complexity
//! O(n * s * r) where n=events, s=slots per week, r=rooms.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, warn};

use super::{generate_all, sample_events, Event, RoomRotation, TimetableError, UsageTracker};
use crate::models::{Faculty, FacultyRoster, Placement, SectionGrid, Slot, Subject, Timetable, Week};

/// Input container for a timetable build.
#[derive(Debug, Clone, Default)]
pub struct TimetableRequest {
    /// Section IDs, in allocation order.
    pub sections: Vec<String>,
    /// Subjects with weekly quotas, in generation order.
    pub subjects: Vec<Subject>,
    /// Instructors and the subject → instructor mapping.
    pub roster: FacultyRoster,
    /// Periods per teaching day.
    pub periods_per_day: usize,
    /// Room IDs, in base preference order.
    pub rooms: Vec<String>,
}

impl TimetableRequest {
    /// Creates a request with the given number of periods per day.
    pub fn new(periods_per_day: usize) -> Self {
        Self {
            periods_per_day,
            ..Default::default()
        }
    }

    /// Adds a section.
    pub fn with_section(mut self, id: impl Into<String>) -> Self {
        self.sections.push(id.into());
        self
    }

    /// Adds a subject.
    pub fn with_subject(mut self, subject: Subject) -> Self {
        self.subjects.push(subject);
        self
    }

    /// Adds an instructor.
    pub fn with_faculty(mut self, faculty: Faculty) -> Self {
        self.roster = self.roster.with_faculty(faculty);
        self
    }

    /// Replaces the roster.
    pub fn with_roster(mut self, roster: FacultyRoster) -> Self {
        self.roster = roster;
        self
    }

    /// Adds a room.
    pub fn with_room(mut self, id: impl Into<String>) -> Self {
        self.rooms.push(id.into());
        self
    }

    /// Week shape of this request.
    pub fn week(&self) -> Week {
        Week::new(self.periods_per_day)
    }

    /// Total events per section, saturating at `u64::MAX`.
    pub fn events_per_section(&self) -> u64 {
        self.subjects
            .iter()
            .fold(0u64, |acc, s| acc.saturating_add(s.weekly_sessions()))
    }

    /// Whether a section needs more events than the week has slots.
    ///
    /// Such a request can never be built.
    pub fn is_overbooked(&self) -> bool {
        self.events_per_section() > self.week().slot_count() as u64
    }
}

/// Builds a timetable for every section.
///
/// Randomness is drawn from `rng` only: one event shuffle per section
/// (all sections first, in order), then one slot shuffle per section right
/// before it is allocated. The same seed and input order always give the
/// same timetable.
///
/// # Errors
/// * [`TimetableError::InfeasibleAssignment`] for the first event that has
///   no usable slot; no partial timetable is returned.
/// * [`TimetableError::UnassignedSubject`] if the roster lacks an
///   instructor for a scheduled subject.
///
/// # Example
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use u_timetable::models::{Faculty, SessionKind, Subject};
/// use u_timetable::scheduler::{build_schedule, TimetableRequest};
///
/// let request = TimetableRequest::new(1)
///     .with_section("A")
///     .with_subject(Subject::new("Math").with_theory(1))
///     .with_faculty(Faculty::new("T1").with_subject("Math"))
///     .with_room("R1");
///
/// let timetable = build_schedule(&request, &mut StdRng::seed_from_u64(42)).unwrap();
/// let grid = timetable.section("A").unwrap();
/// assert_eq!(grid.occupied_count(), 1);
/// assert_eq!(grid.placed_count("Math", SessionKind::Theory), 1);
/// ```
pub fn build_schedule<R: Rng + ?Sized>(
    request: &TimetableRequest,
    rng: &mut R,
) -> Result<Timetable, TimetableError> {
    let week = request.week();
    // An overbooked first section fails within `slot_count + 1` events, so
    // only that prefix is drawn and later sections are never reached.
    let events = if request.is_overbooked() {
        warn!(
            events_per_section = request.events_per_section(),
            slots = week.slot_count(),
            "sections need more events than the week has slots"
        );
        vec![sample_events(
            &request.subjects,
            &request.roster,
            week.slot_count() + 1,
            rng,
        )?]
    } else {
        generate_all(
            request.sections.len(),
            &request.subjects,
            &request.roster,
            rng,
        )?
    };
    let rotation = RoomRotation::new(&request.rooms, week);
    let mut usage = UsageTracker::new();
    let mut timetable = Timetable::new(request.sections.as_slice(), week);

    info!(
        sections = request.sections.len(),
        events_per_section = request.events_per_section(),
        slots = week.slot_count(),
        rooms = request.rooms.len(),
        "building timetable"
    );

    for (index, (section, section_events)) in request.sections.iter().zip(&events).enumerate() {
        let mut slots: Vec<Slot> = week.slots().collect();
        slots.shuffle(rng);

        let grid = timetable.grid_mut(index);
        for event in section_events {
            if place_event(event, &slots, grid, &rotation, &mut usage).is_none() {
                warn!(section = %section, event = %event, "no free slot for event");
                return Err(TimetableError::InfeasibleAssignment {
                    section: section.clone(),
                    event: event.clone(),
                });
            }
        }
        debug!(section = %section, placed = grid.occupied_count(), "section allocated");
    }

    info!(
        placements = timetable.placement_count(),
        "timetable complete"
    );
    Ok(timetable)
}

/// [`build_schedule`] with a [`StdRng`] seeded from `seed`.
pub fn build_schedule_seeded(
    request: &TimetableRequest,
    seed: u64,
) -> Result<Timetable, TimetableError> {
    build_schedule(request, &mut StdRng::seed_from_u64(seed))
}

/// Places one event at the first usable slot, committing it to the grid
/// and the tracker. Returns the chosen slot.
fn place_event(
    event: &Event,
    slots: &[Slot],
    grid: &mut SectionGrid,
    rotation: &RoomRotation,
    usage: &mut UsageTracker,
) -> Option<Slot> {
    for &slot in slots {
        if !grid.is_free(slot) {
            continue;
        }
        if usage.is_instructor_busy(slot, &event.instructor) {
            continue;
        }

        let Some(room) = usage.first_free_room(slot, rotation.preference(slot)) else {
            continue;
        };

        debug!(
            section = %grid.section,
            subject = %event.subject,
            kind = %event.kind,
            instructor = %event.instructor,
            slot = %slot,
            room = %room,
            "placed"
        );
        usage.occupy(slot, room, &event.instructor);
        grid.place(
            slot,
            Placement::new(&event.subject, event.kind, &event.instructor, room),
        );
        return Some(slot);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Day, SessionKind};
    use std::collections::HashSet;

    /// Three sections sharing four instructors and three rooms.
    fn school_request() -> TimetableRequest {
        TimetableRequest::new(7)
            .with_section("A")
            .with_section("B")
            .with_section("C")
            .with_subject(Subject::new("NETW").with_theory(5).with_practical(1))
            .with_subject(Subject::new("DAA").with_theory(4).with_practical(1))
            .with_subject(Subject::new("DBMS").with_theory(3).with_practical(1))
            .with_subject(Subject::new("AI").with_theory(3).with_practical(1))
            .with_faculty(Faculty::new("Suman").with_subject("NETW"))
            .with_faculty(Faculty::new("Nipa").with_subject("DAA"))
            .with_faculty(Faculty::new("Sujata").with_subject("DBMS"))
            .with_faculty(Faculty::new("Diapayan").with_subject("AI"))
            .with_room("R1")
            .with_room("R2")
            .with_room("R3")
    }

    fn assert_invariants(request: &TimetableRequest, timetable: &Timetable) {
        let week = request.week();

        for slot in week.slots() {
            let at = timetable.placements_at(slot);
            let mut rooms = HashSet::new();
            let mut instructors = HashSet::new();
            for (_, p) in &at {
                assert!(rooms.insert(p.room.as_str()), "room double-booked at {slot}");
                assert!(
                    instructors.insert(p.instructor.as_str()),
                    "instructor double-booked at {slot}"
                );
                assert!(request.rooms.contains(&p.room));
            }
        }

        for grid in timetable.sections() {
            for subject in &request.subjects {
                for kind in SessionKind::ALL {
                    assert_eq!(
                        grid.placed_count(&subject.id, kind),
                        subject.quota.count(kind) as usize,
                        "quota mismatch for {} {kind} in {}",
                        subject.id,
                        grid.section
                    );
                }
            }
            assert_eq!(grid.occupied_count() as u64, request.events_per_section());
        }
    }

    #[test]
    fn test_minimal_feasible() {
        let request = TimetableRequest::new(1)
            .with_section("A")
            .with_subject(Subject::new("Math").with_theory(1))
            .with_faculty(Faculty::new("T1").with_subject("Math"))
            .with_room("R1");

        let timetable = build_schedule_seeded(&request, 42).unwrap();
        let grid = timetable.section("A").unwrap();

        assert_eq!(grid.occupied_count(), 1);
        let (_, placement) = grid.placements().next().unwrap();
        assert_eq!(
            *placement,
            Placement::new("Math", SessionKind::Theory, "T1", "R1")
        );
    }

    #[test]
    fn test_infeasible_capacity() {
        // 10 events, 5 slots
        let request = TimetableRequest::new(1)
            .with_section("A")
            .with_subject(Subject::new("Math").with_theory(5))
            .with_subject(Subject::new("Eng").with_theory(5))
            .with_faculty(Faculty::new("T1").with_subject("Math"))
            .with_faculty(Faculty::new("T2").with_subject("Eng"))
            .with_room("R1")
            .with_room("R2");

        let err = build_schedule_seeded(&request, 42).unwrap_err();
        match err {
            TimetableError::InfeasibleAssignment { section, .. } => assert_eq!(section, "A"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_overflowing_quota_is_infeasible() {
        let request = TimetableRequest::new(7)
            .with_section("A")
            .with_subject(Subject::new("Math").with_theory(u32::MAX).with_practical(1))
            .with_faculty(Faculty::new("T1").with_subject("Math"))
            .with_room("R1");

        assert_eq!(request.events_per_section(), u64::from(u32::MAX) + 1);
        assert!(request.is_overbooked());
        let err = build_schedule_seeded(&request, 42).unwrap_err();
        match err {
            TimetableError::InfeasibleAssignment { section, event } => {
                assert_eq!(section, "A");
                assert_eq!(event.subject, "Math");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_huge_quota_fails_in_first_section() {
        let request = TimetableRequest::new(2)
            .with_section("A")
            .with_section("B")
            .with_subject(Subject::new("Math").with_theory(2_000_000_000))
            .with_subject(Subject::new("Eng").with_practical(2_000_000_000))
            .with_faculty(Faculty::new("T1").with_subject("Math"))
            .with_faculty(Faculty::new("T2").with_subject("Eng"))
            .with_room("R1")
            .with_room("R2");

        assert_eq!(request.events_per_section(), 4_000_000_000);
        let err = build_schedule_seeded(&request, 3).unwrap_err();
        assert_eq!(err.section(), Some("A"));
        assert_eq!(build_schedule_seeded(&request, 3).unwrap_err(), err);
    }

    #[test]
    fn test_overbooked_unassigned_subject() {
        let request = TimetableRequest::new(1)
            .with_section("A")
            .with_subject(Subject::new("Art").with_theory(u32::MAX))
            .with_room("R1");

        assert!(matches!(
            build_schedule_seeded(&request, 0),
            Err(TimetableError::UnassignedSubject { .. })
        ));
    }

    #[test]
    fn test_overbooked_without_sections_builds_empty() {
        let request = TimetableRequest::new(1)
            .with_subject(Subject::new("Math").with_theory(u32::MAX))
            .with_faculty(Faculty::new("T1").with_subject("Math"))
            .with_room("R1");

        let timetable = build_schedule_seeded(&request, 0).unwrap();
        assert!(timetable.sections().is_empty());
    }

    #[test]
    fn test_exact_fit_is_not_overbooked() {
        let request = TimetableRequest::new(1).with_subject(Subject::new("Math").with_theory(5));
        assert!(!request.is_overbooked());
        assert!(request.clone().with_subject(Subject::new("Eng").with_theory(1)).is_overbooked());
    }

    #[test]
    fn test_instructor_shared_across_sections() {
        // T1 fills every slot of the week in section A, so section B has no
        // slot left where T1 is free even though its own grid is empty.
        let request = TimetableRequest::new(1)
            .with_section("A")
            .with_section("B")
            .with_subject(Subject::new("Math").with_theory(5))
            .with_faculty(Faculty::new("T1").with_subject("Math"))
            .with_room("R1")
            .with_room("R2");

        let err = build_schedule_seeded(&request, 7).unwrap_err();
        assert_eq!(
            err,
            TimetableError::InfeasibleAssignment {
                section: "B".into(),
                event: Event::new("Math", SessionKind::Theory, "T1"),
            }
        );
    }

    #[test]
    fn test_room_shared_across_sections() {
        // One room, booked every slot by section A. B's instructors are
        // free at most slots, but the room never is.
        let request = TimetableRequest::new(1)
            .with_section("A")
            .with_section("B")
            .with_subject(Subject::new("Math").with_theory(1))
            .with_subject(Subject::new("Eng").with_theory(4))
            .with_faculty(Faculty::new("T1").with_subject("Math"))
            .with_faculty(Faculty::new("T2").with_subject("Eng"))
            .with_room("R1");

        let err = build_schedule_seeded(&request, 3).unwrap_err();
        assert_eq!(err.section(), Some("B"));
    }

    #[test]
    fn test_single_session_contention_moves_to_other_day() {
        // One shared instructor and room, one session per section: B cannot
        // use A's slot, so it lands on another day.
        let request = TimetableRequest::new(1)
            .with_section("A")
            .with_section("B")
            .with_subject(Subject::new("Math").with_theory(1))
            .with_faculty(Faculty::new("T1").with_subject("Math"))
            .with_room("R1");

        let timetable = build_schedule_seeded(&request, 11).unwrap();
        let slot_a = timetable.section("A").unwrap().placements().next().unwrap().0;
        let slot_b = timetable.section("B").unwrap().placements().next().unwrap().0;
        assert_ne!(slot_a, slot_b);
        assert_invariants(&request, &timetable);
    }

    #[test]
    fn test_invariants_hold_across_seeds() {
        let request = school_request();
        for seed in 0..20 {
            let timetable = build_schedule_seeded(&request, seed).unwrap();
            assert_invariants(&request, &timetable);
        }
    }

    #[test]
    fn test_deterministic_for_seed() {
        let request = school_request();
        let a = build_schedule_seeded(&request, 42).unwrap();
        let b = build_schedule_seeded(&request, 42).unwrap();
        assert_eq!(a, b);
        assert_eq!(
            serde_json::to_string(&a).unwrap(),
            serde_json::to_string(&b).unwrap()
        );
    }

    #[test]
    fn test_first_room_follows_rotation() {
        // With nothing else booked, a lone event takes the slot's
        // first-choice room.
        let request = TimetableRequest::new(3)
            .with_section("A")
            .with_subject(Subject::new("Math").with_theory(1))
            .with_faculty(Faculty::new("T1").with_subject("Math"))
            .with_room("R1")
            .with_room("R2")
            .with_room("R3");
        let rotation = RoomRotation::new(&request.rooms, request.week());

        for seed in 0..10 {
            let timetable = build_schedule_seeded(&request, seed).unwrap();
            let (slot, placement) = timetable.section("A").unwrap().placements().next().unwrap();
            assert_eq!(Some(placement.room.as_str()), rotation.first_choice(slot));
        }
    }

    #[test]
    fn test_no_rooms_is_infeasible() {
        let request = TimetableRequest::new(2)
            .with_section("A")
            .with_subject(Subject::new("Math").with_theory(1))
            .with_faculty(Faculty::new("T1").with_subject("Math"));

        let err = build_schedule_seeded(&request, 1).unwrap_err();
        assert!(matches!(err, TimetableError::InfeasibleAssignment { .. }));
    }

    #[test]
    fn test_unassigned_subject_fails_before_allocation() {
        let request = TimetableRequest::new(2)
            .with_section("A")
            .with_subject(Subject::new("Art").with_theory(1))
            .with_room("R1");

        let err = build_schedule_seeded(&request, 1).unwrap_err();
        assert_eq!(
            err,
            TimetableError::UnassignedSubject {
                subject: "Art".into()
            }
        );
    }

    #[test]
    fn test_no_sections_builds_empty() {
        let request = TimetableRequest::new(2).with_room("R1");
        let timetable = build_schedule_seeded(&request, 0).unwrap();
        assert!(timetable.sections().is_empty());
        assert_eq!(timetable.placement_count(), 0);
    }

    #[test]
    fn test_full_week_packs_every_slot() {
        // Exactly as many events as slots: every cell is used.
        let request = TimetableRequest::new(2)
            .with_section("A")
            .with_subject(Subject::new("Math").with_theory(6).with_practical(4))
            .with_faculty(Faculty::new("T1").with_subject("Math"))
            .with_room("R1");

        let timetable = build_schedule_seeded(&request, 5).unwrap();
        let grid = timetable.section("A").unwrap();
        assert_eq!(grid.free_count(), 0);
        assert!(!grid.is_free(Slot::new(Day::Fri, 1)));
    }
}
