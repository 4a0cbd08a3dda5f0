//! Institution-wide occupancy.
//!
//! Records which rooms and instructors are busy at each slot. One tracker
//! spans an entire build across all sections, so a section allocated later
//! sees every placement made for earlier sections. Entries are only ever
//! added during a build.

use std::collections::{HashMap, HashSet};

use crate::models::Slot;

/// Busy rooms and instructors per slot.
#[derive(Debug, Clone, Default)]
pub struct UsageTracker {
    rooms: HashMap<Slot, HashSet<String>>,
    instructors: HashMap<Slot, HashSet<String>>,
}

impl UsageTracker {
    /// Creates an empty tracker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the room is taken at the slot.
    pub fn is_room_busy(&self, slot: Slot, room: &str) -> bool {
        self.rooms.get(&slot).is_some_and(|s| s.contains(room))
    }

    /// Whether the instructor is teaching at the slot.
    pub fn is_instructor_busy(&self, slot: Slot, instructor: &str) -> bool {
        self.instructors
            .get(&slot)
            .is_some_and(|s| s.contains(instructor))
    }

    /// First room in `preference` that is free at the slot.
    pub fn first_free_room<'a>(&self, slot: Slot, preference: &'a [String]) -> Option<&'a str> {
        preference
            .iter()
            .map(String::as_str)
            .find(|room| !self.is_room_busy(slot, room))
    }

    /// Marks a room and an instructor busy at the slot.
    pub fn occupy(&mut self, slot: Slot, room: &str, instructor: &str) {
        self.rooms.entry(slot).or_default().insert(room.to_string());
        self.instructors
            .entry(slot)
            .or_default()
            .insert(instructor.to_string());
    }

    /// Number of busy rooms at the slot.
    pub fn busy_room_count(&self, slot: Slot) -> usize {
        self.rooms.get(&slot).map_or(0, HashSet::len)
    }

    /// Number of busy instructors at the slot.
    pub fn busy_instructor_count(&self, slot: Slot) -> usize {
        self.instructors.get(&slot).map_or(0, HashSet::len)
    }
}
