//! Room rotation policy.
//!
//! Precomputes a room preference order for every slot of the week. The
//! room list is rotated left by one more position at each successive slot
//! (day-major), wrapping at the room count, so each room leads the order
//! equally often across the week.

use crate::models::{Slot, Week};

/// Per-slot room preference table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomRotation {
    week: Week,
    orders: Vec<Vec<String>>,
}

impl RoomRotation {
    /// Builds the table for `rooms` over `week`.
    ///
    /// # Complexity
    /// O(s * r) where s = slots per week, r = rooms.
    pub fn new(rooms: &[String], week: Week) -> Self {
        let orders = (0..week.slot_count())
            .map(|offset| rotate(rooms, offset))
            .collect();
        Self { week, orders }
    }

    /// Room preference order at a slot. Empty for slots outside the week.
    pub fn preference(&self, slot: Slot) -> &[String] {
        self.week
            .index_of(slot)
            .map(|i| self.orders[i].as_slice())
            .unwrap_or(&[])
    }

    /// First-choice room at a slot.
    pub fn first_choice(&self, slot: Slot) -> Option<&str> {
        self.preference(slot).first().map(String::as_str)
    }
}

fn rotate(rooms: &[String], offset: usize) -> Vec<String> {
    if rooms.is_empty() {
        return Vec::new();
    }
    let k = offset % rooms.len();
    rooms[k..].iter().chain(&rooms[..k]).cloned().collect()
}
