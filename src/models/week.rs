//! Weekly slot grid.
//!
//! A week is five teaching days, each split into the same number of
//! periods. A [`Slot`] is one (day, period) cell of that grid.
//!
//! # Ordering
//! Slots are enumerated day-major: every period of Monday, then every
//! period of Tuesday, and so on. Slot indices follow the same order, so
//! `index = day_index * periods_per_day + period`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Teaching day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Day {
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
}

impl Day {
    /// The fixed teaching week, in order.
    pub const ALL: [Day; 5] = [Day::Mon, Day::Tue, Day::Wed, Day::Thu, Day::Fri];

    /// Short name ("Mon" .. "Fri").
    pub fn name(self) -> &'static str {
        match self {
            Day::Mon => "Mon",
            Day::Tue => "Tue",
            Day::Wed => "Wed",
            Day::Thu => "Thu",
            Day::Fri => "Fri",
        }
    }

    /// Position within the week (0 = Monday).
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A (day, period) cell of the weekly grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Slot {
    /// Teaching day.
    pub day: Day,
    /// Period within the day (0-indexed).
    pub period: usize,
}

impl Slot {
    /// Creates a slot.
    pub fn new(day: Day, period: usize) -> Self {
        Self { day, period }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.day, self.period)
    }
}

/// Shape of the teaching week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Week {
    periods_per_day: usize,
}

impl Week {
    /// Creates a week with the given number of periods per day.
    pub fn new(periods_per_day: usize) -> Self {
        Self { periods_per_day }
    }

    /// Periods per day.
    #[inline]
    pub fn periods_per_day(&self) -> usize {
        self.periods_per_day
    }

    /// Total slots in the week.
    #[inline]
    pub fn slot_count(&self) -> usize {
        Day::ALL.len() * self.periods_per_day
    }

    /// All slots, day-major.
    pub fn slots(&self) -> impl Iterator<Item = Slot> + '_ {
        Day::ALL
            .into_iter()
            .flat_map(move |day| (0..self.periods_per_day).map(move |p| Slot::new(day, p)))
    }

    /// Position of a slot in day-major order, or `None` if the period is
    /// out of range.
    pub fn index_of(&self, slot: Slot) -> Option<usize> {
        if slot.period >= self.periods_per_day {
            return None;
        }
        Some(slot.day.index() * self.periods_per_day + slot.period)
    }

    /// Whether the slot lies within this week.
    pub fn contains(&self, slot: Slot) -> bool {
        slot.period < self.periods_per_day
    }
}
