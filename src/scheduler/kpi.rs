//! Timetable load metrics (KPIs).
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Occupancy Rate | Occupied cells / all cells, across sections |
//! | Room Load | Placements per room over the week |
//! | Room Spread | Busiest room load minus idlest room load |
//! | Instructor Load | Sessions per instructor over the week |
//! | Max Daily Load | Most sessions any instructor teaches on one day |

use std::collections::BTreeMap;

use crate::models::{Day, Timetable};

/// Load indicators for a finished timetable.
///
/// Maps are ordered by ID for stable output.
#[derive(Debug, Clone, PartialEq)]
pub struct TimetableKpi {
    /// Cells holding a placement, across all sections.
    pub occupied_cells: usize,
    /// Cells left free, across all sections.
    pub free_cells: usize,
    /// Fraction of cells occupied (0.0..1.0).
    pub occupancy_rate: f64,
    /// Placements per room. Rooms never used appear with 0.
    pub room_load: BTreeMap<String, usize>,
    /// Busiest room load minus idlest room load.
    pub room_spread: usize,
    /// Sessions per instructor.
    pub instructor_load: BTreeMap<String, usize>,
    /// Highest number of sessions any instructor teaches on a single day.
    pub max_daily_instructor_load: usize,
}

impl TimetableKpi {
    /// Computes KPIs from a timetable.
    ///
    /// # Arguments
    /// * `timetable` - The built timetable.
    /// * `rooms` - All rooms available to the build, so idle rooms count.
    pub fn calculate(timetable: &Timetable, rooms: &[String]) -> Self {
        let mut room_load: BTreeMap<String, usize> =
            rooms.iter().map(|r| (r.clone(), 0)).collect();
        let mut instructor_load: BTreeMap<String, usize> = BTreeMap::new();
        let mut daily: BTreeMap<(&str, Day), usize> = BTreeMap::new();
        let mut occupied = 0usize;
        let mut cells = 0usize;

        for grid in timetable.sections() {
            cells += grid.week().slot_count();
            for (slot, p) in grid.placements() {
                occupied += 1;
                *room_load.entry(p.room.clone()).or_insert(0) += 1;
                *instructor_load.entry(p.instructor.clone()).or_insert(0) += 1;
                *daily.entry((p.instructor.as_str(), slot.day)).or_insert(0) += 1;
            }
        }

        let room_spread = match (room_load.values().max(), room_load.values().min()) {
            (Some(max), Some(min)) => max - min,
            _ => 0,
        };

        let occupancy_rate = if cells == 0 {
            0.0
        } else {
            occupied as f64 / cells as f64
        };

        Self {
            occupied_cells: occupied,
            free_cells: cells - occupied,
            occupancy_rate,
            room_load,
            room_spread,
            instructor_load,
            max_daily_instructor_load: daily.values().copied().max().unwrap_or(0),
        }
    }

    /// Whether room usage is at least as even as `max_spread`.
    pub fn rooms_balanced(&self, max_spread: usize) -> bool {
        self.room_spread <= max_spread
    }
}
