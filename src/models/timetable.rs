//! Timetable (solution) model.
//!
//! A timetable holds one weekly grid per section. Each grid cell is either
//! free or a [`Placement`]: a session bound to an instructor and a room.

use serde::{Deserialize, Serialize};

use super::{SessionKind, Slot, Week};

/// A session bound to a slot and a room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    /// Subject taught.
    pub subject: String,
    /// Session kind.
    pub kind: SessionKind,
    /// Teaching instructor.
    pub instructor: String,
    /// Room hosting the session.
    pub room: String,
}

impl Placement {
    /// Creates a placement.
    pub fn new(
        subject: impl Into<String>,
        kind: SessionKind,
        instructor: impl Into<String>,
        room: impl Into<String>,
    ) -> Self {
        Self {
            subject: subject.into(),
            kind,
            instructor: instructor.into(),
            room: room.into(),
        }
    }
}

/// One section's weekly grid.
///
/// Cells are stored day-major (see [`Week::index_of`]); each slot holds at
/// most one placement. There is exactly one cell per slot of the week;
/// deserialization rejects any other length.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "GridData")]
pub struct SectionGrid {
    /// Section identifier.
    pub section: String,
    week: Week,
    cells: Vec<Option<Placement>>,
}

/// Unchecked serialized form of a [`SectionGrid`].
#[derive(Deserialize)]
struct GridData {
    section: String,
    week: Week,
    cells: Vec<Option<Placement>>,
}

impl TryFrom<GridData> for SectionGrid {
    type Error = String;

    fn try_from(data: GridData) -> Result<Self, Self::Error> {
        let expected = data.week.slot_count();
        if data.cells.len() != expected {
            return Err(format!(
                "section {} has {} cells, expected {}",
                data.section,
                data.cells.len(),
                expected
            ));
        }
        Ok(Self {
            section: data.section,
            week: data.week,
            cells: data.cells,
        })
    }
}

impl SectionGrid {
    /// Creates an empty grid.
    pub fn new(section: impl Into<String>, week: Week) -> Self {
        Self {
            section: section.into(),
            week,
            cells: vec![None; week.slot_count()],
        }
    }

    /// Week shape of this grid.
    pub fn week(&self) -> Week {
        self.week
    }

    /// Placement at a slot, if any.
    pub fn get(&self, slot: Slot) -> Option<&Placement> {
        self.week
            .index_of(slot)
            .and_then(|i| self.cells.get(i))
            .and_then(Option::as_ref)
    }

    /// Whether a slot in this week holds no placement.
    pub fn is_free(&self, slot: Slot) -> bool {
        self.week.contains(slot) && self.get(slot).is_none()
    }

    /// Stores a placement in a free slot.
    ///
    /// Returns `false` (and leaves the grid untouched) if the slot is
    /// outside the week or already occupied.
    pub fn place(&mut self, slot: Slot, placement: Placement) -> bool {
        match self
            .week
            .index_of(slot)
            .and_then(|i| self.cells.get_mut(i))
        {
            Some(cell) if cell.is_none() => {
                *cell = Some(placement);
                true
            }
            _ => false,
        }
    }

    /// Occupied slots with their placements, day-major.
    pub fn placements(&self) -> impl Iterator<Item = (Slot, &Placement)> + '_ {
        self.week
            .slots()
            .zip(self.cells.iter())
            .filter_map(|(slot, cell)| cell.as_ref().map(|p| (slot, p)))
    }

    /// Number of placements of a subject with the given kind.
    pub fn placed_count(&self, subject: &str, kind: SessionKind) -> usize {
        self.placements()
            .filter(|(_, p)| p.subject == subject && p.kind == kind)
            .count()
    }

    /// Number of occupied slots.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Number of free slots.
    pub fn free_count(&self) -> usize {
        self.cells.len().saturating_sub(self.occupied_count())
    }
}

/// Complete timetable: one grid per section, in section input order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timetable {
    week: Week,
    sections: Vec<SectionGrid>,
}

impl Timetable {
    /// Creates a timetable with an empty grid for every section.
    pub fn new<S: AsRef<str>>(sections: &[S], week: Week) -> Self {
        Self {
            week,
            sections: sections
                .iter()
                .map(|s| SectionGrid::new(s.as_ref(), week))
                .collect(),
        }
    }

    /// Week shape shared by all grids.
    pub fn week(&self) -> Week {
        self.week
    }

    /// All section grids.
    pub fn sections(&self) -> &[SectionGrid] {
        &self.sections
    }

    /// Grid for one section.
    pub fn section(&self, id: &str) -> Option<&SectionGrid> {
        self.sections.iter().find(|g| g.section == id)
    }

    pub(crate) fn grid_mut(&mut self, index: usize) -> &mut SectionGrid {
        &mut self.sections[index]
    }

    /// Every placement at a slot across all sections, as (section, placement).
    pub fn placements_at(&self, slot: Slot) -> Vec<(&str, &Placement)> {
        self.sections
            .iter()
            .filter_map(|g| g.get(slot).map(|p| (g.section.as_str(), p)))
            .collect()
    }

    /// Total placements across all sections.
    pub fn placement_count(&self) -> usize {
        self.sections.iter().map(SectionGrid::occupied_count).sum()
    }
}
