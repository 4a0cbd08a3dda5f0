//! Weekly class timetabling for the U-Engine ecosystem.
//!
//! Assigns recurring weekly sessions of several sections (student groups)
//! to (day, period) slots, so that no instructor and no room is booked
//! twice in the same slot anywhere in the institution.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Subject`, `Faculty`, `FacultyRoster`,
//!   `Slot`, `Week`, `Placement`, `SectionGrid`, `Timetable`
//! - **`scheduler`**: Event generation, room rotation, occupancy tracking,
//!   the greedy allocator, and load KPIs
//! - **`validation`**: Input integrity checks (blank/duplicate IDs, unknown
//!   subjects, unassigned or contested subjects)
//! - **`format`**: Per-day cell rendering of section grids
//! - **`config`**: YAML problem files
//!
//! # Determinism
//!
//! All randomness comes from the `rand::Rng` passed to
//! [`scheduler::build_schedule`]. The same seed and input order always
//! produce the same timetable.

pub mod config;
pub mod format;
pub mod models;
pub mod scheduler;
pub mod validation;
