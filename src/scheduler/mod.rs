//! Timetable construction and load metrics.
//!
//! # Pipeline
//!
//! | Stage | Module | Output |
//! |-------|--------|--------|
//! | Event generation | `events` | shuffled session events per section |
//! | Room rotation | `rotation` | room preference order per slot |
//! | Occupancy | `usage` | busy rooms / instructors per slot, shared by all sections |
//! | Allocation | `greedy` | one grid per section |
//!
//! The allocator is greedy and never backtracks: the first event with no
//! usable slot fails the whole build.
//!
//! # KPI
//!
//! `TimetableKpi` reports room and instructor load for a finished
//! timetable.

mod error;
mod events;
mod greedy;
mod kpi;
mod rotation;
mod usage;

pub use error::TimetableError;
pub use events::{expand_quotas, generate_all, generate_events, sample_events, Event};
pub use greedy::{build_schedule, build_schedule_seeded, TimetableRequest};
pub use kpi::TimetableKpi;
pub use rotation::RoomRotation;
pub use usage::UsageTracker;
