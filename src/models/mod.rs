//! Timetabling domain models.
//!
//! Provides the core data types for describing a weekly timetabling
//! problem and its solution.
//!
//! # Domain Mappings
//!
//! | u-timetable | School | Training Center |
//! |-------------|--------|-----------------|
//! | Section | Class / Cohort | Course Batch |
//! | Subject | Course | Module |
//! | Faculty | Teacher | Trainer |
//! | Room | Classroom / Lab | Training Room |
//! | Slot | Period on a weekday | Session block |

mod faculty;
mod subject;
mod timetable;
mod week;

pub use faculty::{Faculty, FacultyRoster};
pub use subject::{SessionKind, Subject, WeeklyQuota};
pub use timetable::{Placement, SectionGrid, Timetable};
pub use week::{Day, Slot, Week};
