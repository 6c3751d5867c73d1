//! Weekly shift roster engine.
//!
//! Assigns workers to a fixed weekly grid of seven days × three shifts,
//! honoring per-day shift preferences under two hard limits: a worker
//! works at most five days, and every shift slot holds at most two
//! workers (the target staffing level).
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Day`, `ShiftKind`, `Slot`, `Worker`,
//!   `WeeklySchedule`, `Shortfall`
//! - **`engine`**: The two-phase `AssignmentEngine` (preference pass,
//!   then randomized repair pass) and `ScheduleSummary`
//! - **`roster`**: JSON roster input and the built-in demo roster
//! - **`validation`**: Roster integrity checks (duplicate names, unknown labels)
//! - **`report`**: Plain-text rendering of a finished schedule
//!
//! # Example
//!
//! ```
//! use shift_roster::roster;
//!
//! let mut demo = roster::demo();
//! demo.config.seed = Some(42);
//! let outcome = demo.into_engine().unwrap().assign_shifts();
//!
//! for (_, workers) in outcome.schedule().iter() {
//!     assert!(workers.len() <= 2);
//! }
//! assert!(outcome.workers().iter().all(|w| w.workdays() <= 5));
//! ```

pub mod engine;
pub mod error;
pub mod models;
pub mod report;
pub mod roster;
pub mod validation;

pub use error::{Result, RosterError};
