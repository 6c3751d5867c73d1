//! Roster domain models.
//!
//! Provides the core data types for a weekly shift roster: the fixed
//! calendar grid, workers with their preferences, and the staffing
//! schedule produced by the engine.
//!
//! | Type | Meaning |
//! |------|---------|
//! | `Day` | Monday…Sunday, cyclic |
//! | `ShiftKind` | morning, afternoon, evening |
//! | `Slot` | one (day, shift) cell |
//! | `Worker` | a name plus ordered day → shift preferences |
//! | `WeeklySchedule` | slot → assigned worker names |
//! | `Shortfall` | a slot left below capacity |

mod calendar;
mod schedule;
mod worker;

pub use calendar::{Day, ParseLabelError, ShiftKind, Slot};
pub use schedule::{Shortfall, SlotAssignment, WeeklySchedule};
pub use worker::{Preferences, Worker};
