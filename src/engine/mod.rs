//! Two-phase shift assignment.
//!
//! Provides the [`AssignmentEngine`], which fills a weekly grid from a
//! roster of workers and their preferences, and the metrics computed
//! from its result.
//!
//! # Algorithm
//!
//! 1. **Preference pass**: greedy and deterministic. Each worker's
//!    preferences are honored in order, falling back to another shift the
//!    same day and then to the next day when the preferred slot is full.
//! 2. **Repair pass**: every slot still below capacity is topped up with
//!    workers drawn uniformly at random from those still eligible. Slots
//!    nobody can fill are reported as shortfalls.
//!
//! Two hard limits hold throughout: a worker works at most
//! `max_workdays` days (one shift per day), and a slot never holds more
//! than `slot_capacity` workers.

mod assigner;
mod config;
mod preference;
mod repair;
mod summary;

pub use assigner::{AssignmentEngine, ScheduleOutcome, WorkerWeek};
pub use config::{EngineConfig, DEFAULT_MAX_WORKDAYS, DEFAULT_SLOT_CAPACITY, MAX_SLOT_CAPACITY};
pub use summary::ScheduleSummary;
