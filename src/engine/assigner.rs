//! Assignment engine: roster registration and the two-pass run.
//!
//! The engine owns every piece of mutable state (the grid, each worker's
//! assigned days, the recorded shortfalls). Nothing is shared or global;
//! a fresh engine is the only way to start over.
//!
//! [`AssignmentEngine::assign_shifts`] consumes the engine, so the
//! procedure runs exactly once and the grid can only be read after it
//! has completed.

use std::collections::{BTreeSet, HashMap};

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use tracing::{debug, info};

use super::EngineConfig;
use crate::error::{Result, RosterError};
use crate::models::{
    Day, ParseLabelError, Preferences, ShiftKind, Shortfall, Slot, WeeklySchedule, Worker,
};

/// Days a worker has been given so far.
///
/// The workday count is the size of this set, so the two can never
/// disagree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(super) struct WorkerLoad {
    days: BTreeSet<Day>,
}

impl WorkerLoad {
    #[inline]
    pub(super) fn workdays(&self) -> usize {
        self.days.len()
    }

    #[inline]
    pub(super) fn works_on(&self, day: Day) -> bool {
        self.days.contains(&day)
    }

    fn add(&mut self, day: Day) {
        let inserted = self.days.insert(day);
        debug_assert!(inserted, "worker already assigned on {day}");
    }
}

/// Two-phase shift assignment engine.
///
/// # Example
///
/// ```
/// use shift_roster::engine::{AssignmentEngine, EngineConfig};
/// use shift_roster::models::{Day, ShiftKind};
///
/// let mut engine = AssignmentEngine::new(EngineConfig::default().with_seed(1));
/// engine
///     .register_worker("Neal", [(Day::Monday, ShiftKind::Morning)])
///     .unwrap();
/// engine
///     .register_labeled("Moz", [("Monday", "evening")])
///     .unwrap();
///
/// let outcome = engine.assign_shifts();
/// assert_eq!(outcome.schedule().workers_on(Day::Monday, ShiftKind::Morning)[0], "Neal");
/// assert!(outcome.workdays("Neal").unwrap() <= 5);
/// ```
#[derive(Debug)]
pub struct AssignmentEngine<R = SmallRng> {
    pub(super) config: EngineConfig,
    pub(super) workers: Vec<Worker>,
    pub(super) loads: Vec<WorkerLoad>,
    pub(super) schedule: WeeklySchedule,
    pub(super) shortfalls: Vec<Shortfall>,
    pub(super) rng: R,
    index: HashMap<String, usize>,
}

impl AssignmentEngine<SmallRng> {
    /// Creates an engine whose repair pass RNG is seeded from
    /// `config.seed`, or from OS entropy when no seed is set.
    pub fn new(config: EngineConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_os_rng(),
        };
        Self::with_rng(config, rng)
    }
}

impl Default for AssignmentEngine<SmallRng> {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl<R: Rng> AssignmentEngine<R> {
    /// Creates an engine drawing repair pass choices from `rng`.
    ///
    /// `config.seed` is ignored; the caller owns the RNG state.
    pub fn with_rng(config: EngineConfig, rng: R) -> Self {
        let schedule = WeeklySchedule::new(config.slot_capacity);
        Self {
            config,
            workers: Vec::new(),
            loads: Vec::new(),
            schedule,
            shortfalls: Vec::new(),
            rng,
            index: HashMap::new(),
        }
    }

    /// Engine configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Registered workers, in registration order.
    pub fn workers(&self) -> &[Worker] {
        &self.workers
    }

    /// Number of registered workers.
    pub fn worker_count(&self) -> usize {
        self.workers.len()
    }

    /// Whether a worker named `name` is registered.
    pub fn contains_worker(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Registers a worker with typed preferences.
    ///
    /// Preferences are kept in iteration order.
    ///
    /// # Errors
    /// - [`RosterError::EmptyName`] if `name` is blank.
    /// - [`RosterError::DuplicateWorker`] if `name` is already registered.
    /// - [`RosterError::InvalidPreference`] if a day appears twice.
    pub fn register_worker<I>(&mut self, name: impl Into<String>, preferences: I) -> Result<()>
    where
        I: IntoIterator<Item = (Day, ShiftKind)>,
    {
        let name = name.into();
        let mut prefs = Preferences::new();
        for (day, shift) in preferences {
            if !prefs.insert(day, shift) {
                return Err(RosterError::InvalidPreference {
                    worker: name,
                    reason: format!("{day} appears more than once"),
                });
            }
        }
        self.add_worker(Worker::new(name).with_preferences(prefs))
    }

    /// Registers a worker whose preferences are given as text labels,
    /// e.g. `("Monday", "morning")`.
    ///
    /// # Errors
    /// As [`register_worker`](Self::register_worker), plus
    /// [`RosterError::InvalidPreference`] for an unknown day or shift label.
    pub fn register_labeled<'a, I>(&mut self, name: impl Into<String>, preferences: I) -> Result<()>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let name = name.into();
        let mut parsed = Vec::new();
        for (day, shift) in preferences {
            let invalid = |e: ParseLabelError| RosterError::InvalidPreference {
                worker: name.clone(),
                reason: e.to_string(),
            };
            let day: Day = day.parse().map_err(invalid)?;
            let shift: ShiftKind = shift.parse().map_err(invalid)?;
            parsed.push((day, shift));
        }
        self.register_worker(name, parsed)
    }

    /// Registers a prepared [`Worker`].
    ///
    /// # Errors
    /// [`RosterError::EmptyName`] or [`RosterError::DuplicateWorker`].
    pub fn add_worker(&mut self, worker: Worker) -> Result<()> {
        if worker.name.trim().is_empty() {
            return Err(RosterError::EmptyName);
        }
        if self.index.contains_key(&worker.name) {
            return Err(RosterError::DuplicateWorker(worker.name));
        }
        debug!(worker = %worker.name, preferences = worker.preferences.len(), "Worker registered");
        self.index.insert(worker.name.clone(), self.workers.len());
        self.workers.push(worker);
        self.loads.push(WorkerLoad::default());
        Ok(())
    }

    /// Runs the preference pass and then the repair pass, returning the
    /// finished schedule.
    ///
    /// Never fails: slots that cannot be staffed are reported as
    /// shortfalls on the outcome (and logged as warnings).
    pub fn assign_shifts(mut self) -> ScheduleOutcome {
        self.preference_pass();
        debug!(
            filled = self.schedule.filled_seats(),
            required = self.schedule.required_seats(),
            "Preference pass complete"
        );
        self.repair_pass();
        info!(
            filled = self.schedule.filled_seats(),
            required = self.schedule.required_seats(),
            shortfalls = self.shortfalls.len(),
            "Shift assignment complete"
        );
        self.into_outcome()
    }

    /// Whether worker `w` may take a shift on `day`: under the weekly cap
    /// and not already working that day.
    #[inline]
    pub(super) fn is_available(&self, w: usize, day: Day) -> bool {
        let load = &self.loads[w];
        load.workdays() < self.config.max_workdays && !load.works_on(day)
    }

    /// Puts worker `w` into `slot` and records the day.
    pub(super) fn assign(&mut self, w: usize, slot: Slot) {
        self.schedule.place(slot, &self.workers[w].name);
        self.loads[w].add(slot.day);
    }

    fn into_outcome(self) -> ScheduleOutcome {
        let weeks = self
            .workers
            .iter()
            .zip(&self.loads)
            .map(|(worker, load)| WorkerWeek {
                name: worker.name.clone(),
                days: load.days.iter().copied().collect(),
            })
            .collect();
        ScheduleOutcome {
            config: self.config,
            schedule: self.schedule,
            workers: weeks,
            shortfalls: self.shortfalls,
        }
    }
}

/// The finished, read-only result of [`AssignmentEngine::assign_shifts`].
#[derive(Debug, Clone, Serialize)]
pub struct ScheduleOutcome {
    config: EngineConfig,
    schedule: WeeklySchedule,
    workers: Vec<WorkerWeek>,
    shortfalls: Vec<Shortfall>,
}

/// The days one worker ended up working.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorkerWeek {
    pub name: String,
    /// Assigned days in week order.
    pub days: Vec<Day>,
}

impl WorkerWeek {
    /// Number of days worked.
    pub fn workdays(&self) -> usize {
        self.days.len()
    }
}

impl ScheduleOutcome {
    /// The staffing grid.
    pub fn schedule(&self) -> &WeeklySchedule {
        &self.schedule
    }

    /// Configuration the engine ran with.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Per-worker results, in registration order.
    pub fn workers(&self) -> &[WorkerWeek] {
        &self.workers
    }

    /// Days worked by `name`, or `None` for an unknown worker.
    pub fn workdays(&self, name: &str) -> Option<usize> {
        self.workers
            .iter()
            .find(|w| w.name == name)
            .map(WorkerWeek::workdays)
    }

    /// `(name, days worked)` for every worker, in registration order.
    pub fn workday_totals(&self) -> Vec<(&str, usize)> {
        self.workers
            .iter()
            .map(|w| (w.name.as_str(), w.workdays()))
            .collect()
    }

    /// Slots the repair pass could not fill, in week order.
    pub fn shortfalls(&self) -> &[Shortfall] {
        &self.shortfalls
    }

    /// Whether every slot reached capacity.
    pub fn is_fully_staffed(&self) -> bool {
        self.shortfalls.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded() -> AssignmentEngine {
        AssignmentEngine::new(EngineConfig::default().with_seed(42))
    }

    #[test]
    fn test_register_worker() {
        let mut engine = seeded();
        engine
            .register_worker(
                "Neal",
                [
                    (Day::Monday, ShiftKind::Morning),
                    (Day::Tuesday, ShiftKind::Afternoon),
                ],
            )
            .unwrap();
        engine.add_worker(Worker::new("Idle")).unwrap();

        assert_eq!(engine.worker_count(), 2);
        assert_eq!(engine.workers()[0].name, "Neal");
        assert_eq!(engine.workers()[0].preferences.len(), 2);
        assert!(engine.workers()[1].preferences.is_empty());
        assert_eq!(engine.loads[0].workdays(), 0);
    }

    #[test]
    fn test_duplicate_worker_rejected() {
        let mut engine = seeded();
        engine.add_worker(Worker::new("Neal")).unwrap();
        let err = engine
            .register_worker("Neal", [(Day::Monday, ShiftKind::Morning)])
            .unwrap_err();
        assert!(matches!(err, RosterError::DuplicateWorker(ref n) if n == "Neal"));
        assert_eq!(engine.worker_count(), 1);
        assert!(engine.contains_worker("Neal"));
        assert!(!engine.contains_worker("Moz"));
    }

    #[test]
    fn test_empty_name_rejected() {
        let mut engine = seeded();
        let err = engine.add_worker(Worker::new("  ")).unwrap_err();
        assert!(matches!(err, RosterError::EmptyName));
    }

    #[test]
    fn test_repeated_day_rejected() {
        let mut engine = seeded();
        let err = engine
            .register_worker(
                "Neal",
                [
                    (Day::Monday, ShiftKind::Morning),
                    (Day::Monday, ShiftKind::Evening),
                ],
            )
            .unwrap_err();
        assert!(matches!(err, RosterError::InvalidPreference { .. }));
        assert_eq!(engine.worker_count(), 0);
    }

    #[test]
    fn test_register_labeled() {
        let mut engine = seeded();
        engine
            .register_labeled("Moz", [("Monday", "evening"), ("saturday", "Afternoon")])
            .unwrap();
        let prefs: Vec<_> = engine.workers()[0].preferences.iter().collect();
        assert_eq!(
            prefs,
            vec![
                (Day::Monday, ShiftKind::Evening),
                (Day::Saturday, ShiftKind::Afternoon)
            ]
        );
    }

    #[test]
    fn test_register_labeled_unknown_labels() {
        let mut engine = seeded();
        let err = engine
            .register_labeled("Moz", [("Moonday", "evening")])
            .unwrap_err();
        match err {
            RosterError::InvalidPreference { worker, reason } => {
                assert_eq!(worker, "Moz");
                assert!(reason.contains("Moonday"));
            }
            other => panic!("unexpected error: {other}"),
        }

        let err = engine
            .register_labeled("Moz", [("Monday", "night")])
            .unwrap_err();
        assert!(matches!(err, RosterError::InvalidPreference { .. }));
        assert_eq!(engine.worker_count(), 0);
    }

    #[test]
    fn test_assign_and_load_stay_consistent() {
        let mut engine = seeded();
        engine.add_worker(Worker::new("A")).unwrap();
        let slot = Slot::new(Day::Friday, ShiftKind::Evening);
        assert!(engine.is_available(0, Day::Friday));
        engine.assign(0, slot);
        assert!(!engine.is_available(0, Day::Friday));
        assert!(engine.is_available(0, Day::Saturday));
        assert_eq!(engine.loads[0].workdays(), 1);
        assert_eq!(engine.schedule.workers(slot), ["A".to_string()]);
    }

    #[test]
    fn test_cap_blocks_availability() {
        let config = EngineConfig::default().with_max_workdays(2).with_seed(1);
        let mut engine = AssignmentEngine::new(config);
        engine.add_worker(Worker::new("A")).unwrap();
        engine.assign(0, Slot::new(Day::Monday, ShiftKind::Morning));
        engine.assign(0, Slot::new(Day::Tuesday, ShiftKind::Morning));
        assert!(!engine.is_available(0, Day::Wednesday));
    }

    #[test]
    fn test_outcome_views() {
        let mut engine = seeded();
        engine.register_worker("A", [(Day::Monday, ShiftKind::Morning)]).unwrap();
        let outcome = engine.assign_shifts();

        assert_eq!(outcome.workers().len(), 1);
        assert_eq!(outcome.workdays("A"), Some(5));
        assert_eq!(outcome.workdays("B"), None);
        assert_eq!(outcome.workday_totals(), vec![("A", 5)]);
        assert!(!outcome.is_fully_staffed());
        assert_eq!(outcome.config().seed, Some(42));
    }
}
