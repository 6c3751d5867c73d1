//! Schedule coverage metrics.
//!
//! Computes staffing indicators from a finished [`ScheduleOutcome`].
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Required seats | slots × capacity |
//! | Filled seats | workers placed across all slots |
//! | Coverage rate | filled / required |
//! | Understaffed slots | slots below capacity |
//! | Missing seats | sum of empty seats |
//! | Average workdays | mean days worked per worker |

use serde::Serialize;

use super::ScheduleOutcome;

/// Staffing indicators for a finished schedule.
#[derive(Debug, Clone, Serialize)]
pub struct ScheduleSummary {
    /// Seats in the week (slots × capacity).
    pub required_seats: usize,
    /// Seats actually filled.
    pub filled_seats: usize,
    /// Fraction of seats filled (0.0..1.0). 1.0 when nothing is required.
    pub coverage_rate: f64,
    /// Slots that ended below capacity.
    pub understaffed_slots: usize,
    /// Total empty seats across understaffed slots.
    pub missing_seats: usize,
    /// Mean days worked per worker (0.0 for an empty roster).
    pub avg_workdays: f64,
    /// Workers that reached the weekly cap.
    pub capped_workers: usize,
}

impl ScheduleSummary {
    /// Computes the summary for an outcome.
    pub fn calculate(outcome: &ScheduleOutcome) -> Self {
        let schedule = outcome.schedule();
        let required = schedule.required_seats();
        let filled = schedule.filled_seats();

        let coverage_rate = if required == 0 {
            1.0
        } else {
            filled as f64 / required as f64
        };

        let workers = outcome.workers();
        let avg_workdays = if workers.is_empty() {
            0.0
        } else {
            workers.iter().map(|w| w.workdays()).sum::<usize>() as f64 / workers.len() as f64
        };
        let cap = outcome.config().max_workdays;
        let capped_workers = workers.iter().filter(|w| w.workdays() >= cap).count();

        Self {
            required_seats: required,
            filled_seats: filled,
            coverage_rate,
            understaffed_slots: outcome.shortfalls().len(),
            missing_seats: outcome.shortfalls().iter().map(|f| f.missing).sum(),
            avg_workdays,
            capped_workers,
        }
    }
}

impl ScheduleOutcome {
    /// Staffing indicators for this outcome.
    pub fn summary(&self) -> ScheduleSummary {
        ScheduleSummary::calculate(self)
    }
}
