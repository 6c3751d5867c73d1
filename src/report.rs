//! Plain-text schedule report.
//!
//! Renders a finished [`ScheduleOutcome`] the way a console collaborator
//! would show it: the grid day by day, then each worker's total days,
//! then any shortfalls.

use std::fmt;

use crate::engine::ScheduleOutcome;
use crate::models::{Day, ShiftKind};

/// Display adapter for a schedule outcome.
///
/// # Example
///
/// ```
/// use shift_roster::engine::{AssignmentEngine, EngineConfig};
/// use shift_roster::report::Report;
///
/// let outcome = AssignmentEngine::new(EngineConfig::default().with_seed(3)).assign_shifts();
/// let text = Report::new(&outcome).to_string();
/// assert!(text.starts_with("=== WEEKLY SCHEDULE ==="));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Report<'a> {
    outcome: &'a ScheduleOutcome,
}

impl<'a> Report<'a> {
    pub fn new(outcome: &'a ScheduleOutcome) -> Self {
        Self { outcome }
    }
}

/// Renders an outcome as text.
pub fn render(outcome: &ScheduleOutcome) -> String {
    Report::new(outcome).to_string()
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let schedule = self.outcome.schedule();

        writeln!(f, "=== WEEKLY SCHEDULE ===")?;
        for day in Day::ALL {
            writeln!(f)?;
            writeln!(f, "{day}:")?;
            for shift in ShiftKind::ALL {
                let workers = schedule.workers_on(day, shift).join(", ");
                if workers.is_empty() {
                    writeln!(f, "  {}:", shift.title())?;
                } else {
                    writeln!(f, "  {}: {}", shift.title(), workers)?;
                }
            }
        }

        writeln!(f)?;
        writeln!(f, "=== EMPLOYEE WORKDAYS ===")?;
        for worker in self.outcome.workers() {
            writeln!(f, "{}: {} days", worker.name, worker.workdays())?;
        }

        let shortfalls = self.outcome.shortfalls();
        if !shortfalls.is_empty() {
            writeln!(f)?;
            writeln!(f, "=== STAFFING SHORTFALLS ===")?;
            for shortfall in shortfalls {
                writeln!(f, "{}", shortfall.message())?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{AssignmentEngine, EngineConfig};

    #[test]
    fn test_report_layout() {
        let mut engine = AssignmentEngine::new(EngineConfig::default().with_seed(1));
        engine
            .register_worker("Neal", [(Day::Monday, ShiftKind::Morning)])
            .unwrap();
        let text = render(&engine.assign_shifts());

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "=== WEEKLY SCHEDULE ===");
        assert_eq!(lines[1], "");
        assert_eq!(lines[2], "Monday:");
        assert_eq!(lines[3], "  Morning: Neal");
        assert_eq!(lines[4], "  Afternoon:");
        assert!(text.contains("=== EMPLOYEE WORKDAYS ===\nNeal: 5 days\n"));
        assert!(text.contains("=== STAFFING SHORTFALLS ==="));
        assert!(text.contains("Not enough workers to fill morning shift on Monday (1 missing)"));
    }

    #[test]
    fn test_report_lists_every_day() {
        let outcome = AssignmentEngine::new(EngineConfig::default().with_seed(1)).assign_shifts();
        let text = render(&outcome);
        for day in Day::ALL {
            assert!(text.contains(&format!("{day}:\n")));
        }
        assert_eq!(text.matches("  Evening:").count(), Day::COUNT);
    }
}
