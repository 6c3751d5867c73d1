//! Repair pass.
//!
//! # Algorithm
//!
//! Sweeps every slot in day order, then shift order. While a slot is
//! below capacity:
//!
//! 1. Collect eligible workers: under the weekly cap and not already
//!    working that day. The set is rebuilt on every iteration because it
//!    shrinks as workers are placed.
//! 2. If nobody is eligible, record a [`Shortfall`] and move on.
//! 3. Otherwise draw one eligible worker uniformly at random and place
//!    them.
//!
//! Each iteration either fills a seat or abandons the slot, so the sweep
//! always terminates.

use rand::prelude::IndexedRandom;
use rand::Rng;
use tracing::{trace, warn};

use super::AssignmentEngine;
use crate::models::{Shortfall, Slot};

impl<R: Rng> AssignmentEngine<R> {
    pub(crate) fn repair_pass(&mut self) {
        for slot in Slot::all() {
            while self.schedule.has_room(slot) {
                let eligible = self.eligible_workers(slot);
                let Some(&w) = eligible.choose(&mut self.rng) else {
                    let missing = self.schedule.open_seats(slot);
                    warn!(
                        day = %slot.day,
                        shift = %slot.shift,
                        missing,
                        "Not enough workers to fill shift"
                    );
                    self.shortfalls.push(Shortfall::new(slot, missing));
                    break;
                };
                trace!(
                    worker = %self.workers[w].name,
                    %slot,
                    eligible = eligible.len(),
                    "Repair placement"
                );
                self.assign(w, slot);
            }
        }
    }

    /// Workers who could take `slot`, in registration order.
    fn eligible_workers(&self, slot: Slot) -> Vec<usize> {
        (0..self.workers.len())
            .filter(|&w| self.is_available(w, slot.day))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    use crate::engine::{AssignmentEngine, EngineConfig};
    use crate::models::{Day, ShiftKind, Slot, Worker};

    fn with_workers(names: &[&str], seed: u64) -> AssignmentEngine {
        let rng = SmallRng::seed_from_u64(seed);
        let mut e = AssignmentEngine::with_rng(EngineConfig::default(), rng);
        for name in names {
            e.add_worker(Worker::new(*name)).unwrap();
        }
        e
    }

    #[test]
    fn test_enough_workers_fills_every_slot() {
        // With fourteen workers at most seven can be capped before Sunday,
        // so every day still has six free workers.
        let names: Vec<String> = (0..14).map(|i| format!("W{i}")).collect();
        let refs: Vec<&str> = names.iter().map(String::as_str).collect();
        let mut e = with_workers(&refs, 3);
        e.repair_pass();

        assert!(e.schedule.is_fully_staffed());
        assert!(e.shortfalls.is_empty());
        assert_eq!(e.schedule.filled_seats(), 42);
        for load in &e.loads {
            assert!(load.workdays() <= 5);
        }
    }

    #[test]
    fn test_no_workers_every_slot_short() {
        let mut e = with_workers(&[], 0);
        e.repair_pass();

        assert_eq!(e.shortfalls.len(), Slot::COUNT);
        assert!(e.shortfalls.iter().all(|f| f.missing == 2));
        assert_eq!(e.schedule.filled_seats(), 0);
    }

    #[test]
    fn test_single_worker_leaves_second_seat_short() {
        let mut e = with_workers(&["Solo"], 0);
        e.repair_pass();

        // Solo takes Monday..Friday mornings, then is capped.
        for day in [Day::Monday, Day::Tuesday, Day::Wednesday, Day::Thursday, Day::Friday] {
            assert_eq!(e.schedule.workers_on(day, ShiftKind::Morning), ["Solo"]);
        }
        assert_eq!(e.loads[0].workdays(), 5);
        assert_eq!(
            e.shortfalls[0].slot,
            Slot::new(Day::Monday, ShiftKind::Morning)
        );
        assert_eq!(e.shortfalls[0].missing, 1);
        // Every weekend slot is completely empty.
        assert!(e
            .shortfalls
            .iter()
            .filter(|f| f.slot.day == Day::Saturday || f.slot.day == Day::Sunday)
            .all(|f| f.missing == 2));
    }

    #[test]
    fn test_repair_respects_existing_assignments() {
        let mut e = with_workers(&["A", "B", "C"], 11);
        let slot = Slot::new(Day::Monday, ShiftKind::Morning);
        e.assign(0, slot);
        e.repair_pass();

        let monday: Vec<&String> = ShiftKind::ALL
            .into_iter()
            .flat_map(|s| e.schedule.workers_on(Day::Monday, s))
            .collect();
        // Three workers, one shift each on Monday.
        assert_eq!(monday.len(), 3);
        assert_eq!(e.schedule.workers(slot)[0], "A");
        assert_eq!(e.schedule.shift_of("A", Day::Monday), Some(ShiftKind::Morning));
    }

    #[test]
    fn test_same_seed_same_result() {
        let run = |seed| {
            let mut e = with_workers(&["A", "B", "C", "D", "E"], seed);
            e.repair_pass();
            (e.schedule, e.shortfalls)
        };
        assert_eq!(run(7), run(7));
    }

    #[test]
    fn test_capped_worker_never_eligible() {
        let mut e = with_workers(&["Busy", "Free"], 5);
        for day in [Day::Monday, Day::Tuesday, Day::Wednesday, Day::Thursday, Day::Friday] {
            e.assign(0, Slot::new(day, ShiftKind::Evening));
        }
        e.repair_pass();

        assert_eq!(e.loads[0].workdays(), 5);
        assert_eq!(e.schedule.slots_for_worker("Busy").len(), 5);
        for day in [Day::Saturday, Day::Sunday] {
            assert_eq!(e.schedule.shift_of("Busy", day), None);
        }
    }
}
