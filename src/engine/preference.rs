//! Preference pass.
//!
//! # Algorithm
//!
//! Workers are visited in registration order, and each worker's
//! preferences in the order they were supplied. For each (day, shift):
//!
//! 1. Skip if the worker is at the weekly cap or already works `day`.
//! 2. Take the preferred slot if it has room.
//! 3. Otherwise take the first other shift on the same day with room,
//!    scanning morning, afternoon, evening.
//! 4. Otherwise, if the worker is free on the next day (Sunday wraps to
//!    Monday), take the first shift there with room.
//! 5. Otherwise drop the preference.
//!
//! Greedy and single-pass: no decision is revisited, and no randomness is
//! involved, so the result depends only on registration and preference
//! order.

use rand::Rng;
use tracing::{debug, trace};

use super::AssignmentEngine;
use crate::models::{Day, ShiftKind, Slot};

impl<R: Rng> AssignmentEngine<R> {
    pub(crate) fn preference_pass(&mut self) {
        for w in 0..self.workers.len() {
            for i in 0..self.workers[w].preferences.len() {
                let Some((day, preferred)) = self.workers[w].preferences.at(i) else {
                    break;
                };
                if !self.is_available(w, day) {
                    continue;
                }
                match self.place_preference(w, day, preferred) {
                    Some(slot) => trace!(
                        worker = %self.workers[w].name,
                        %day,
                        %preferred,
                        assigned = %slot,
                        "Preference placed"
                    ),
                    None => debug!(
                        worker = %self.workers[w].name,
                        %day,
                        %preferred,
                        "Preference dropped, no room on day or next day"
                    ),
                }
            }
        }
    }

    /// Places worker `w` for one preference, returning the slot used.
    fn place_preference(&mut self, w: usize, day: Day, preferred: ShiftKind) -> Option<Slot> {
        let slot = Slot::new(day, preferred);
        if self.schedule.has_room(slot) {
            self.assign(w, slot);
            return Some(slot);
        }

        if let Some(shift) = self.schedule.first_open_shift(day, Some(preferred)) {
            let slot = Slot::new(day, shift);
            self.assign(w, slot);
            return Some(slot);
        }

        // Only the immediate next day is tried.
        let next = day.next();
        if self.loads[w].works_on(next) {
            return None;
        }
        let shift = self.schedule.first_open_shift(next, None)?;
        let slot = Slot::new(next, shift);
        self.assign(w, slot);
        Some(slot)
    }
}
