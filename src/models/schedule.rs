//! Weekly schedule (solution) model.
//!
//! A weekly schedule maps every [`Slot`] of the week to the ordered list
//! of workers staffing it. Each slot holds at most `capacity` workers;
//! the grid only grows, entries are never removed or moved.
//!
//! Slots that could not be filled to capacity are reported separately as
//! [`Shortfall`] records. An understaffed slot is a legitimate end state,
//! not an error.

use serde::Serialize;

use super::{Day, ShiftKind, Slot};

/// The staffing grid for one week.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeeklySchedule {
    /// Maximum workers per slot.
    capacity: usize,
    /// One entry per slot, in [`Slot::all`] order.
    slots: Vec<SlotAssignment>,
}

/// The workers staffing one slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SlotAssignment {
    pub slot: Slot,
    /// Worker names in assignment order.
    pub workers: Vec<String>,
}

/// A slot left below capacity after the repair pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Shortfall {
    /// The understaffed slot.
    pub slot: Slot,
    /// Seats still empty.
    pub missing: usize,
}

impl WeeklySchedule {
    /// Creates an empty grid with the given per-slot capacity.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            slots: Slot::all()
                .map(|slot| SlotAssignment {
                    slot,
                    workers: Vec::new(),
                })
                .collect(),
        }
    }

    /// Maximum workers per slot.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Workers assigned to a slot, in assignment order.
    pub fn workers(&self, slot: Slot) -> &[String] {
        &self.slots[slot.index()].workers
    }

    /// Workers assigned to a (day, shift) pair.
    pub fn workers_on(&self, day: Day, shift: ShiftKind) -> &[String] {
        self.workers(Slot::new(day, shift))
    }

    /// Number of workers assigned to a slot.
    pub fn headcount(&self, slot: Slot) -> usize {
        self.slots[slot.index()].workers.len()
    }

    /// Whether a slot can take another worker.
    #[inline]
    pub fn has_room(&self, slot: Slot) -> bool {
        self.headcount(slot) < self.capacity
    }

    /// Empty seats left in a slot.
    pub fn open_seats(&self, slot: Slot) -> usize {
        self.capacity.saturating_sub(self.headcount(slot))
    }

    /// First shift on `day`, in [`ShiftKind::ALL`] order, that has room.
    ///
    /// `skip` is excluded from the scan.
    pub fn first_open_shift(&self, day: Day, skip: Option<ShiftKind>) -> Option<ShiftKind> {
        ShiftKind::ALL
            .into_iter()
            .filter(|&shift| Some(shift) != skip)
            .find(|&shift| self.has_room(Slot::new(day, shift)))
    }

    /// Appends a worker to a slot.
    ///
    /// Callers must check [`has_room`](Self::has_room) first; overfilling a
    /// slot is an invariant violation.
    pub(crate) fn place(&mut self, slot: Slot, worker: &str) {
        debug_assert!(
            self.has_room(slot),
            "slot {slot} is already at capacity {}",
            self.capacity
        );
        self.slots[slot.index()].workers.push(worker.to_string());
    }

    /// All slots with their workers, in day order then shift order.
    pub fn iter(&self) -> impl Iterator<Item = (Slot, &[String])> + '_ {
        self.slots.iter().map(|a| (a.slot, a.workers.as_slice()))
    }

    /// Slots a worker is assigned to, in week order.
    pub fn slots_for_worker(&self, worker: &str) -> Vec<Slot> {
        self.slots
            .iter()
            .filter(|a| a.workers.iter().any(|w| w == worker))
            .map(|a| a.slot)
            .collect()
    }

    /// Shift a worker holds on `day`, if any.
    pub fn shift_of(&self, worker: &str, day: Day) -> Option<ShiftKind> {
        ShiftKind::ALL
            .into_iter()
            .find(|&shift| self.workers_on(day, shift).iter().any(|w| w == worker))
    }

    /// Total worker-seats in the week.
    pub fn required_seats(&self) -> usize {
        Slot::COUNT.saturating_mul(self.capacity)
    }

    /// Worker-seats currently filled.
    pub fn filled_seats(&self) -> usize {
        self.slots.iter().map(|a| a.workers.len()).sum()
    }

    /// Slots below capacity.
    pub fn understaffed_slots(&self) -> Vec<Slot> {
        self.slots
            .iter()
            .filter(|a| a.workers.len() < self.capacity)
            .map(|a| a.slot)
            .collect()
    }

    /// Whether every slot is at capacity.
    pub fn is_fully_staffed(&self) -> bool {
        self.slots.iter().all(|a| a.workers.len() >= self.capacity)
    }
}

impl Shortfall {
    /// Creates a shortfall record.
    pub fn new(slot: Slot, missing: usize) -> Self {
        Self { slot, missing }
    }

    /// Human-readable description.
    pub fn message(&self) -> String {
        format!(
            "Not enough workers to fill {} shift on {} ({} missing)",
            self.slot.shift, self.slot.day, self.missing
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MON_AM: Slot = Slot {
        day: Day::Monday,
        shift: ShiftKind::Morning,
    };

    #[test]
    fn test_empty_schedule() {
        let s = WeeklySchedule::new(2);
        assert_eq!(s.capacity(), 2);
        assert_eq!(s.required_seats(), 42);
        assert_eq!(s.filled_seats(), 0);
        assert_eq!(s.understaffed_slots().len(), Slot::COUNT);
        assert!(!s.is_fully_staffed());
        assert!(s.iter().all(|(_, workers)| workers.is_empty()));
    }

    #[test]
    fn test_place_and_capacity() {
        let mut s = WeeklySchedule::new(2);
        s.place(MON_AM, "Neal");
        assert!(s.has_room(MON_AM));
        assert_eq!(s.open_seats(MON_AM), 1);
        s.place(MON_AM, "Alex");
        assert!(!s.has_room(MON_AM));
        assert_eq!(s.open_seats(MON_AM), 0);
        assert_eq!(s.workers(MON_AM), ["Neal".to_string(), "Alex".to_string()]);
        assert_eq!(s.filled_seats(), 2);
    }

    #[test]
    fn test_first_open_shift() {
        let mut s = WeeklySchedule::new(1);
        assert_eq!(s.first_open_shift(Day::Monday, None), Some(ShiftKind::Morning));
        assert_eq!(
            s.first_open_shift(Day::Monday, Some(ShiftKind::Morning)),
            Some(ShiftKind::Afternoon)
        );

        s.place(MON_AM, "A");
        s.place(Slot::new(Day::Monday, ShiftKind::Afternoon), "B");
        assert_eq!(s.first_open_shift(Day::Monday, None), Some(ShiftKind::Evening));

        s.place(Slot::new(Day::Monday, ShiftKind::Evening), "C");
        assert_eq!(s.first_open_shift(Day::Monday, None), None);
        assert_eq!(s.first_open_shift(Day::Tuesday, None), Some(ShiftKind::Morning));
    }

    #[test]
    fn test_worker_lookup() {
        let mut s = WeeklySchedule::new(2);
        s.place(MON_AM, "Neal");
        s.place(Slot::new(Day::Wednesday, ShiftKind::Evening), "Neal");
        s.place(Slot::new(Day::Wednesday, ShiftKind::Evening), "Moz");

        assert_eq!(
            s.slots_for_worker("Neal"),
            vec![MON_AM, Slot::new(Day::Wednesday, ShiftKind::Evening)]
        );
        assert_eq!(s.shift_of("Neal", Day::Monday), Some(ShiftKind::Morning));
        assert_eq!(s.shift_of("Neal", Day::Tuesday), None);
        assert_eq!(s.shift_of("Moz", Day::Wednesday), Some(ShiftKind::Evening));
    }

    #[test]
    fn test_fully_staffed() {
        let mut s = WeeklySchedule::new(1);
        for (i, slot) in Slot::all().enumerate() {
            s.place(slot, &format!("W{i}"));
        }
        assert!(s.is_fully_staffed());
        assert!(s.understaffed_slots().is_empty());
    }

    #[test]
    fn test_huge_capacity_does_not_allocate_up_front() {
        let mut s = WeeklySchedule::new(usize::MAX);
        assert_eq!(s.required_seats(), usize::MAX);
        s.place(MON_AM, "Neal");
        assert_eq!(s.open_seats(MON_AM), usize::MAX - 1);
        assert!(!s.is_fully_staffed());
    }

    #[test]
    fn test_shortfall_message() {
        let f = Shortfall::new(Slot::new(Day::Sunday, ShiftKind::Evening), 2);
        assert_eq!(
            f.message(),
            "Not enough workers to fill evening shift on Sunday (2 missing)"
        );
    }
}
