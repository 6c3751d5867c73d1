//! Weekly calendar model.
//!
//! The roster covers one fixed week: seven days, each split into three
//! shifts. Both sets are closed enumerations whose declaration order is
//! significant:
//!
//! - [`Day`] order drives the repair pass sweep, and [`Day::next`] wraps
//!   Sunday back to Monday for the next-day fallback.
//! - [`ShiftKind`] order is the fallback search order when a preferred
//!   shift is already full.
//!
//! A [`Slot`] is one (day, shift) cell of the week.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A day of the scheduling week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Day {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

/// One of the three daily shifts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShiftKind {
    Morning,
    Afternoon,
    Evening,
}

/// A (day, shift) cell of the weekly grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Slot {
    pub day: Day,
    pub shift: ShiftKind,
}

/// A day or shift label that does not name a known value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} label '{label}'")]
pub struct ParseLabelError {
    /// What was being parsed ("day" or "shift").
    pub kind: &'static str,
    /// The rejected input.
    pub label: String,
}

impl Day {
    /// Number of days in the week.
    pub const COUNT: usize = 7;

    /// All days, Monday first.
    pub const ALL: [Day; Day::COUNT] = [
        Day::Monday,
        Day::Tuesday,
        Day::Wednesday,
        Day::Thursday,
        Day::Friday,
        Day::Saturday,
        Day::Sunday,
    ];

    /// Position within the week (Monday = 0).
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// The following day. Sunday wraps to Monday.
    #[inline]
    pub fn next(self) -> Day {
        Day::ALL[(self.index() + 1) % Day::COUNT]
    }

    /// Full English name.
    pub fn name(self) -> &'static str {
        match self {
            Day::Monday => "Monday",
            Day::Tuesday => "Tuesday",
            Day::Wednesday => "Wednesday",
            Day::Thursday => "Thursday",
            Day::Friday => "Friday",
            Day::Saturday => "Saturday",
            Day::Sunday => "Sunday",
        }
    }
}

impl ShiftKind {
    /// Number of shifts per day.
    pub const COUNT: usize = 3;

    /// All shifts in fallback search order.
    pub const ALL: [ShiftKind; ShiftKind::COUNT] =
        [ShiftKind::Morning, ShiftKind::Afternoon, ShiftKind::Evening];

    /// Position within the day (Morning = 0).
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Lowercase label, as used in roster input.
    pub fn label(self) -> &'static str {
        match self {
            ShiftKind::Morning => "morning",
            ShiftKind::Afternoon => "afternoon",
            ShiftKind::Evening => "evening",
        }
    }

    /// Capitalized label for reports.
    pub fn title(self) -> &'static str {
        match self {
            ShiftKind::Morning => "Morning",
            ShiftKind::Afternoon => "Afternoon",
            ShiftKind::Evening => "Evening",
        }
    }
}

impl Slot {
    /// Total number of slots in a week.
    pub const COUNT: usize = Day::COUNT * ShiftKind::COUNT;

    /// Creates a slot.
    pub fn new(day: Day, shift: ShiftKind) -> Self {
        Self { day, shift }
    }

    /// Dense index in day-major order.
    #[inline]
    pub fn index(self) -> usize {
        self.day.index() * ShiftKind::COUNT + self.shift.index()
    }

    /// Every slot of the week in day order, then shift order.
    pub fn all() -> impl Iterator<Item = Slot> {
        Day::ALL
            .into_iter()
            .flat_map(|day| ShiftKind::ALL.into_iter().map(move |shift| Slot::new(day, shift)))
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for ShiftKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.day, self.shift)
    }
}

impl FromStr for Day {
    type Err = ParseLabelError;

    /// Parses a full English day name, ignoring case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Day::ALL
            .into_iter()
            .find(|d| d.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ParseLabelError {
                kind: "day",
                label: s.to_string(),
            })
    }
}

impl FromStr for ShiftKind {
    type Err = ParseLabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        ShiftKind::ALL
            .into_iter()
            .find(|k| k.label().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ParseLabelError {
                kind: "shift",
                label: s.to_string(),
            })
    }
}
