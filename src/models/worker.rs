//! Worker model.
//!
//! A worker is identified by name and carries an ordered set of shift
//! preferences, at most one per day. Preferences may be sparse: days a
//! worker says nothing about are simply absent, and the preference pass
//! only visits the days that are present.

use serde::Serialize;

use super::{Day, ShiftKind};

/// A worker on the roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Worker {
    /// Unique worker name.
    pub name: String,
    /// Preferred shift per day, in the order supplied.
    pub preferences: Preferences,
}

/// Ordered day → shift preference mapping.
///
/// Insertion order is preserved because the preference pass is
/// order-sensitive. Entries only enter through [`insert`](Self::insert),
/// so a day never appears twice.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Preferences {
    entries: Vec<(Day, ShiftKind)>,
}

impl Worker {
    /// Creates a worker with no preferences.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            preferences: Preferences::new(),
        }
    }

    /// Adds a preference. A repeated day is ignored; use
    /// [`Preferences::insert`] to detect repeats.
    pub fn with_preference(mut self, day: Day, shift: ShiftKind) -> Self {
        self.preferences.insert(day, shift);
        self
    }

    /// Replaces all preferences.
    pub fn with_preferences(mut self, preferences: Preferences) -> Self {
        self.preferences = preferences;
        self
    }

    /// Preferred shift for a day, if any.
    pub fn preferred_shift(&self, day: Day) -> Option<ShiftKind> {
        self.preferences.get(day)
    }
}

impl Preferences {
    /// Creates an empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a preference for `day`.
    ///
    /// Returns `false` and leaves the mapping unchanged if `day` already
    /// has a preference.
    pub fn insert(&mut self, day: Day, shift: ShiftKind) -> bool {
        if self.contains_day(day) {
            return false;
        }
        self.entries.push((day, shift));
        true
    }

    /// Preferred shift for `day`.
    pub fn get(&self, day: Day) -> Option<ShiftKind> {
        self.entries
            .iter()
            .find(|(d, _)| *d == day)
            .map(|(_, shift)| *shift)
    }

    /// Whether `day` has a preference.
    pub fn contains_day(&self, day: Day) -> bool {
        self.entries.iter().any(|(d, _)| *d == day)
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (Day, ShiftKind)> + '_ {
        self.entries.iter().copied()
    }

    /// The entry at `index` in insertion order.
    pub fn at(&self, index: usize) -> Option<(Day, ShiftKind)> {
        self.entries.get(index).copied()
    }

    /// Number of days with a preference.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no day has a preference.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(Day, ShiftKind)> for Preferences {
    /// Collects preferences, keeping the first entry for a repeated day.
    fn from_iter<I: IntoIterator<Item = (Day, ShiftKind)>>(iter: I) -> Self {
        let mut prefs = Preferences::new();
        for (day, shift) in iter {
            prefs.insert(day, shift);
        }
        prefs
    }
}
