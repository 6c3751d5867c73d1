//! Roster input format.
//!
//! A roster file is JSON:
//!
//! ```json
//! {
//!   "config": { "max_workdays": 5, "slot_capacity": 2, "seed": 42 },
//!   "workers": [
//!     { "name": "Neal", "preferences": { "Monday": "morning", "Tuesday": "afternoon" } }
//!   ]
//! }
//! ```
//!
//! `config` is optional. Preference order matters to the engine, so the
//! `preferences` object is read in document order rather than into a
//! sorted map. Labels stay as text until [`RosterFile::into_engine`]
//! validates them.

use std::fmt;
use std::fs;
use std::path::Path;

use rand::Rng;
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing::debug;

use crate::engine::{AssignmentEngine, EngineConfig};
use crate::error::{Result, RosterError};
use crate::validation::{validate_roster, validate_roster_file};

/// A complete roster: engine settings plus workers in registration order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RosterFile {
    #[serde(default)]
    pub config: EngineConfig,
    pub workers: Vec<WorkerEntry>,
}

/// One worker as written in a roster file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkerEntry {
    pub name: String,
    #[serde(default)]
    pub preferences: LabeledPreferences,
}

/// Day → shift labels in the order they were written.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabeledPreferences(Vec<(String, String)>);

impl LabeledPreferences {
    /// Creates an empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a label pair.
    pub fn push(&mut self, day: impl Into<String>, shift: impl Into<String>) {
        self.0.push((day.into(), shift.into()));
    }

    /// Label pairs in document order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.0.iter().map(|(d, s)| (d.as_str(), s.as_str()))
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether there are no entries.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<D: Into<String>, S: Into<String>> FromIterator<(D, S)> for LabeledPreferences {
    fn from_iter<I: IntoIterator<Item = (D, S)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(d, s)| (d.into(), s.into())).collect())
    }
}

impl Serialize for LabeledPreferences {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (day, shift) in &self.0 {
            map.serialize_entry(day, shift)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for LabeledPreferences {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        struct OrderedVisitor;

        impl<'de> Visitor<'de> for OrderedVisitor {
            type Value = LabeledPreferences;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of weekday names to shift names")
            }

            fn visit_map<A>(self, mut access: A) -> std::result::Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((day, shift)) = access.next_entry::<String, String>()? {
                    entries.push((day, shift));
                }
                Ok(LabeledPreferences(entries))
            }
        }

        deserializer.deserialize_map(OrderedVisitor)
    }
}

impl WorkerEntry {
    /// Creates an entry with no preferences.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            preferences: LabeledPreferences::new(),
        }
    }

    /// Adds a preference by label.
    pub fn with_preference(mut self, day: impl Into<String>, shift: impl Into<String>) -> Self {
        self.preferences.push(day, shift);
        self
    }
}

impl RosterFile {
    /// Creates a roster with default engine settings.
    pub fn new(workers: Vec<WorkerEntry>) -> Self {
        Self {
            config: EngineConfig::default(),
            workers,
        }
    }

    /// Replaces the engine settings.
    pub fn with_config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    /// Parses a roster from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a roster file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "Loading roster");
        let text = fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Validates the roster and builds an engine seeded from its config.
    ///
    /// # Errors
    /// [`RosterError::Validation`] listing every problem found, including
    /// engine limits out of range.
    pub fn into_engine(self) -> Result<AssignmentEngine> {
        validate_roster_file(&self).map_err(RosterError::Validation)?;
        let mut engine = AssignmentEngine::new(self.config.clone());
        self.register_workers(&mut engine)?;
        Ok(engine)
    }

    /// Validates the roster and registers every worker on `engine`, in order.
    ///
    /// The roster's own `config` is not applied; `engine` keeps its
    /// configuration. Either every worker is registered or none is.
    ///
    /// # Errors
    /// - [`RosterError::Validation`] if the workers fail validation.
    /// - [`RosterError::DuplicateWorker`] if a name is already on `engine`.
    pub fn register_into<R: Rng>(&self, engine: &mut AssignmentEngine<R>) -> Result<()> {
        validate_roster(&self.workers).map_err(RosterError::Validation)?;
        if let Some(taken) = self.workers.iter().find(|w| engine.contains_worker(&w.name)) {
            return Err(RosterError::DuplicateWorker(taken.name.clone()));
        }
        self.register_workers(engine)
    }

    /// Registers workers that already passed validation.
    fn register_workers<R: Rng>(&self, engine: &mut AssignmentEngine<R>) -> Result<()> {
        for worker in &self.workers {
            engine.register_labeled(worker.name.clone(), worker.preferences.iter())?;
        }
        Ok(())
    }
}

/// The five-worker demo roster.
///
/// Every worker states a preference for all seven days, which is more
/// than the weekly cap allows, and the week needs 42 worker-shifts
/// against 25 available workdays, so the repair pass always reports
/// shortfalls.
pub fn demo() -> RosterFile {
    let entry = |name: &str, prefs: [(&str, &str); 7]| WorkerEntry {
        name: name.to_string(),
        preferences: prefs.into_iter().collect(),
    };

    RosterFile::new(vec![
        entry(
            "Neal",
            [
                ("Monday", "morning"),
                ("Tuesday", "afternoon"),
                ("Wednesday", "morning"),
                ("Thursday", "afternoon"),
                ("Friday", "morning"),
                ("Saturday", "evening"),
                ("Sunday", "evening"),
            ],
        ),
        entry(
            "Caffrey",
            [
                ("Monday", "afternoon"),
                ("Tuesday", "morning"),
                ("Wednesday", "afternoon"),
                ("Thursday", "morning"),
                ("Friday", "afternoon"),
                ("Saturday", "morning"),
                ("Sunday", "morning"),
            ],
        ),
        entry(
            "Moz",
            [
                ("Monday", "evening"),
                ("Tuesday", "evening"),
                ("Wednesday", "evening"),
                ("Thursday", "evening"),
                ("Friday", "evening"),
                ("Saturday", "afternoon"),
                ("Sunday", "afternoon"),
            ],
        ),
        entry(
            "Alex",
            [
                ("Monday", "morning"),
                ("Tuesday", "morning"),
                ("Wednesday", "afternoon"),
                ("Thursday", "afternoon"),
                ("Friday", "evening"),
                ("Saturday", "evening"),
                ("Sunday", "morning"),
            ],
        ),
        entry(
            "Elizabeth",
            [
                ("Monday", "evening"),
                ("Tuesday", "evening"),
                ("Wednesday", "morning"),
                ("Thursday", "morning"),
                ("Friday", "afternoon"),
                ("Saturday", "afternoon"),
                ("Sunday", "evening"),
            ],
        ),
    ])
}
