//! Engine configuration.

use serde::{Deserialize, Serialize};

/// Default weekly cap on days worked per worker.
pub const DEFAULT_MAX_WORKDAYS: usize = 5;

/// Default number of workers per slot.
pub const DEFAULT_SLOT_CAPACITY: usize = 2;

/// Largest per-slot capacity a roster may ask for.
pub const MAX_SLOT_CAPACITY: usize = 1024;

/// Tunable limits for the assignment engine.
///
/// # Example
///
/// ```
/// use shift_roster::engine::EngineConfig;
///
/// let config = EngineConfig::default().with_seed(7);
/// assert_eq!(config.max_workdays, 5);
/// assert_eq!(config.slot_capacity, 2);
/// assert_eq!(config.seed, Some(7));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Maximum distinct days a worker may be assigned per week.
    pub max_workdays: usize,
    /// Workers required per slot.
    pub slot_capacity: usize,
    /// Seed for the repair pass RNG. `None` draws from OS entropy.
    pub seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_workdays: DEFAULT_MAX_WORKDAYS,
            slot_capacity: DEFAULT_SLOT_CAPACITY,
            seed: None,
        }
    }
}

impl EngineConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the per-worker weekly cap.
    pub fn with_max_workdays(mut self, max_workdays: usize) -> Self {
        self.max_workdays = max_workdays;
        self
    }

    /// Sets the per-slot capacity.
    pub fn with_slot_capacity(mut self, slot_capacity: usize) -> Self {
        self.slot_capacity = slot_capacity;
        self
    }

    /// Fixes the repair pass seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
