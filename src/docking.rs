use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result of a dock request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DockOutcome {
    /// The module was attached.
    Docked,
    /// The module was already attached; nothing changed.
    AlreadyDocked,
    /// Every slot is taken; nothing changed.
    BayFull,
}

/// Why a serialized bay was refused.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum DockingBayError {
    /// More modules than the bay has slots.
    #[error("bay holds {len} modules but has capacity {capacity}")]
    OverCapacity { len: usize, capacity: usize },
    /// The same module name appears more than once.
    #[error("module `{0}` is docked more than once")]
    Duplicate(String),
}

/// Wire form of a [`DockingBay`]; checked before it becomes one.
#[derive(Deserialize)]
struct BaySnapshot {
    modules: Vec<String>,
    capacity: usize,
}

impl TryFrom<BaySnapshot> for DockingBay {
    type Error = DockingBayError;

    fn try_from(snapshot: BaySnapshot) -> Result<Self, Self::Error> {
        let BaySnapshot { modules, capacity } = snapshot;
        if modules.len() > capacity {
            return Err(DockingBayError::OverCapacity {
                len: modules.len(),
                capacity,
            });
        }
        for (i, name) in modules.iter().enumerate() {
            if modules[i + 1..].contains(name) {
                return Err(DockingBayError::Duplicate(name.clone()));
            }
        }
        Ok(Self { modules, capacity })
    }
}

/// The set of modules attached to a station.
///
/// Keeps insertion order, holds no duplicates and never grows past `capacity`.
/// Capacity is small, so membership is a linear scan. Deserializing rejects any
/// snapshot that breaks either rule.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BaySnapshot")]
pub struct DockingBay {
    modules: Vec<String>,
    capacity: usize,
}

impl DockingBay {
    /// Creates an empty bay with `capacity` slots.
    pub fn new(capacity: usize) -> Self {
        Self {
            modules: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Number of slots.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Docked module names, oldest first.
    pub fn modules(&self) -> &[String] {
        &self.modules
    }

    /// Number of docked modules.
    pub fn len(&self) -> usize {
        self.modules.len()
    }

    /// Returns `true` if nothing is docked.
    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    /// Returns `true` if every slot is taken.
    pub fn is_full(&self) -> bool {
        self.modules.len() >= self.capacity
    }

    /// Returns `true` if `name` is docked.
    pub fn contains(&self, name: &str) -> bool {
        self.modules.iter().any(|m| m == name)
    }

    /// Docks `name` if a slot is free and it is not already docked.
    pub fn dock(&mut self, name: &str) -> DockOutcome {
        // A full bay rejects even names it already holds.
        if self.is_full() {
            DockOutcome::BayFull
        } else if self.contains(name) {
            DockOutcome::AlreadyDocked
        } else {
            self.modules.push(name.to_owned());
            DockOutcome::Docked
        }
    }

    /// Removes `name`, preserving the order of the rest. Returns whether it was present.
    pub fn undock(&mut self, name: &str) -> bool {
        match self.modules.iter().position(|m| m == name) {
            Some(idx) => {
                self.modules.remove(idx);
                true
            }
            None => false,
        }
    }
}
