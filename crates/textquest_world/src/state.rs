//! Mutable per-session state.

use std::collections::{BTreeMap, HashMap};
use std::fmt;

use serde_json::Value;
use tracing::warn;

use crate::world::World;

/// Progress of a tracked mission.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MissionStatus {
    /// Requirements not yet met
    InProgress,
    /// Requirements met; reward shown
    Completed,
}

impl MissionStatus {
    /// The status label shown to the player.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InProgress => "in-progress",
            Self::Completed => "completed",
        }
    }
}

impl fmt::Display for MissionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Session state, mutated by built-in handlers and plugins.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct State {
    /// Room the player stands in
    pub current_room: String,
    /// Held items in pickup order
    pub inventory: Vec<String>,
    /// Tracked missions
    pub missions: BTreeMap<String, MissionStatus>,
    /// Elapsed play time in minutes
    pub time: u32,
    /// Plugin scratch space
    pub variables: HashMap<String, Value>,
}

impl State {
    /// Creates the starting state for a world.
    ///
    /// Initial missions that the world does not define are skipped.
    #[must_use]
    pub fn new(world: &World) -> Self {
        let mut missions = BTreeMap::new();
        for id in &world.initial_missions {
            if world.missions.contains_key(id) {
                missions.insert(id.clone(), MissionStatus::InProgress);
            } else {
                warn!(mission = %id, "skipping undefined initial mission");
            }
        }

        Self {
            current_room: world.start_room_id.clone(),
            inventory: Vec::new(),
            missions,
            time: world.start_time,
            variables: HashMap::new(),
        }
    }

    /// Creates an empty state standing in the given room.
    #[must_use]
    pub fn at(room: impl Into<String>) -> Self {
        Self {
            current_room: room.into(),
            ..Self::default()
        }
    }

    /// Returns true if the item is held.
    #[must_use]
    pub fn holds(&self, item: &str) -> bool {
        self.inventory.iter().any(|i| i == item)
    }

    /// Removes a held item, returning whether it was held.
    pub fn release(&mut self, item: &str) -> bool {
        match self.inventory.iter().position(|i| i == item) {
            Some(index) => {
                self.inventory.remove(index);
                true
            }
            None => false,
        }
    }

    /// Gets a plugin variable.
    #[must_use]
    pub fn variable(&self, name: &str) -> Option<&Value> {
        self.variables.get(name)
    }

    /// Sets a plugin variable.
    pub fn set_variable(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.variables.insert(name.into(), value.into());
    }

    /// Reads a boolean plugin variable; absent or non-boolean is `false`.
    #[must_use]
    pub fn flag(&self, name: &str) -> bool {
        self.variables
            .get(name)
            .and_then(Value::as_bool)
            .unwrap_or(false)
    }
}
