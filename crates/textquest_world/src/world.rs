//! The world read model.
//!
//! A `World` is built once by the loader. Afterwards it is shared between the
//! dispatcher and plugins one turn at a time; plugins may spawn or remove
//! items in rooms, everything else stays as authored.

use std::collections::BTreeMap;

use serde::Deserialize;
use textquest_foundation::{Error, Result};
use tracing::warn;

use crate::model::{Item, Mission, Npc, Room, null_as_default};

/// Start-up settings from the `config:` section of a world file.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct WorldConfig {
    /// Room the player starts in
    #[serde(default)]
    pub start_room: String,
    /// Elapsed minutes at session start
    #[serde(default)]
    pub start_time: u32,
    /// Missions tracked from the first turn
    #[serde(default, deserialize_with = "null_as_default")]
    pub initial_missions: Vec<String>,
    /// Text printed before the first prompt
    #[serde(default)]
    pub intro_text: String,
    /// Plugin names to bind, in priority order
    #[serde(default, deserialize_with = "null_as_default")]
    pub plugins: Vec<String>,
}

/// Authored content plus start-up settings.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct World {
    /// Rooms by id
    pub rooms: BTreeMap<String, Room>,
    /// Items by id
    pub items: BTreeMap<String, Item>,
    /// NPCs by id
    pub npcs: BTreeMap<String, Npc>,
    /// Missions by id
    pub missions: BTreeMap<String, Mission>,
    /// Room the player starts in
    pub start_room_id: String,
    /// Elapsed minutes at session start
    pub start_time: u32,
    /// Missions tracked from the first turn
    pub initial_missions: Vec<String>,
    /// Text printed before the first prompt
    pub intro_text: String,
    /// Plugin names requested by the world file
    pub plugins: Vec<String>,
}

impl World {
    /// Creates an empty world from start-up settings.
    #[must_use]
    pub fn new(config: WorldConfig) -> Self {
        Self {
            start_room_id: config.start_room,
            start_time: config.start_time,
            initial_missions: config.initial_missions,
            intro_text: config.intro_text,
            plugins: config.plugins,
            ..Self::default()
        }
    }

    /// Adds a room, keyed by its id.
    #[must_use]
    pub fn with_room(mut self, room: Room) -> Self {
        if self.start_room_id.is_empty() {
            self.start_room_id.clone_from(&room.id);
        }
        self.rooms.insert(room.id.clone(), room);
        self
    }

    /// Adds an item, keyed by its id.
    #[must_use]
    pub fn with_item(mut self, item: Item) -> Self {
        self.items.insert(item.id.clone(), item);
        self
    }

    /// Adds an NPC, keyed by its id.
    #[must_use]
    pub fn with_npc(mut self, npc: Npc) -> Self {
        self.npcs.insert(npc.id.clone(), npc);
        self
    }

    /// Adds a mission, keyed by its id.
    #[must_use]
    pub fn with_mission(mut self, mission: Mission) -> Self {
        self.missions.insert(mission.id.clone(), mission);
        self
    }

    /// Marks a mission as tracked from the start.
    #[must_use]
    pub fn with_initial_mission(mut self, mission: impl Into<String>) -> Self {
        self.initial_missions.push(mission.into());
        self
    }

    /// Sets the start room.
    #[must_use]
    pub fn starting_in(mut self, room: impl Into<String>) -> Self {
        self.start_room_id = room.into();
        self
    }

    /// Looks up a room.
    #[must_use]
    pub fn room(&self, id: &str) -> Option<&Room> {
        self.rooms.get(id)
    }

    /// Looks up a room for mutation.
    pub fn room_mut(&mut self, id: &str) -> Option<&mut Room> {
        self.rooms.get_mut(id)
    }

    /// Looks up an item.
    #[must_use]
    pub fn item(&self, id: &str) -> Option<&Item> {
        self.items.get(id)
    }

    /// Checks the referential invariants of the world.
    ///
    /// - the start room exists
    /// - every connection leads to an existing room
    /// - every item lying in a room exists
    ///
    /// Initial missions that do not exist are reported with a warning and
    /// skipped when the session starts.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::InvalidWorld`](textquest_foundation::ErrorKind::InvalidWorld)
    /// naming the first dangling reference found.
    pub fn validate(&self) -> Result<()> {
        if !self.rooms.contains_key(&self.start_room_id) {
            return Err(Error::invalid_world(format!(
                "start room '{}' does not exist",
                self.start_room_id
            )));
        }

        for room in self.rooms.values() {
            for (direction, target) in &room.connections {
                if !self.rooms.contains_key(target) {
                    return Err(Error::invalid_world(format!(
                        "room '{}' exit '{direction}' leads to unknown room '{target}'",
                        room.id
                    )));
                }
            }
            for item in &room.items {
                if !self.items.contains_key(item) {
                    return Err(Error::invalid_world(format!(
                        "room '{}' contains unknown item '{item}'",
                        room.id
                    )));
                }
            }
        }

        for mission in &self.initial_missions {
            if !self.missions.contains_key(mission) {
                warn!(mission = %mission, "initial mission is not defined and will be skipped");
            }
        }

        Ok(())
    }
}
