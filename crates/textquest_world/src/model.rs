//! Authored content: rooms, items, NPCs, and missions.
//!
//! Ids are not stored in the files themselves; each entry is keyed by its id
//! and the loader copies the key into the `id` field.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer};

use crate::world::World;

/// Deserializes an explicit `null` as the type's default.
///
/// World files written by hand often leave a section empty (`npcs:`),
/// which YAML reads as null rather than an empty map.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// A location the player can stand in.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct Room {
    /// Room id (the key under `rooms:`)
    #[serde(skip)]
    pub id: String,
    /// Display name; defaults to the id
    #[serde(default)]
    pub name: String,
    /// Prose shown on `look`
    #[serde(default, alias = "desc")]
    pub description: String,
    /// Direction token -> destination room id
    #[serde(default, deserialize_with = "null_as_default")]
    pub connections: BTreeMap<String, String>,
    /// Items lying here, in drop order
    #[serde(default, deserialize_with = "null_as_default")]
    pub items: Vec<String>,
}

impl Room {
    /// Creates an empty room.
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            connections: BTreeMap::new(),
            items: Vec::new(),
        }
    }

    /// Adds an exit.
    #[must_use]
    pub fn with_connection(mut self, direction: impl Into<String>, room: impl Into<String>) -> Self {
        self.connections.insert(direction.into(), room.into());
        self
    }

    /// Places an item in the room.
    #[must_use]
    pub fn with_item(mut self, item: impl Into<String>) -> Self {
        self.items.push(item.into());
        self
    }

    /// Returns true if the item is lying in this room.
    #[must_use]
    pub fn contains(&self, item: &str) -> bool {
        self.items.iter().any(|i| i == item)
    }

    /// Removes an item from the room, returning whether it was present.
    pub fn remove_item(&mut self, item: &str) -> bool {
        match self.items.iter().position(|i| i == item) {
            Some(index) => {
                self.items.remove(index);
                true
            }
            None => false,
        }
    }

    /// Describes the room: name, description, visible items, and exits.
    ///
    /// Items unknown to the world are not listed. Plugins change what this
    /// shows by editing `items` rather than by hooking the description.
    #[must_use]
    pub fn describe(&self, world: &World) -> String {
        let mut lines = vec![format!("== {} ==", self.name), self.description.trim().to_string()];

        let visible: Vec<&str> = self
            .items
            .iter()
            .filter_map(|id| world.items.get(id))
            .map(Item::display_name)
            .collect();
        if !visible.is_empty() {
            lines.push(format!("\nVisible items: {}", visible.join(", ")));
        }

        if !self.connections.is_empty() {
            let exits: Vec<&str> = self.connections.keys().map(String::as_str).collect();
            lines.push(format!("Exits: {}", exits.join(", ")));
        }

        lines.join("\n")
    }
}

/// Something that can be picked up and used.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct Item {
    /// Item id
    #[serde(skip)]
    pub id: String,
    /// Names the item answers to; the first is its display name
    #[serde(default, deserialize_with = "null_as_default")]
    pub names: Vec<String>,
    /// Prose shown on `look <item>` and in the inventory
    #[serde(default, alias = "desc")]
    pub description: String,
    /// Weight (informational)
    #[serde(default)]
    pub weight: f64,
    /// Ids of things this item can be used on
    #[serde(default, deserialize_with = "null_as_default")]
    pub usable_on: Vec<String>,
}

impl Item {
    /// Creates an item whose only name is its id.
    #[must_use]
    pub fn new(id: impl Into<String>, description: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            names: vec![id.clone()],
            id,
            description: description.into(),
            weight: 0.0,
            usable_on: Vec::new(),
        }
    }

    /// Replaces the item's names.
    #[must_use]
    pub fn with_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.names = names.into_iter().map(Into::into).collect();
        self
    }

    /// The canonical display name, falling back to the id.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.names.first().map_or(self.id.as_str(), String::as_str)
    }
}

/// A non-player character.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct Npc {
    /// NPC id
    #[serde(skip)]
    pub id: String,
    /// Display name; defaults to the id
    #[serde(default)]
    pub name: String,
    /// Room id the NPC stands in
    #[serde(default)]
    pub location: String,
    /// Dialogue nodes in conversation order
    #[serde(default, deserialize_with = "null_as_default")]
    pub dialogues: Vec<DialogueNode>,
}

/// One line of NPC dialogue with the replies offered after it.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct DialogueNode {
    /// What the NPC says
    #[serde(default)]
    pub text: String,
    /// Replies the player may choose
    #[serde(default, deserialize_with = "null_as_default")]
    pub options: Vec<DialogueOption>,
}

/// A reply the player may choose.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct DialogueOption {
    /// Reply text
    #[serde(default)]
    pub reply: String,
    /// Index of the node this reply leads to
    #[serde(default)]
    pub next: Option<usize>,
}

/// A goal tracked in the session state.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct Mission {
    /// Mission id
    #[serde(skip)]
    pub id: String,
    /// Display title; defaults to the id
    #[serde(default)]
    pub title: String,
    /// Prose description
    #[serde(default)]
    pub description: String,
    /// Requirement kind -> ids. Only `have_item` is interpreted.
    #[serde(default, deserialize_with = "null_as_default")]
    pub requirements: BTreeMap<String, Vec<String>>,
    /// Free-form steps (informational)
    #[serde(default, deserialize_with = "null_as_default")]
    pub steps: Vec<String>,
    /// What completing the mission yields
    #[serde(default, deserialize_with = "null_as_default")]
    pub rewards: Rewards,
}

impl Mission {
    /// Requirement key for items that must be held at once.
    pub const HAVE_ITEM: &'static str = "have_item";

    /// Creates a mission with no requirements.
    #[must_use]
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            ..Self::default()
        }
    }

    /// Requires the player to hold all of the given items.
    #[must_use]
    pub fn requiring_items<I, S>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.requirements
            .insert(Self::HAVE_ITEM.to_string(), items.into_iter().map(Into::into).collect());
        self
    }

    /// Sets the reward message.
    #[must_use]
    pub fn with_reward_message(mut self, message: impl Into<String>) -> Self {
        self.rewards.message = Some(message.into());
        self
    }

    /// Items that must be held simultaneously. Empty when unspecified.
    #[must_use]
    pub fn required_items(&self) -> &[String] {
        self.requirements
            .get(Self::HAVE_ITEM)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// The message printed on completion.
    #[must_use]
    pub fn completion_message(&self) -> String {
        self.rewards
            .message
            .clone()
            .unwrap_or_else(|| format!("Mission '{}' completed!", self.title))
    }
}

/// Mission rewards.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct Rewards {
    /// Message printed when the mission completes
    #[serde(default)]
    pub message: Option<String>,
}
