//! Loading worlds from disk.
//!
//! A world is a YAML file (conventionally `config/world.yaml`) with
//! `config`, `rooms`, `items`, `npcs`, and `missions` sections. Items may
//! also live in an `items.json` catalog next to the world file; catalog
//! entries override inline items with the same id.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use textquest_foundation::{Error, ErrorKind, Result};
use tracing::{debug, info};

use crate::model::{Item, Mission, Npc, Room, null_as_default};
use crate::world::{World, WorldConfig};

/// Name of the optional item catalog beside the world file.
pub const ITEMS_FILE: &str = "items.json";

/// On-disk shape of a world file.
#[derive(Debug, Default, Deserialize)]
struct WorldFile {
    #[serde(default, deserialize_with = "null_as_default")]
    config: WorldConfig,
    #[serde(default, deserialize_with = "null_as_default")]
    rooms: BTreeMap<String, Room>,
    #[serde(default, deserialize_with = "null_as_default")]
    items: BTreeMap<String, Item>,
    #[serde(default, deserialize_with = "null_as_default")]
    npcs: BTreeMap<String, Npc>,
    #[serde(default, deserialize_with = "null_as_default")]
    missions: BTreeMap<String, Mission>,
}

/// Loads and validates a world file and its item catalog.
///
/// # Errors
///
/// Returns an error if a file cannot be read or parsed, or if the world
/// breaks a referential invariant (see [`World::validate`]).
pub fn load_world(path: impl AsRef<Path>) -> Result<World> {
    let path = path.as_ref();
    let source = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;

    let mut world = parse_world(&source).map_err(|e| {
        Error::new(ErrorKind::Yaml {
            path: path.to_path_buf(),
            source: e,
        })
    })?;

    let catalog = path.parent().map(|dir| dir.join(ITEMS_FILE));
    if let Some(catalog) = catalog.filter(|p| p.is_file()) {
        let items = load_items(&catalog)?;
        debug!(path = %catalog.display(), count = items.len(), "loaded item catalog");
        world.items.extend(items);
    }

    world
        .validate()
        .map_err(|e| e.with_context(path.display().to_string()))?;

    info!(
        path = %path.display(),
        rooms = world.rooms.len(),
        items = world.items.len(),
        npcs = world.npcs.len(),
        missions = world.missions.len(),
        "loaded world"
    );
    Ok(world)
}

/// Parses world YAML without touching the filesystem or validating.
///
/// # Errors
///
/// Returns the YAML error if the source does not match the world schema.
pub fn parse_world(source: &str) -> std::result::Result<World, serde_yaml::Error> {
    let file: WorldFile = if source.trim().is_empty() {
        WorldFile::default()
    } else {
        serde_yaml::from_str(source)?
    };

    let mut world = World::new(file.config);
    world.rooms = keyed(file.rooms, |id, room: &mut Room| {
        room.id = id.to_string();
        if room.name.is_empty() {
            room.name = id.to_string();
        }
    });
    world.items = keyed(file.items, assign_item_id);
    world.npcs = keyed(file.npcs, |id, npc: &mut Npc| {
        npc.id = id.to_string();
        if npc.name.is_empty() {
            npc.name = id.to_string();
        }
    });
    world.missions = keyed(file.missions, |id, mission: &mut Mission| {
        mission.id = id.to_string();
        if mission.title.is_empty() {
            mission.title = id.to_string();
        }
    });
    Ok(world)
}

fn load_items(path: &Path) -> Result<BTreeMap<String, Item>> {
    let source = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    let items: Option<BTreeMap<String, Item>> =
        serde_json::from_str(&source).map_err(|e| {
            Error::new(ErrorKind::Json {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
    Ok(keyed(items.unwrap_or_default(), assign_item_id))
}

fn assign_item_id(id: &str, item: &mut Item) {
    item.id = id.to_string();
}

fn keyed<T>(
    mut entries: BTreeMap<String, T>,
    mut assign: impl FnMut(&str, &mut T),
) -> BTreeMap<String, T> {
    for (id, entry) in &mut entries {
        assign(id, entry);
    }
    entries
}
