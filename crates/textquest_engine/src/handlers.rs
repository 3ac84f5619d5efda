//! Built-in command handlers.
//!
//! Each handler returns the text shown to the player. Failed commands
//! leave state and world untouched.

use textquest_parser::{Command, Vocabulary};
use textquest_world::{State, World};

/// Empty inventory listing.
pub const INVENTORY_EMPTY: &str = "Your inventory is empty.";
/// Move with a missing or unknown direction.
pub const CANNOT_GO: &str = "You can't go there.";
/// Mission listing with nothing tracked.
pub const NO_MISSIONS: &str = "There are no active missions.";
/// Reply to `exit`.
pub const FAREWELL: &str = "Thanks for playing. Goodbye!";
/// Shown when the current room is not part of the world.
pub const NOWHERE: &str = "You are in a place that does not exist.";

/// Slot used by save/load when none is given.
pub const DEFAULT_SLOT: &str = "default";

/// Runs the built-in handler for a canonical command.
pub fn handle(
    command: Command,
    vocabulary: &Vocabulary,
    target: Option<&str>,
    state: &mut State,
    world: &mut World,
) -> String {
    match command {
        Command::Help => help(vocabulary),
        Command::Look => look(target, state, world),
        Command::Inventory => inventory(state, world),
        Command::Move => go(target, state, world),
        Command::Take => take(target, state, world),
        Command::Drop => drop_item(target, state, world),
        Command::Use => use_item(target, state),
        Command::Save => format!("Saved to slot '{}'.", target.unwrap_or(DEFAULT_SLOT)),
        Command::Load => format!("Loaded from slot '{}'.", target.unwrap_or(DEFAULT_SLOT)),
        Command::Missions => missions(state, world),
        Command::Stats => stats(state),
        Command::Exit => FAREWELL.to_string(),
    }
}

/// Reply for a command nobody handles.
#[must_use]
pub fn unrecognized(command: &str) -> String {
    format!("Unrecognized command: '{command}'. Type 'help' for assistance.")
}

/// Lists every canonical command with its synonyms.
#[must_use]
pub fn help(vocabulary: &Vocabulary) -> String {
    let mut lines = vec!["Available commands:".to_string()];
    lines.extend(
        vocabulary
            .verbs()
            .map(|verb| format!("- {}: {}", verb.command, verb.synonyms.join(", "))),
    );
    lines.join("\n")
}

/// Describes the current room, or a held or visible item.
#[must_use]
pub fn look(target: Option<&str>, state: &State, world: &World) -> String {
    let Some(room) = world.room(&state.current_room) else {
        return NOWHERE.to_string();
    };
    let Some(target) = target else {
        return room.describe(world);
    };
    if state.holds(target) || room.contains(target) {
        if let Some(item) = world.item(target) {
            return item.description.clone();
        }
    }
    not_here(target)
}

/// Lists held items.
#[must_use]
pub fn inventory(state: &State, world: &World) -> String {
    if state.inventory.is_empty() {
        return INVENTORY_EMPTY.to_string();
    }
    let mut lines = vec!["Inventory:".to_string()];
    lines.extend(state.inventory.iter().map(|id| match world.item(id) {
        Some(item) => format!("- {}: {}", item.display_name(), item.description),
        None => format!("- {id}"),
    }));
    lines.join("\n")
}

/// Follows an exit of the current room.
pub fn go(direction: Option<&str>, state: &mut State, world: &World) -> String {
    let destination = direction
        .zip(world.room(&state.current_room))
        .and_then(|(direction, room)| room.connections.get(direction));
    let Some(destination) = destination else {
        return CANNOT_GO.to_string();
    };

    let name = world
        .room(destination)
        .map_or(destination.as_str(), |room| room.name.as_str())
        .to_string();
    state.current_room.clone_from(destination);
    format!("You arrive in {name}.")
}

/// Moves an item from the current room to the inventory.
pub fn take(target: Option<&str>, state: &mut State, world: &mut World) -> String {
    let Some(target) = target else {
        return "You must specify an item to take.".to_string();
    };
    let taken = world
        .room_mut(&state.current_room)
        .is_some_and(|room| room.remove_item(target));
    if !taken {
        return not_here(target);
    }
    state.inventory.push(target.to_string());
    format!("You picked up {target}.")
}

/// Moves an item from the inventory to the current room.
pub fn drop_item(target: Option<&str>, state: &mut State, world: &mut World) -> String {
    let Some(target) = target else {
        return "You must specify an item to drop.".to_string();
    };
    if !state.holds(target) {
        return not_held(target);
    }
    let Some(room) = world.room_mut(&state.current_room) else {
        return NOWHERE.to_string();
    };
    room.items.push(target.to_string());
    state.release(target);
    format!("You dropped {target}.")
}

/// Generic use of a held item. The indirect object is not interpreted.
#[must_use]
pub fn use_item(target: Option<&str>, state: &State) -> String {
    match target {
        None => "You must specify an item to use.".to_string(),
        Some(target) if !state.holds(target) => not_held(target),
        Some(target) => format!("You used {target}."),
    }
}

/// Lists tracked missions and their status.
#[must_use]
pub fn missions(state: &State, world: &World) -> String {
    if state.missions.is_empty() {
        return NO_MISSIONS.to_string();
    }
    let mut lines = vec!["Missions:".to_string()];
    lines.extend(state.missions.iter().map(|(id, status)| {
        let title = world.missions.get(id).map_or(id.as_str(), |m| m.title.as_str());
        format!("- {title}: {status}")
    }));
    lines.join("\n")
}

/// Play time as hours and minutes.
#[must_use]
pub fn stats(state: &State) -> String {
    format!("Play time: {}h {}m", state.time / 60, state.time % 60)
}

fn not_here(target: &str) -> String {
    format!("You don't see '{target}' here.")
}

fn not_held(target: &str) -> String {
    format!("You don't have '{target}' in your inventory.")
}
