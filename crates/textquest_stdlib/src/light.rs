//! Darkness and light.

use textquest_engine::{Hooks, Plugin};
use textquest_parser::{Action, Command};
use textquest_world::{State, World};
use tracing::debug;

/// Variable set once the light has been lit.
pub const TORCH_LIT: &str = "torch_lit";

/// Reply to `look` in the dark room.
pub const TOO_DARK: &str = "It's too dark to see. Perhaps a torch would help!";

/// Reply to using the light item.
pub const LIT: &str = "You light the torch! A warm glow fills the room.";

/// Keeps one room dark until a light item is used.
///
/// Looking around the dark room is vetoed until `torch_lit` is set.
/// Using the light item sets it and places the revealed item in the dark
/// room if it is not there already. The light does not need to be held.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LightPlugin {
    dark_room: String,
    light_item: String,
    revealed_item: String,
}

impl Default for LightPlugin {
    fn default() -> Self {
        Self::new("cave", "torch", "gem")
    }
}

impl LightPlugin {
    /// Creates the plugin for a room, the item that lights it, and the
    /// item the light reveals.
    #[must_use]
    pub fn new(
        dark_room: impl Into<String>,
        light_item: impl Into<String>,
        revealed_item: impl Into<String>,
    ) -> Self {
        Self {
            dark_room: dark_room.into(),
            light_item: light_item.into(),
            revealed_item: revealed_item.into(),
        }
    }
}

impl Plugin for LightPlugin {
    fn name(&self) -> &str {
        "light"
    }

    fn hooks(&self) -> Hooks {
        Hooks::none()
            .with_pre_action()
            .with_command(Command::Use.as_str())
    }

    fn on_pre_action(&self, action: &Action, state: &mut State, _world: &mut World) -> Option<String> {
        let dark = action.is(Command::Look)
            && state.current_room == self.dark_room
            && !state.flag(TORCH_LIT);
        dark.then(|| TOO_DARK.to_string())
    }

    fn on_command(
        &self,
        _command: &str,
        action: &Action,
        state: &mut State,
        world: &mut World,
    ) -> Option<String> {
        if action.target() != Some(self.light_item.as_str()) {
            return None;
        }

        state.set_variable(TORCH_LIT, true);
        if let Some(room) = world.room_mut(&self.dark_room) {
            if !room.contains(&self.revealed_item) {
                room.items.push(self.revealed_item.clone());
                debug!(room = %self.dark_room, item = %self.revealed_item, "light revealed item");
            }
        }
        Some(LIT.to_string())
    }
}
