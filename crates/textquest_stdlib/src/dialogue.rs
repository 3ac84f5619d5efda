//! NPC dialogue.
//!
//! `talk <npc>` shows the NPC's next dialogue node and advances a cursor
//! kept in `variables["dialogue_<npc>"]`. `talk <npc> <n>` picks reply `n`
//! of the node last shown and jumps to the node it leads to.

use serde_json::Value;
use textquest_engine::{Plugin, PluginLink, command_event};
use textquest_foundation::Result;
use textquest_parser::Action;
use textquest_world::{DialogueNode, Npc, State, World};
use tracing::debug;

/// Commands the plugin answers.
pub const TALK_COMMANDS: [&str; 2] = ["talk", "parla"];

/// Reply when the target is not an NPC in the current room.
pub const NO_ONE: &str = "There is no one here to talk to.";

/// Reply when the chosen option does not exist.
pub const NO_SUCH_OPTION: &str = "That is not one of the options.";

/// Walks NPC dialogue nodes.
///
/// Subscribes its commands through its [`PluginLink`] once bound.
#[derive(Debug)]
pub struct DialoguePlugin {
    link: PluginLink,
}

impl Default for DialoguePlugin {
    fn default() -> Self {
        Self::new()
    }
}

impl DialoguePlugin {
    /// Creates an unbound plugin.
    #[must_use]
    pub fn new() -> Self {
        Self {
            link: PluginLink::new("dialogue"),
        }
    }
}

impl Plugin for DialoguePlugin {
    fn name(&self) -> &str {
        "dialogue"
    }

    fn link(&self) -> Option<&PluginLink> {
        Some(&self.link)
    }

    fn on_bind(&self) -> Result<()> {
        for command in TALK_COMMANDS {
            self.link.subscribe(command_event(command), talk)?;
        }
        Ok(())
    }
}

/// Handles `talk <npc> [option]`.
fn talk(action: &Action, state: &mut State, world: &mut World) -> Option<String> {
    let target = action.target().unwrap_or_default();
    let room = state.current_room.clone();
    let npcs = &world.npcs;
    let present = |id: &str| npcs.get(id).filter(|npc| npc.location == room);
    if let Some(npc) = present(target) {
        return Some(speak(npc, state));
    }

    // `talk hermit 2`
    let choice = target
        .rsplit_once(' ')
        .and_then(|(id, n)| Some((present(id)?, n.parse::<usize>().ok()?)));
    Some(match choice {
        Some((npc, option)) => reply(npc, option, state),
        None => NO_ONE.to_string(),
    })
}

fn cursor_key(npc: &Npc) -> String {
    format!("dialogue_{}", npc.id)
}

fn cursor(npc: &Npc, state: &State) -> usize {
    state
        .variable(&cursor_key(npc))
        .and_then(Value::as_u64)
        .and_then(|n| usize::try_from(n).ok())
        .unwrap_or(0)
}

/// Shows the node under the cursor and advances it.
fn speak(npc: &Npc, state: &mut State) -> String {
    let index = cursor(npc, state);
    let Some(node) = npc.dialogues.get(index) else {
        return format!("{} has nothing more to say right now.", npc.name);
    };
    state.set_variable(cursor_key(npc), index + 1);
    debug!(npc = %npc.id, node = index, "dialogue advanced");
    render(npc, node)
}

/// Picks a reply (numbered from 1) of the node last shown.
fn reply(npc: &Npc, option: usize, state: &mut State) -> String {
    let shown = cursor(npc, state).checked_sub(1);
    let chosen = shown
        .and_then(|index| npc.dialogues.get(index))
        .and_then(|node| node.options.get(option.checked_sub(1)?));
    let Some(chosen) = chosen else {
        return NO_SUCH_OPTION.to_string();
    };

    let mut lines = vec![format!("You: \"{}\"", chosen.reply)];
    match chosen.next.filter(|next| *next < npc.dialogues.len()) {
        Some(next) => {
            state.set_variable(cursor_key(npc), next);
            lines.push(speak(npc, state));
        }
        None => state.set_variable(cursor_key(npc), npc.dialogues.len()),
    }
    lines.join("\n")
}

fn render(npc: &Npc, node: &DialogueNode) -> String {
    let mut lines = vec![format!("{} says: \"{}\"", npc.name, node.text)];
    if !node.options.is_empty() {
        lines.push("Options:".to_string());
        lines.extend(
            node.options
                .iter()
                .enumerate()
                .map(|(i, option)| format!("  {}. {}", i + 1, option.reply)),
        );
        lines.push(format!("To reply, type: talk {} <option number>", npc.id));
    }
    lines.join("\n")
}
