//! Mission completion.

use textquest_world::{MissionStatus, State, World};
use tracing::info;

/// Completes every in-progress mission whose required items are all held.
///
/// Returns the completion messages in mission order. A mission with no
/// item requirement completes on the first sweep. Missions unknown to the
/// world are left as they are.
pub fn sweep_missions(state: &mut State, world: &World) -> Vec<String> {
    let mut messages = Vec::new();
    for (id, status) in &mut state.missions {
        if *status != MissionStatus::InProgress {
            continue;
        }
        let Some(mission) = world.missions.get(id) else {
            continue;
        };
        if mission
            .required_items()
            .iter()
            .all(|item| state.inventory.contains(item))
        {
            *status = MissionStatus::Completed;
            info!(mission = %id, "mission completed");
            messages.push(mission.completion_message());
        }
    }
    messages
}
