//! Property tests for movement, inventory, and missions.

use proptest::prelude::*;
use textquest_engine::{EventDispatcher, sweep_missions};
use textquest_parser::Action;
use textquest_world::{Item, Mission, MissionStatus, Room, State, World};

const DIRECTIONS: [&str; 4] = ["north", "south", "east", "west"];

/// A 2x2 grid; `east`/`west` and `north`/`south` link neighbours.
fn grid() -> World {
    World::default()
        .with_room(Room::new("nw", "North-west", "").with_connection("east", "ne").with_connection("south", "sw").with_item("a"))
        .with_room(Room::new("ne", "North-east", "").with_connection("west", "nw").with_connection("south", "se").with_item("b"))
        .with_room(Room::new("sw", "South-west", "").with_connection("east", "se").with_connection("north", "nw").with_item("c"))
        .with_room(Room::new("se", "South-east", "").with_connection("west", "sw").with_connection("north", "ne"))
        .with_item(Item::new("a", "Item a."))
        .with_item(Item::new("b", "Item b."))
        .with_item(Item::new("c", "Item c."))
        .with_mission(Mission::new("ab", "Hold a and b").requiring_items(["a", "b"]))
}

fn item_count(state: &State, world: &World) -> usize {
    state.inventory.len() + world.rooms.values().map(|r| r.items.len()).sum::<usize>()
}

fn command() -> impl Strategy<Value = Action> {
    prop_oneof![
        prop::sample::select(DIRECTIONS.to_vec()).prop_map(|d| Action::new("move").with_target(d)),
        "[a-d]".prop_map(|i| Action::new("take").with_target(i)),
        "[a-d]".prop_map(|i| Action::new("drop").with_target(i)),
        Just(Action::new("look")),
        Just(Action::new("inventory")),
    ]
}

proptest! {
    #[test]
    fn current_room_is_always_valid(moves in prop::collection::vec(prop::sample::select(DIRECTIONS.to_vec()), 0..30)) {
        let dispatcher = EventDispatcher::default();
        let mut world = grid();
        let mut state = State::at("nw");
        for direction in moves {
            let before = state.current_room.clone();
            let reply = dispatcher.dispatch(&Action::new("move").with_target(direction), &mut state, &mut world);
            let exit = world.room(&before).unwrap().connections.get(direction).cloned();
            match exit {
                Some(to) => prop_assert_eq!(&state.current_room, &to),
                None => {
                    prop_assert_eq!(reply, "You can't go there.");
                    prop_assert_eq!(&state.current_room, &before);
                }
            }
            prop_assert!(world.rooms.contains_key(&state.current_room));
        }
    }

    #[test]
    fn items_are_conserved_and_never_duplicated(actions in prop::collection::vec(command(), 0..40)) {
        let dispatcher = EventDispatcher::default();
        let mut world = grid();
        let mut state = State::at("nw");
        let total = item_count(&state, &world);

        for action in actions {
            dispatcher.dispatch(&action, &mut state, &mut world);
            prop_assert_eq!(item_count(&state, &world), total);
            for id in ["a", "b", "c"] {
                let held = usize::from(state.holds(id));
                let placed: usize = world.rooms.values().filter(|r| r.contains(id)).count();
                prop_assert_eq!(held + placed, 1);
            }
        }
    }

    #[test]
    fn mission_completes_exactly_when_all_items_held(actions in prop::collection::vec(command(), 0..40)) {
        let dispatcher = EventDispatcher::default();
        let mut world = grid();
        let mut state = State::at("nw");
        state.missions.insert("ab".to_string(), MissionStatus::InProgress);
        let mut completed = false;

        for action in actions {
            dispatcher.dispatch(&action, &mut state, &mut world);
            let holds_both = state.holds("a") && state.holds("b");
            let messages = sweep_missions(&mut state, &world);
            if completed {
                prop_assert!(messages.is_empty());
            } else if holds_both {
                prop_assert_eq!(messages, vec!["Mission 'Hold a and b' completed!".to_string()]);
                completed = true;
            } else {
                prop_assert!(messages.is_empty());
                prop_assert_eq!(state.missions["ab"], MissionStatus::InProgress);
            }
        }
    }
}
