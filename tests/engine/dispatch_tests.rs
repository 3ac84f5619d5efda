//! Built-in handler tests through the dispatcher.

use textquest_engine::EventDispatcher;
use textquest_parser::{Action, Parser};
use textquest_world::{Item, Mission, MissionStatus, Room, State, World};

fn world() -> World {
    World::default()
        .with_room(
            Room::new("start", "Test Room", "You are in a test room.")
                .with_connection("north", "attic")
                .with_item("item1"),
        )
        .with_room(Room::new("attic", "Dusty Attic", "Cobwebs.").with_connection("down", "start"))
        .with_item(Item::new("item1", "A test object.").with_names(["widget"]))
        .with_mission(Mission::new("collect", "Collect the widget").requiring_items(["item1"]))
}

struct Fixture {
    dispatcher: EventDispatcher,
    parser: Parser,
    state: State,
    world: World,
}

impl Fixture {
    fn new() -> Self {
        let world = world();
        Self {
            dispatcher: EventDispatcher::default(),
            parser: Parser::default(),
            state: State::new(&world),
            world,
        }
    }

    fn run(&mut self, line: &str) -> String {
        let action = self.parser.parse(line);
        self.dispatcher.dispatch(&action, &mut self.state, &mut self.world)
    }
}

#[test]
fn look_shows_room_items_and_exits() {
    let mut f = Fixture::new();
    assert_eq!(
        f.run("look"),
        "== Test Room ==\nYou are in a test room.\n\nVisible items: widget\nExits: north"
    );
    assert_eq!(f.run("x item1"), "A test object.");
    assert_eq!(f.run("look widget"), "You don't see 'widget' here.");
}

#[test]
fn move_changes_room_only_on_valid_exit() {
    let mut f = Fixture::new();
    assert_eq!(f.run("move xyz"), "You can't go there.");
    assert_eq!(f.state.current_room, "start");
    assert_eq!(f.run("vai"), "You can't go there.");
    assert_eq!(f.run("go north"), "You arrive in Dusty Attic.");
    assert_eq!(f.state.current_room, "attic");
    assert_eq!(f.run("walk down"), "You arrive in Test Room.");
}

#[test]
fn take_drop_round_trip() {
    let mut f = Fixture::new();
    let before = (f.state.clone(), f.world.clone());

    assert_eq!(f.run("take item1"), "You picked up item1.");
    assert_eq!(f.run("i"), "Inventory:\n- widget: A test object.");
    assert_eq!(f.run("drop item1"), "You dropped item1.");

    assert_eq!(f.state, before.0);
    assert_eq!(f.world, before.1);
}

#[test]
fn dropped_items_stay_where_dropped() {
    let mut f = Fixture::new();
    f.run("take item1");
    f.run("go north");
    f.run("drop item1");
    assert!(f.world.room("attic").unwrap().contains("item1"));
    assert!(!f.world.room("start").unwrap().contains("item1"));
}

#[test]
fn failed_commands_leave_state_alone() {
    let mut f = Fixture::new();
    let before = (f.state.clone(), f.world.clone());
    for line in ["take", "take ghost", "drop", "drop item1", "use", "use item1", "go", "go west", "look ghost"] {
        f.run(line);
    }
    assert_eq!(f.state, before.0);
    assert_eq!(f.world, before.1);
}

#[test]
fn use_ignores_indirect_object() {
    let mut f = Fixture::new();
    f.run("take item1");
    assert_eq!(f.run("use item1 with door"), "You used item1.");
    assert_eq!(f.run("use item1"), "You used item1.");
}

#[test]
fn missions_list_status() {
    let mut f = Fixture::new();
    assert_eq!(f.run("missions"), "There are no active missions.");
    f.state.missions.insert("collect".to_string(), MissionStatus::InProgress);
    assert_eq!(f.run("quests"), "Missions:\n- Collect the widget: in-progress");
}

#[test]
fn save_load_and_stats() {
    let mut f = Fixture::new();
    assert_eq!(f.run("save"), "Saved to slot 'default'.");
    assert_eq!(f.run("salva slot1"), "Saved to slot 'slot1'.");
    assert_eq!(f.run("carica slot1"), "Loaded from slot 'slot1'.");
    f.state.time = 61;
    assert_eq!(f.run("statistiche"), "Play time: 1h 1m");
}

#[test]
fn unknown_command_points_to_help() {
    let mut f = Fixture::new();
    assert_eq!(
        f.run("xyzzy"),
        "Unrecognized command: 'xyzzy'. Type 'help' for assistance."
    );
}

#[test]
fn dangling_references_do_not_panic() {
    let mut f = Fixture::new();
    f.state.current_room = "nowhere".to_string();
    f.state.inventory.push("phantom".to_string());

    assert!(!f.run("look").is_empty());
    assert_eq!(f.run("inventory"), "Inventory:\n- phantom");
    assert_eq!(f.run("go north"), "You can't go there.");
    assert_eq!(f.run("take item1"), "You don't see 'item1' here.");
    assert!(!f.run("drop phantom").is_empty());
    assert!(f.state.holds("phantom"));
}

#[test]
fn action_built_by_hand_dispatches_like_parsed() {
    let mut f = Fixture::new();
    let reply = f
        .dispatcher
        .dispatch(&Action::new("take").with_target("item1"), &mut f.state, &mut f.world);
    assert_eq!(reply, "You picked up item1.");
}
