//! Scripted sessions against small worlds.

use textquest::engine::PluginRegistry;
use textquest::runtime::Game;
use textquest::stdlib::LightPlugin;
use textquest::world::{Item, Mission, Room, World};

use crate::support::play;

fn one_room() -> World {
    World::default()
        .with_room(Room::new("start", "Test Room", "You are in a test room.").with_item("item1"))
        .with_item(Item::new("item1", "A test object."))
}

#[test]
fn look_take_inventory_exit() {
    let game = Game::new(one_room(), PluginRegistry::new()).unwrap();
    let output = play(game, &["look", "inventory", "take item1", "inventory", "exit", "look"]);

    let expected = [
        "== Test Room ==",
        "You are in a test room.",
        "",
        "Visible items: item1",
        "Your inventory is empty.",
        "You picked up item1.",
        "Inventory:",
        "- item1: A test object.",
        "Thanks for playing. Goodbye!",
    ];
    assert_eq!(output.lines().collect::<Vec<_>>(), expected);
}

#[test]
fn torch_lights_the_cave() {
    let world = World::default()
        .with_room(Room::new("cave", "Dark Cave", "Dripping rock.").with_item("torch"))
        .with_item(Item::new("torch", "A torch."))
        .with_item(Item::new("gem", "A glowing gem."));
    let plugins = PluginRegistry::new().with(LightPlugin::default());
    let game = Game::new(world, plugins).unwrap();

    let output = play(game, &["look", "use torch", "look"]);
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines[0], "It's too dark to see. Perhaps a torch would help!");
    assert_eq!(lines[1], "You light the torch! A warm glow fills the room.");
    assert_eq!(lines[2], "== Dark Cave ==");
    assert!(output.contains("Visible items: torch, gem"));
    assert_eq!(lines.last(), Some(&"Goodbye!"));
}

#[test]
fn move_to_nowhere() {
    let game = Game::new(one_room(), PluginRegistry::new()).unwrap();
    let output = play(game, &["move xyz", "look"]);
    assert!(output.starts_with("You can't go there.\n== Test Room =="));
}

#[test]
fn mission_completes_after_any_command() {
    let world = one_room()
        .with_room(Room::new("closet", "Closet", "Tiny.").with_item("item2"))
        .with_item(Item::new("item2", "Another object."))
        .with_mission(Mission::new("both", "Both objects").requiring_items(["item1", "item2"]))
        .with_initial_mission("both");
    let mut game = Game::new(world, PluginRegistry::new()).unwrap();

    game.step("take item1");
    // Hand the second item over outside of `take`; the next command of any
    // kind completes the mission.
    game.state_mut().inventory.push("item2".to_string());
    let turn = game.step("stats");
    assert_eq!(
        turn.lines,
        vec!["Mission 'Both objects' completed!".to_string(), "Play time: 0h 0m".to_string()]
    );
    assert!(game.step("missions").lines[0].contains("- Both objects: completed"));
}

#[test]
fn intro_and_banner_precede_first_prompt() {
    let mut world = one_room();
    world.intro_text = "Long ago...".to_string();
    let game = Game::new(world, PluginRegistry::new()).unwrap();
    let mut repl = textquest::runtime::Repl::with_editor(game, crate::support::ScriptedEditor::new(&["exit"]))
        .with_output(Vec::new());
    repl.run().unwrap();
    let output = String::from_utf8(repl.into_output()).unwrap();
    assert_eq!(
        output,
        "Long ago...\n\nWelcome to TextQuest!\n\nThanks for playing. Goodbye!\n"
    );
}
