//! Plays the bundled demo adventure in `demos/cave`.

use std::path::PathBuf;

use textquest::runtime::Game;
use textquest::world::{MissionStatus, load_world};

use crate::support::play;

fn demo_world_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("demos/cave/config/world.yaml")
}

fn demo_game() -> Game {
    let world = load_world(demo_world_path()).unwrap();
    let plugins = textquest::stdlib::registry(&world.plugins).unwrap();
    Game::new(world, plugins).unwrap()
}

#[test]
fn demo_world_loads() {
    let world = load_world(demo_world_path()).unwrap();
    assert_eq!(world.start_room_id, "entrance");
    assert_eq!(world.start_time, 480);
    assert_eq!(world.plugins, vec!["light", "dialogue"]);
    // Inline and catalog items are merged.
    assert!(world.items.contains_key("rope"));
    assert_eq!(
        world.item("torch").unwrap().description,
        "A wooden torch wrapped in oil-soaked cloth."
    );
    assert_eq!(world.npcs["hermit"].dialogues.len(), 3);
}

#[test]
fn walkthrough_finds_the_gem() {
    let mut game = demo_game();
    assert_eq!(game.state().missions["find_gem"], MissionStatus::InProgress);

    let script = [
        ("go north", "You arrive in Dark Cave."),
        ("look", "It's too dark to see. Perhaps a torch would help!"),
        ("go south", "You arrive in Cave Entrance."),
        ("take torch", "You picked up torch."),
        ("go north", "You arrive in Dark Cave."),
        ("use torch", "You light the torch! A warm glow fills the room."),
    ];
    for (line, reply) in script {
        assert_eq!(game.step(line).lines, vec![reply.to_string()], "after '{line}'");
    }

    assert!(game.step("look").lines[0].contains("Visible items: gem"));
    assert_eq!(
        game.step("prendi gem").lines,
        vec![
            "The gem pulses with a warm light. You have found the hermit's treasure!".to_string(),
            "You picked up gem.".to_string(),
        ]
    );
    assert_eq!(game.state().missions["find_gem"], MissionStatus::Completed);
    assert_eq!(game.step("stats").lines, vec!["Play time: 8h 0m".to_string()]);
}

#[test]
fn talking_to_the_hermit() {
    let output = play(
        demo_game(),
        &["go east", "talk hermit", "talk hermit 1", "parla hermit", "talk hermit", "esci"],
    );
    let expected = "\
You arrive in Hermit's Hut.
Old Hermit says: \"Who disturbs my rest?\"
Options:
  1. A traveller looking for the gem.
  2. Nobody. I am leaving.
To reply, type: talk hermit <option number>
You: \"A traveller looking for the gem.\"
Old Hermit says: \"The cave hides it, but only a flame will show you where.\"
Options:
  1. Thank you.
To reply, type: talk hermit <option number>
Old Hermit says: \"Go on, then. The dark will not wait forever.\"
Old Hermit has nothing more to say right now.
Thanks for playing. Goodbye!
";
    assert!(output.ends_with(expected), "got:\n{output}");
}
