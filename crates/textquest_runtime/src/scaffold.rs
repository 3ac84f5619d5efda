//! Scaffolding for new adventures.

use std::fs;
use std::path::{Path, PathBuf};

use textquest_foundation::{Error, ErrorKind, Result};
use textquest_world::ITEMS_FILE;
use tracing::info;

/// World file written into new projects.
const WORLD_TEMPLATE: &str = r#"config:
  start_room: start
  start_time: 0
  initial_missions: []
  intro_text: "Welcome to your new adventure!"
  plugins: []

rooms:
  start:
    name: Starting Room
    desc: You are in an empty room, full of possibilities.
    connections: {}
    items: []

items: {}

npcs: {}

missions: {}
"#;

/// Creates `config/world.yaml`, an empty `config/items.json`, and
/// `assets/` under a new project directory.
///
/// Returns the path of the world file.
///
/// # Errors
///
/// Returns [`ErrorKind::ProjectExists`] if the directory already exists, or
/// an I/O error if a file cannot be written.
pub fn init_project(root: impl AsRef<Path>) -> Result<PathBuf> {
    let root = root.as_ref();
    if root.exists() {
        return Err(Error::new(ErrorKind::ProjectExists(root.to_path_buf())));
    }

    let config = root.join("config");
    let assets = root.join("assets");
    for dir in [&config, &assets] {
        fs::create_dir_all(dir).map_err(|e| Error::io(dir, e))?;
    }

    let world = config.join("world.yaml");
    write(&world, WORLD_TEMPLATE)?;
    write(&config.join(ITEMS_FILE), "{}\n")?;

    info!(path = %root.display(), "initialized project");
    Ok(world)
}

fn write(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents).map_err(|e| Error::io(path, e))
}
