//! Standard vocabulary for adventure games.
//!
//! English verbs plus the Italian localisation the engine has always
//! accepted. Every canonical command lists itself first so help output
//! reads naturally.

use crate::action::Command;

/// Standard verb synonyms, in help order.
pub const VERBS: &[(Command, &[&str])] = &[
    (Command::Help, &["help", "aiuto", "?"]),
    (Command::Look, &["look", "guarda", "l", "examine", "x"]),
    (Command::Inventory, &["inventory", "inventario", "i", "inv"]),
    (Command::Move, &["move", "vai", "go", "walk"]),
    (Command::Take, &["take", "prendi", "get", "grab"]),
    (Command::Drop, &["drop", "lascia"]),
    (Command::Use, &["use", "usa"]),
    (Command::Save, &["save", "salva"]),
    (Command::Load, &["load", "carica"]),
    (Command::Missions, &["missions", "missioni", "quests"]),
    (Command::Stats, &["stats", "statistiche"]),
    (Command::Exit, &["exit", "esci", "quit", "q"]),
];

/// Words that split `use X <marker> Y` into target and indirect object.
pub const INDIRECT_MARKERS: &[&str] = &["with", "con"];
