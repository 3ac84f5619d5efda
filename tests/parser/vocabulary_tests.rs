//! Vocabulary tests.
//!
//! Tests for the synonym table in both directions.

use textquest_parser::{Command, Vocabulary};

#[test]
fn every_synonym_resolves_to_its_command() {
    let vocabulary = Vocabulary::standard();
    for verb in vocabulary.verbs() {
        for word in &verb.synonyms {
            assert_eq!(vocabulary.canonical(word), Some(verb.command), "word {word}");
        }
    }
}

#[test]
fn table_matches_documented_synonyms() {
    let vocabulary = Vocabulary::standard();
    let expect = |command: Command, words: &[&str]| {
        assert_eq!(vocabulary.synonyms(command), words, "synonyms of {command}");
    };
    expect(Command::Help, &["help", "aiuto", "?"]);
    expect(Command::Look, &["look", "guarda", "l", "examine", "x"]);
    expect(Command::Inventory, &["inventory", "inventario", "i", "inv"]);
    expect(Command::Move, &["move", "vai", "go", "walk"]);
    expect(Command::Take, &["take", "prendi", "get", "grab"]);
    expect(Command::Drop, &["drop", "lascia"]);
    expect(Command::Use, &["use", "usa"]);
    expect(Command::Save, &["save", "salva"]);
    expect(Command::Load, &["load", "carica"]);
    expect(Command::Missions, &["missions", "missioni", "quests"]);
    expect(Command::Stats, &["stats", "statistiche"]);
    expect(Command::Exit, &["exit", "esci", "quit", "q"]);
}

#[test]
fn verbs_follow_command_order() {
    let order: Vec<Command> = Vocabulary::standard().verbs().map(|v| v.command).collect();
    assert_eq!(order, Command::ALL.to_vec());
}

#[test]
fn unknown_words_have_no_command() {
    let vocabulary = Vocabulary::standard();
    assert_eq!(vocabulary.canonical("talk"), None);
    assert_eq!(vocabulary.canonical("LOOK"), None);
    assert_eq!(vocabulary.canonical(""), None);
}

#[test]
fn extended_vocabulary_keeps_standard_words() {
    let vocabulary = Vocabulary::standard().with_synonym(Command::Move, "cammina");
    assert_eq!(vocabulary.canonical("cammina"), Some(Command::Move));
    assert_eq!(vocabulary.canonical("vai"), Some(Command::Move));
    assert_eq!(vocabulary.synonyms(Command::Move).last().map(String::as_str), Some("cammina"));
}
