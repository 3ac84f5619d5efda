//! Property tests for the parser.

use proptest::prelude::*;
use textquest_parser::{Command, Parser, Vocabulary};
use textquest_world::{State, World};

fn word() -> impl Strategy<Value = String> {
    "[a-z]{1,8}"
}

proptest! {
    #[test]
    fn parse_never_panics(line in "\\PC{0,60}") {
        let _ = Parser::default().parse(&line);
    }

    #[test]
    fn parse_is_pure(line in "\\PC{0,40}", room in word()) {
        let parser = Parser::default();
        let world = World::default();
        let state = State::at(room);
        let first = parser.parse_in(&line, &state, &world);
        prop_assert_eq!(&first, &parser.parse(&line));
        prop_assert_eq!(&first, &parser.parse_in(&line, &state, &world));
    }

    #[test]
    fn known_verbs_always_canonicalize(index in 0usize..12, rest in prop::collection::vec(word(), 0..4)) {
        let vocabulary = Vocabulary::standard();
        let command = Command::ALL[index];
        for synonym in vocabulary.synonyms(command) {
            let line = std::iter::once(synonym.clone()).chain(rest.iter().cloned()).collect::<Vec<_>>().join(" ");
            prop_assert_eq!(Parser::default().parse(&line).canonical(), Some(command));
        }
    }

    #[test]
    fn use_target_and_indirect_rejoin_to_input(
        target in prop::collection::vec("[d-v]{1,6}", 1..3),
        indirect in prop::collection::vec("[d-v]{1,6}", 1..3),
    ) {
        let line = format!("use {} with {}", target.join(" "), indirect.join(" "));
        let action = Parser::default().parse(&line);
        let expected_target = target.join(" ");
        let expected_indirect = indirect.join(" ");
        prop_assert_eq!(action.target(), Some(expected_target.as_str()));
        prop_assert_eq!(action.indirect(), Some(expected_indirect.as_str()));
    }
}
