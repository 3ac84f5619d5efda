//! Main parser pipeline.
//!
//! Orchestrates tokenizing, verb lookup, and object extraction.

use textquest_world::{State, World};

use crate::action::{Action, Command};
use crate::tokenizer::InputTokenizer;
use crate::vocabulary::Vocabulary;

/// Turns raw input lines into [`Action`]s.
#[derive(Clone, Debug)]
pub struct Parser {
    vocabulary: Vocabulary,
}

impl Default for Parser {
    fn default() -> Self {
        Self::new(Vocabulary::standard())
    }
}

impl Parser {
    /// Creates a parser over the given vocabulary.
    #[must_use]
    pub fn new(vocabulary: Vocabulary) -> Self {
        Self { vocabulary }
    }

    /// Returns the vocabulary.
    #[must_use]
    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// Parses one line of input.
    ///
    /// - Empty input is `help`.
    /// - The first word is resolved through the vocabulary; unknown words
    ///   pass through unchanged.
    /// - For `use`, the first indirect marker (`with`, `con`) splits the
    ///   rest into target and indirect object.
    /// - Otherwise the rest is the target.
    ///
    /// Empty object phrases are `None`.
    #[must_use]
    pub fn parse(&self, line: &str) -> Action {
        let tokens = InputTokenizer::tokenize(line);
        let Some((verb, rest)) = tokens.split_first() else {
            return Action::new(Command::Help.as_str());
        };

        let command = self
            .vocabulary
            .canonical(verb)
            .map_or_else(|| verb.clone(), |c| c.as_str().to_string());
        let mut action = Action::new(command);

        let split = if action.is(Command::Use) {
            rest.iter()
                .position(|word| self.vocabulary.is_indirect_marker(word))
        } else {
            None
        };

        let (target, indirect) = match split {
            Some(index) => (&rest[..index], Some(&rest[index + 1..])),
            None => (rest, None),
        };

        if let Some(target) = phrase(target) {
            action = action.with_target(target);
        }
        if let Some(indirect) = indirect.and_then(phrase) {
            action = action.with_indirect(indirect);
        }
        action
    }

    /// Parses with session context.
    ///
    /// The context is accepted so callers can pass it uniformly; it does not
    /// influence the result, which is always equal to [`Parser::parse`].
    #[must_use]
    pub fn parse_in(&self, line: &str, _state: &State, _world: &World) -> Action {
        self.parse(line)
    }
}

fn phrase(words: &[String]) -> Option<String> {
    if words.is_empty() {
        None
    } else {
        Some(words.join(" "))
    }
}
