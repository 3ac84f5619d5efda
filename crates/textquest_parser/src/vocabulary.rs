//! Verb vocabulary.
//!
//! A bidirectional synonym table: any word resolves to its canonical
//! [`Command`], and every command lists the words that reach it.

use std::collections::HashMap;

use crate::action::Command;
use crate::stdlib;

/// A canonical command with the words that reach it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Verb {
    /// Canonical command
    pub command: Command,
    /// Words resolving to the command, in registration order
    pub synonyms: Vec<String>,
}

/// Runtime storage for the verb table.
#[derive(Clone, Debug, Default)]
pub struct Vocabulary {
    /// Verbs in registration order (help order)
    verbs: Vec<Verb>,
    /// Word -> canonical command
    lookup: HashMap<String, Command>,
    /// Words splitting `use` objects
    indirect_markers: Vec<String>,
}

impl Vocabulary {
    /// Creates an empty vocabulary.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates the standard English/Italian vocabulary.
    #[must_use]
    pub fn standard() -> Self {
        let mut vocabulary = Self::new();
        for (command, words) in stdlib::VERBS {
            for word in *words {
                vocabulary.register_synonym(*command, *word);
            }
        }
        for marker in stdlib::INDIRECT_MARKERS {
            vocabulary.register_indirect_marker(*marker);
        }
        vocabulary
    }

    /// Adds a synonym, builder style.
    #[must_use]
    pub fn with_synonym(mut self, command: Command, word: impl Into<String>) -> Self {
        self.register_synonym(command, word);
        self
    }

    /// Registers a word for a command.
    ///
    /// Words are stored lowercase. Re-registering a word moves it to the
    /// new command.
    pub fn register_synonym(&mut self, command: Command, word: impl Into<String>) {
        let word = word.into().to_lowercase();

        if let Some(previous) = self.lookup.insert(word.clone(), command) {
            if let Some(verb) = self.verbs.iter_mut().find(|v| v.command == previous) {
                verb.synonyms.retain(|w| *w != word);
            }
        }

        match self.verbs.iter_mut().find(|v| v.command == command) {
            Some(verb) => verb.synonyms.push(word),
            None => self.verbs.push(Verb {
                command,
                synonyms: vec![word],
            }),
        }
    }

    /// Registers a word that splits `use` objects.
    pub fn register_indirect_marker(&mut self, word: impl Into<String>) {
        let word = word.into().to_lowercase();
        if !self.indirect_markers.contains(&word) {
            self.indirect_markers.push(word);
        }
    }

    /// Resolves a word to its canonical command.
    #[must_use]
    pub fn canonical(&self, word: &str) -> Option<Command> {
        self.lookup.get(word).copied()
    }

    /// Words that reach a command.
    #[must_use]
    pub fn synonyms(&self, command: Command) -> &[String] {
        self.verbs
            .iter()
            .find(|v| v.command == command)
            .map(|v| v.synonyms.as_slice())
            .unwrap_or_default()
    }

    /// All verbs in registration order.
    pub fn verbs(&self) -> impl Iterator<Item = &Verb> {
        self.verbs.iter()
    }

    /// Every registered word, for completion.
    #[must_use]
    pub fn words(&self) -> Vec<String> {
        self.verbs
            .iter()
            .flat_map(|v| v.synonyms.iter().cloned())
            .collect()
    }

    /// Returns true if the word splits `use` objects.
    #[must_use]
    pub fn is_indirect_marker(&self, word: &str) -> bool {
        self.indirect_markers.iter().any(|m| m == word)
    }
}
