//! Parsed player actions.

use std::fmt;

/// The canonical commands the core understands.
///
/// Anything else the player types is carried through as a raw command name
/// so a plugin can claim it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Command {
    /// List commands and synonyms
    Help,
    /// Describe the room or an item
    Look,
    /// List held items
    Inventory,
    /// Walk through an exit
    Move,
    /// Pick up an item
    Take,
    /// Put down an item
    Drop,
    /// Use a held item
    Use,
    /// Save to a slot
    Save,
    /// Load from a slot
    Load,
    /// List tracked missions
    Missions,
    /// Show play time
    Stats,
    /// Leave the game
    Exit,
}

impl Command {
    /// Every canonical command, in help order.
    pub const ALL: [Self; 12] = [
        Self::Help,
        Self::Look,
        Self::Inventory,
        Self::Move,
        Self::Take,
        Self::Drop,
        Self::Use,
        Self::Save,
        Self::Load,
        Self::Missions,
        Self::Stats,
        Self::Exit,
    ];

    /// The canonical name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Help => "help",
            Self::Look => "look",
            Self::Inventory => "inventory",
            Self::Move => "move",
            Self::Take => "take",
            Self::Drop => "drop",
            Self::Use => "use",
            Self::Save => "save",
            Self::Load => "load",
            Self::Missions => "missions",
            Self::Stats => "stats",
            Self::Exit => "exit",
        }
    }

    /// Looks up a canonical command by its exact canonical name.
    ///
    /// Synonyms are not resolved here; that is the vocabulary's job.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == name)
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One parsed line of input: a command with optional direct and indirect
/// objects.
///
/// Actions are immutable once built; handlers and plugins only read them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Action {
    command: String,
    target: Option<String>,
    indirect: Option<String>,
}

impl Action {
    /// Creates an action with no objects.
    #[must_use]
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            target: None,
            indirect: None,
        }
    }

    /// Sets the direct object.
    #[must_use]
    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        self.target = Some(target.into());
        self
    }

    /// Sets the indirect object.
    #[must_use]
    pub fn with_indirect(mut self, indirect: impl Into<String>) -> Self {
        self.indirect = Some(indirect.into());
        self
    }

    /// The command name: canonical if the verb was recognized, raw otherwise.
    #[must_use]
    pub fn command(&self) -> &str {
        &self.command
    }

    /// The direct object, if any.
    #[must_use]
    pub fn target(&self) -> Option<&str> {
        self.target.as_deref()
    }

    /// The indirect object, if any.
    #[must_use]
    pub fn indirect(&self) -> Option<&str> {
        self.indirect.as_deref()
    }

    /// The canonical command, if the command name is one.
    #[must_use]
    pub fn canonical(&self) -> Option<Command> {
        Command::from_name(&self.command)
    }

    /// Returns true if this action is the given canonical command.
    #[must_use]
    pub fn is(&self, command: Command) -> bool {
        self.command == command.as_str()
    }

    /// Name of the per-command hook event, `command_<name>`.
    #[must_use]
    pub fn event_name(&self) -> String {
        format!("command_{}", self.command)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.command)?;
        if let Some(target) = &self.target {
            write!(f, " {target}")?;
        }
        if let Some(indirect) = &self.indirect {
            write!(f, " -> {indirect}")?;
        }
        Ok(())
    }
}
