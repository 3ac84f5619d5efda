//! One play session.
//!
//! [`Game`] owns the world and state and runs single turns without doing
//! any I/O; [`crate::Repl`] drives it from a line editor.

use textquest_engine::{
    EventDispatcher, POST_ACTION, PRE_ACTION, PluginRegistry, handlers, sweep_missions,
};
use textquest_foundation::Result;
use textquest_parser::{Command, Parser};
use textquest_world::{State, World};
use tracing::{debug, info};

/// Banner printed after the intro text.
pub const BANNER: &str = "Welcome to TextQuest!";

/// Output of one turn.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Turn {
    /// Lines to print, in order
    pub lines: Vec<String>,
    /// Whether the session has ended
    pub terminated: bool,
}

impl Turn {
    fn reply(line: impl Into<String>) -> Self {
        Self {
            lines: vec![line.into()],
            terminated: false,
        }
    }

    fn farewell() -> Self {
        Self {
            lines: vec![handlers::FAREWELL.to_string()],
            terminated: true,
        }
    }
}

/// A play session.
///
/// Turns run one at a time; the world and state have a single writer for
/// the whole session.
#[derive(Debug)]
pub struct Game {
    world: World,
    state: State,
    parser: Parser,
    dispatcher: EventDispatcher,
    plugins: PluginRegistry,
}

impl Game {
    /// Starts a session in the world's start room and binds the plugins in
    /// order.
    ///
    /// # Errors
    ///
    /// Returns an error if a plugin fails to bind.
    pub fn new(world: World, plugins: PluginRegistry) -> Result<Self> {
        Self::with_parser(world, plugins, Parser::default())
    }

    /// Like [`Game::new`] with a custom parser. `help` lists the parser's
    /// vocabulary.
    ///
    /// # Errors
    ///
    /// Returns an error if a plugin fails to bind.
    pub fn with_parser(world: World, plugins: PluginRegistry, parser: Parser) -> Result<Self> {
        let state = State::new(&world);
        let dispatcher = EventDispatcher::new(parser.vocabulary().clone());
        plugins.bind_all(&dispatcher)?;
        info!(
            room = %state.current_room,
            plugins = ?plugins.names(),
            "game started"
        );
        Ok(Self {
            world,
            state,
            parser,
            dispatcher,
            plugins,
        })
    }

    /// The world.
    #[must_use]
    pub fn world(&self) -> &World {
        &self.world
    }

    /// The session state.
    #[must_use]
    pub fn state(&self) -> &State {
        &self.state
    }

    /// Mutable session state.
    pub fn state_mut(&mut self) -> &mut State {
        &mut self.state
    }

    /// The parser.
    #[must_use]
    pub fn parser(&self) -> &Parser {
        &self.parser
    }

    /// The dispatcher.
    #[must_use]
    pub fn dispatcher(&self) -> &EventDispatcher {
        &self.dispatcher
    }

    /// The bound plugins.
    #[must_use]
    pub fn plugins(&self) -> &PluginRegistry {
        &self.plugins
    }

    /// Lines printed before the first prompt: the trimmed intro text, if
    /// any, then optionally the banner.
    #[must_use]
    pub fn intro(&self, banner: bool) -> Vec<String> {
        let mut lines = Vec::new();
        let intro = self.world.intro_text.trim();
        if !intro.is_empty() {
            lines.push(format!("{intro}\n"));
        }
        if banner {
            lines.push(format!("{BANNER}\n"));
        }
        lines
    }

    /// Words worth completing: verbs, item ids, and NPC ids.
    #[must_use]
    pub fn completion_words(&self) -> Vec<String> {
        let mut words = self.parser.vocabulary().words();
        words.extend(self.world.items.keys().cloned());
        words.extend(self.world.npcs.keys().cloned());
        words.sort();
        words.dedup();
        words
    }

    /// Runs one turn.
    ///
    /// A `pre_action` answer replaces the turn. `exit` ends the session.
    /// Otherwise the action is dispatched, missions are swept, and
    /// `post_action` runs; mission messages come before the reply.
    pub fn step(&mut self, line: &str) -> Turn {
        let action = self.parser.parse_in(line, &self.state, &self.world);
        debug!(%action, "parsed input");

        if let Some(veto) =
            self.dispatcher
                .emit(PRE_ACTION, &action, &mut self.state, &mut self.world)
        {
            debug!(%action, "turn vetoed");
            return Turn::reply(veto);
        }

        if action.is(Command::Exit) {
            return Turn::farewell();
        }

        let output = self
            .dispatcher
            .dispatch(&action, &mut self.state, &mut self.world);

        let mut lines = sweep_missions(&mut self.state, &self.world);
        if !output.is_empty() {
            lines.push(output);
        }

        self.dispatcher
            .emit(POST_ACTION, &action, &mut self.state, &mut self.world);

        Turn {
            lines,
            terminated: false,
        }
    }
}
