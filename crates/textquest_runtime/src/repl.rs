//! The interactive game loop.

use std::io::{self, Write};

use textquest_foundation::{Error, Result};
use tracing::debug;

use crate::editor::{LineEditor, ReadResult, RustylineEditor};
use crate::game::Game;

/// Printed when input ends or is interrupted.
pub const GOODBYE: &str = "Goodbye!";

/// Where the loop is in its cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopState {
    /// Not started, or between turns
    Idle,
    /// Waiting on the line editor
    AwaitingInput,
    /// Running a turn
    Processing,
    /// Finished; [`Repl::run`] has returned or will return
    Terminated,
}

/// Reads lines, runs turns, and prints their output.
pub struct Repl<E: LineEditor = RustylineEditor, W: Write = io::Stdout> {
    /// The line editor for input.
    editor: E,

    /// Sink for game text.
    output: W,

    /// The session being played.
    game: Game,

    /// Current loop state.
    state: LoopState,

    /// Whether to print the welcome banner.
    show_banner: bool,

    /// Input prompt.
    prompt: String,
}

impl Repl<RustylineEditor> {
    /// Creates a loop over the terminal.
    ///
    /// # Errors
    ///
    /// Returns an error if the editor fails to initialize.
    pub fn new(game: Game) -> Result<Self> {
        let editor = RustylineEditor::new()?;
        Ok(Self::with_editor(game, editor))
    }
}

impl<E: LineEditor> Repl<E> {
    /// Creates a loop reading from the given editor and printing to stdout.
    pub fn with_editor(game: Game, editor: E) -> Self {
        Self {
            editor,
            output: io::stdout(),
            game,
            state: LoopState::Idle,
            show_banner: true,
            prompt: "> ".to_string(),
        }
    }
}

impl<E: LineEditor, W: Write> Repl<E, W> {
    /// Sends game text to another sink.
    #[must_use]
    pub fn with_output<O: Write>(self, output: O) -> Repl<E, O> {
        Repl {
            editor: self.editor,
            output,
            game: self.game,
            state: self.state,
            show_banner: self.show_banner,
            prompt: self.prompt,
        }
    }

    /// Disables the welcome banner.
    #[must_use]
    pub fn without_banner(mut self) -> Self {
        self.show_banner = false;
        self
    }

    /// Sets the prompt.
    #[must_use]
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// The session being played.
    #[must_use]
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Current loop state.
    #[must_use]
    pub fn loop_state(&self) -> LoopState {
        self.state
    }

    /// Consumes the loop, returning the output sink.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Runs until `exit`, end of input, or an interrupt.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input or writing output fails.
    pub fn run(&mut self) -> Result<()> {
        self.editor.set_keywords(self.game.completion_words());

        for line in self.game.intro(self.show_banner) {
            self.print(&line)?;
        }

        while self.state != LoopState::Terminated {
            self.turn()?;
        }
        self.output.flush().map_err(Error::output)
    }

    /// Reads and runs one line.
    fn turn(&mut self) -> Result<()> {
        self.state = LoopState::AwaitingInput;
        let line = match self.editor.read_line(&self.prompt)? {
            ReadResult::Line(line) => line,
            ReadResult::Interrupted | ReadResult::Eof => {
                debug!("input closed");
                self.state = LoopState::Terminated;
                return self.print(GOODBYE);
            }
        };

        self.state = LoopState::Processing;
        if !line.trim().is_empty() {
            self.editor.add_history(&line);
        }

        let turn = self.game.step(&line);
        for text in &turn.lines {
            self.print(text)?;
        }

        self.state = if turn.terminated {
            LoopState::Terminated
        } else {
            LoopState::Idle
        };
        Ok(())
    }

    fn print(&mut self, text: &str) -> Result<()> {
        writeln!(self.output, "{text}").map_err(Error::output)
    }
}
