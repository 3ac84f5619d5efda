//! Shared helpers: a scripted line editor and a session runner.

use textquest::foundation::Result;
use textquest::runtime::{Game, LineEditor, ReadResult, Repl};

/// Feeds fixed lines, then reports end of input.
pub struct ScriptedEditor {
    lines: std::vec::IntoIter<String>,
    pub history: Vec<String>,
}

impl ScriptedEditor {
    pub fn new(lines: &[&str]) -> Self {
        Self {
            lines: lines
                .iter()
                .map(|l| (*l).to_string())
                .collect::<Vec<_>>()
                .into_iter(),
            history: Vec::new(),
        }
    }
}

impl LineEditor for ScriptedEditor {
    fn read_line(&mut self, _prompt: &str) -> Result<ReadResult> {
        Ok(self.lines.next().map_or(ReadResult::Eof, ReadResult::Line))
    }

    fn add_history(&mut self, line: &str) {
        self.history.push(line.to_string());
    }

    fn set_keywords(&mut self, _keywords: Vec<String>) {}
}

/// Plays a script without the banner and returns everything printed.
pub fn play(game: Game, lines: &[&str]) -> String {
    let mut repl = Repl::with_editor(game, ScriptedEditor::new(lines))
        .without_banner()
        .with_output(Vec::new());
    repl.run().unwrap();
    String::from_utf8(repl.into_output()).unwrap()
}
