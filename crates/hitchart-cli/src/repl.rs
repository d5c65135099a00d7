//! Interactive line reader for the query shell.

use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as RlResult};

/// A line read from the prompt, or a request to quit.
#[derive(Debug)]
pub enum ReplInput {
    Line(String),
    Exit,
}

/// Line reader with in-session history.
pub struct Repl {
    editor: DefaultEditor,
}

impl Repl {
    pub fn new() -> RlResult<Self> {
        Ok(Self {
            editor: DefaultEditor::new()?,
        })
    }

    /// Read one command line. Ctrl-D and Ctrl-C both end the session.
    pub fn read_line(&mut self, prompt: &str) -> RlResult<ReplInput> {
        match self.editor.readline(prompt) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    let _ = self.editor.add_history_entry(&line);
                }
                Ok(ReplInput::Line(line))
            }
            Err(ReadlineError::Eof | ReadlineError::Interrupted) => Ok(ReplInput::Exit),
            Err(e) => Err(e),
        }
    }
}

impl std::fmt::Debug for Repl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Repl").finish_non_exhaustive()
    }
}
