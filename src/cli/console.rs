use std::io::{self, Write};

use crossterm::{
    cursor,
    terminal::{self, ClearType},
    ExecutableCommand,
};

use crate::errors::ConsoleError;

/// Terminal seam used by prompts, menus and the gateway.
///
/// Implementations echo nothing of their own; callers own the interaction
/// wording, so a scripted implementation can drive the whole client in tests.
pub trait Console {
    /// Reads one line of input, without the trailing newline.
    fn read_line(&mut self) -> Result<String, ConsoleError>;
    fn print(&mut self, text: &str);
    fn println(&mut self, text: &str);
    fn clear(&mut self);
}

/// Console over the process stdin/stdout.
#[derive(Default)]
pub struct StdConsole;

impl StdConsole {
    pub fn new() -> Self {
        Self
    }
}

impl Console for StdConsole {
    fn read_line(&mut self) -> Result<String, ConsoleError> {
        let mut buffer = String::new();
        let read = io::stdin().read_line(&mut buffer)?;
        if read == 0 {
            return Err(ConsoleError::EndOfInput);
        }
        Ok(buffer.trim_end_matches(['\r', '\n']).to_string())
    }

    fn print(&mut self, text: &str) {
        print!("{text}");
        let _ = io::stdout().flush();
    }

    fn println(&mut self, text: &str) {
        println!("{text}");
    }

    fn clear(&mut self) {
        let mut stdout = io::stdout();
        let _ = stdout.execute(terminal::Clear(ClearType::All));
        let _ = stdout.execute(cursor::MoveTo(0, 0));
    }
}
