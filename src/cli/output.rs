//! Styling helpers for the few message categories the client distinguishes.
//! Server-provided messages are printed verbatim and never pass through
//! these; they only dress the client's own lines.

use colored::Colorize;

pub fn error(text: &str) -> String {
    text.bright_red().to_string()
}

pub fn success(text: &str) -> String {
    text.bright_green().to_string()
}

pub fn heading(text: &str) -> String {
    text.bold().to_string()
}
