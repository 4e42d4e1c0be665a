//! Commands understood by the interactive viewer.

use crate::Error;

/// A single user action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Add a book with the given title.
    Add(String),
    /// Delete the most recently added book.
    Delete,
    /// Redraw the current state.
    Show,
    /// Print the command summary.
    Help,
    /// Leave the viewer.
    Quit,
}

/// Summary of the commands, one per line.
pub const HELP: &str = "\
add <title>  (a)   add a book at the head
delete       (d)   delete the book at the head
show         (s)   redraw the list
help         (h ?) show this help
quit         (q)   exit";

impl Command {
    /// Parse one input line. An empty line redraws the view.
    pub fn parse(line: &str) -> Result<Self, Error> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };
        let command = match word.to_ascii_lowercase().as_str() {
            "add" | "a" => {
                if rest.is_empty() {
                    return Err(Error::EmptyTitle);
                }
                Command::Add(rest.to_owned())
            }
            "delete" | "d" => Command::Delete,
            "" | "show" | "s" => Command::Show,
            "help" | "h" | "?" => Command::Help,
            "quit" | "q" | "exit" => Command::Quit,
            _ => return Err(Error::UnknownCommand(word.to_owned())),
        };
        Ok(command)
    }
}
