//! Interactive terminal viewer for the book collection.
//!
//! Reads one command per line from stdin and redraws the list after every
//! change.
//!
//! ```bash
//! bookslab --capacity 5 --preload Dune --preload Emma
//! ```

use std::io::{self, BufRead, IsTerminal, Write};

use anyhow::Context;
use bookslab::command::HELP;
use bookslab::render::render_library;
use bookslab::{Command, Error, Library};
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// A fixed-capacity book collection backed by an array linked list
#[derive(Parser, Debug)]
#[command(name = "bookslab")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Number of slots in the collection
    #[arg(short, long, default_value_t = 5, env = "BOOKSLAB_CAPACITY")]
    capacity: usize,

    /// Log filter, e.g. `debug` or `bookslab=trace`
    #[arg(long, default_value = "warn", env = "RUST_LOG")]
    log_level: String,

    /// Disable colored log output
    #[arg(long)]
    no_color: bool,

    /// Titles to add before the first prompt
    #[arg(long, value_name = "TITLE")]
    preload: Vec<String>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(&cli)?;

    let mut library = Library::new(cli.capacity)
        .with_context(|| format!("Failed to create a library of {} books", cli.capacity))?;
    info!(capacity = cli.capacity, "Library ready");

    preload(&mut library, &cli.preload, io::stdout().lock())?;

    let interactive = io::stdin().is_terminal();
    run(&mut library, io::stdin().lock(), io::stdout().lock(), interactive)
}

/// Add the `--preload` titles in order, reporting the ones that don't fit.
fn preload(library: &mut Library, titles: &[String], mut out: impl Write) -> anyhow::Result<()> {
    for title in titles {
        if let Err(e) = library.add_book(title) {
            writeln!(out, "{}: {}", title, failure_message(&e))?;
        }
    }
    Ok(())
}

fn setup_logging(cli: &Cli) -> anyhow::Result<()> {
    let filter = EnvFilter::try_new(&cli.log_level)
        .with_context(|| format!("Invalid log filter: {}", cli.log_level))?;

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(io::stderr)
                .with_ansi(!cli.no_color),
        )
        .with(filter)
        .try_init()
        .context("Failed to install the log subscriber")?;

    Ok(())
}

fn run(
    library: &mut Library,
    input: impl BufRead,
    mut out: impl Write,
    interactive: bool,
) -> anyhow::Result<()> {
    writeln!(out, "{}", render_library(library))?;
    let mut lines = input.lines();
    loop {
        if interactive {
            write!(out, "> ")?;
            out.flush()?;
        }
        let Some(line) = lines.next() else {
            break;
        };
        let line = line.context("Failed to read a command")?;
        let command = match Command::parse(&line) {
            Ok(command) => command,
            Err(e) => {
                writeln!(out, "{}", failure_message(&e))?;
                continue;
            }
        };
        debug!(?command, "Command");
        match command {
            Command::Add(title) => {
                if let Err(e) = library.add_book(&title) {
                    writeln!(out, "{}", failure_message(&e))?;
                }
            }
            Command::Delete => match library.delete_book() {
                Ok(title) => writeln!(out, "Deleted \"{title}\"")?,
                Err(e) => writeln!(out, "{}", failure_message(&e))?,
            },
            Command::Show => {}
            Command::Help => {
                writeln!(out, "{HELP}")?;
                continue;
            }
            Command::Quit => break,
        }
        writeln!(out, "{}", render_library(library))?;
    }
    Ok(())
}

fn failure_message(e: &Error) -> String {
    match e {
        Error::CapacityExceeded => "Failed to add book. No space available.".to_owned(),
        Error::EmptyCollection => "Failed to delete book. No book available.".to_owned(),
        Error::EmptyTitle => "A book needs a title.".to_owned(),
        Error::UnknownCommand(word) => format!("Unknown command \"{word}\", try \"help\"."),
        e => e.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(library: &mut Library, input: &str) -> String {
        let mut out = Vec::new();
        run(library, input.as_bytes(), &mut out, false).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn session_redraws_after_each_command() {
        let mut library = Library::new(2).unwrap();
        let out = session(&mut library, "add A\nadd B\nfly\nadd C\nd\nq\nadd D\n");

        assert!(out.starts_with("books 0/2\n(empty)\nfree: 0 -> 1 -> none\n"));
        assert!(out.contains("[1:B] -> [0:A] -> none"));
        assert!(out.contains("Unknown command \"fly\", try \"help\".\n"));
        assert!(out.contains("Failed to add book. No space available."));
        assert!(out.contains("Deleted \"B\""));
        assert!(out.ends_with("Deleted \"B\"\nbooks 1/2\n[0:A] -> none\nfree: 1 -> none\n"));
        assert_eq!(library.len(), 1);
    }

    #[test]
    fn session_help_does_not_redraw() {
        let mut library = Library::new(1).unwrap();
        let out = session(&mut library, "help\n");

        assert!(out.ends_with(&format!("{HELP}\n")));
        assert_eq!(out.matches("books 0/1").count(), 1);
    }

    #[test]
    fn session_ends_at_end_of_input() {
        let mut library = Library::new(3).unwrap();
        let out = session(&mut library, "add A\ndelete\ndelete");

        assert!(out.contains("Deleted \"A\""));
        assert!(out.contains("Failed to delete book. No book available."));
        assert!(out.ends_with("books 0/3\n(empty)\nfree: 0 -> 1 -> 2 -> none\n"));
        assert!(library.is_empty());
    }

    #[test]
    fn preload_reports_titles_that_do_not_fit() {
        let mut library = Library::new(2).unwrap();
        let titles: Vec<String> = ["Dune", " ", "Emma", "Ulysses"]
            .iter()
            .map(|t| t.to_string())
            .collect();
        let mut out = Vec::new();
        preload(&mut library, &titles, &mut out).unwrap();
        let out = String::from_utf8(out).unwrap();

        assert_eq!(
            out,
            " : A book needs a title.\nUlysses: Failed to add book. No space available.\n"
        );
        let titles: Vec<_> = library.books().iter().map(|b| b.value).collect();
        assert_eq!(titles, vec!["Emma", "Dune"]);
    }
}
