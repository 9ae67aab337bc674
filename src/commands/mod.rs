//! Text command layer.
//!
//! Turns a line of user input into an address book operation and a reply.
//! This is the only layer that produces user-facing prose.

pub mod handlers;
pub mod parser;

pub use handlers::{describe_error, render_birthdays};
pub use parser::{parse_input, Command};

use crate::book::AddressBook;
use crate::error::ContactResult;
use chrono::NaiveDate;
use std::io::{self, BufRead, Write};
use tracing::{debug, error};

/// What the caller should do after a command ran.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Print the reply and keep reading input.
    Reply(String),
    /// Print the farewell and stop.
    Exit(String),
}

/// Run one line of input against `book`.
///
/// `today` is the reference date for the `birthdays` command.
pub fn execute(line: &str, book: &mut AddressBook, today: NaiveDate) -> Outcome {
    let Some((word, args)) = parse_input(line) else {
        return Outcome::Reply("Invalid command.".to_string());
    };

    let command = match word.parse::<Command>() {
        Ok(command) => command,
        Err(e) => {
            debug!(error = %e, "Rejected input");
            return Outcome::Reply("Invalid command.".to_string());
        }
    };

    debug!(command = %command, args = args.len(), "Dispatching command");

    let result: ContactResult<String> = match command {
        Command::Hello => Ok(handlers::hello(book)),
        Command::Add => handlers::add_contact(&args, book),
        Command::Change => handlers::change_contact(&args, book),
        Command::Phone => handlers::get_contact_phone(&args, book),
        Command::RemovePhone => handlers::remove_phone(&args, book),
        Command::Delete => handlers::delete_contact(&args, book),
        Command::All => Ok(handlers::get_all_contacts(book)),
        Command::AddBirthday => handlers::add_birthday(&args, book),
        Command::ShowBirthday => handlers::show_birthday(&args, book),
        Command::Birthdays => Ok(handlers::birthdays(book, today)),
        Command::Exit => return Outcome::Exit("Good bye!".to_string()),
    };

    match result {
        Ok(reply) => Outcome::Reply(reply),
        Err(e) => {
            debug!(command = %command, error = %e, "Command failed");
            Outcome::Reply(describe_error(&e))
        }
    }
}

/// Read commands from `input` until `exit`/`close` or end of input, writing
/// prompts and replies to `output`.
///
/// A line that cannot be read ends the session like end of input does, so the
/// caller still gets to save whatever the session changed. Only write errors
/// are returned.
pub fn run_session<R, W, F>(
    input: R,
    output: &mut W,
    book: &mut AddressBook,
    mut today: F,
) -> io::Result<()>
where
    R: BufRead,
    W: Write,
    F: FnMut() -> NaiveDate,
{
    let mut lines = input.lines();

    loop {
        write!(output, "Enter a command: ")?;
        output.flush()?;

        let line = match lines.next() {
            Some(Ok(line)) => line,
            Some(Err(e)) => {
                error!(error = %e, "Failed to read input, ending session");
                writeln!(output)?;
                break;
            }
            None => {
                writeln!(output)?;
                break;
            }
        };
        if line.trim().is_empty() {
            continue;
        }

        match execute(&line, book, today()) {
            Outcome::Reply(reply) => writeln!(output, "{}", reply)?,
            Outcome::Exit(farewell) => {
                writeln!(output, "{}", farewell)?;
                break;
            }
        }
    }

    Ok(())
}
