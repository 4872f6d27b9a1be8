//! Interactive REPL for the address book
//!
//! Each input line splits into a case-insensitive command token and argument
//! tokens. Handlers return `RolodexResult<String>`; the dispatch boundary
//! converts any error into its one-line display message, so no user mistake
//! ends the session. The book is persisted after every mutating command.

use std::io::{BufRead, Write};

use chrono::{Local, NaiveDate};

use crate::display::{format_book, format_record, format_upcoming};
use crate::error::{RolodexError, RolodexResult};
use crate::models::{AddressBook, Record};
use crate::storage::BookRepository;

const GREETING: &str = "Welcome to the assistant bot! Type 'help' for commands.";
const PROMPT: &str = "Enter a command: ";

const HELP_TEXT: &str = "Available commands:
    - add [name] [phone] - Add a new contact or phone
    - change [name] [old phone] [new phone] - Change existing phone
    - phone [name] - Show contact's phones
    - all - Show all contacts
    - delete [name] - Delete a contact
    - add-birthday [name] [DD.MM.YYYY] - Add birthday
    - show-birthday [name] - Show contact's birthday
    - birthdays [days] - Show upcoming birthdays
    - hello - Get a greeting
    - help - Show this help
    - exit/close - Exit the program";

/// Split an input line into a lowercased command token and argument tokens
pub fn parse_input(line: &str) -> (String, Vec<&str>) {
    let mut parts = line.split_whitespace();
    let command = parts.next().unwrap_or("").to_lowercase();
    (command, parts.collect())
}

/// Outcome of handling one input line
#[derive(Debug, PartialEq, Eq)]
pub enum Response {
    /// Text to print; the session continues
    Message(String),
    /// Blank input; nothing to print
    Empty,
    /// Farewell text; the session ends
    Exit(String),
}

/// The interactive session: the in-memory book plus its repository
pub struct Repl {
    book: AddressBook,
    repo: BookRepository,
    lookahead_days: u32,
}

impl Repl {
    /// Load the persisted book and build a session around it
    pub fn new(repo: BookRepository, lookahead_days: u32) -> RolodexResult<Self> {
        let book = repo.load()?;
        Ok(Self {
            book,
            repo,
            lookahead_days,
        })
    }

    /// Read-only view of the current book
    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    /// Handle one input line, converting any handler error to its message
    pub fn handle_line(&mut self, line: &str) -> Response {
        let (command, args) = parse_input(line);

        if command.is_empty() {
            return Response::Empty;
        }

        if command == "exit" || command == "close" {
            // Persist before leaving; a failed save still ends the session
            if let Err(e) = self.repo.save(&self.book) {
                return Response::Exit(format!("{}\nGood bye!", e));
            }
            return Response::Exit("Good bye!".to_string());
        }

        let today = Local::now().date_naive();
        let result = match command.as_str() {
            "add" => self.add_contact(&args),
            "change" => self.change_contact(&args),
            "phone" => self.show_phone(&args),
            "all" => Ok(format_book(&self.book)),
            "delete" => self.delete_contact(&args),
            "add-birthday" => self.add_birthday(&args, today),
            "show-birthday" => self.show_birthday(&args),
            "birthdays" => self.birthdays(&args, today),
            "hello" => Ok("How can I help you?".to_string()),
            "help" => Ok(HELP_TEXT.to_string()),
            _ => Ok("Invalid command. Type 'help' for available commands.".to_string()),
        };

        match result {
            Ok(message) => Response::Message(message),
            Err(e) => Response::Message(e.to_string()),
        }
    }

    /// Run the loop over the given reader/writer until `exit`/`close` or EOF
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> RolodexResult<()> {
        writeln!(output, "{}", GREETING)?;

        let mut lines = input.lines();
        loop {
            write!(output, "{}", PROMPT)?;
            output.flush()?;

            let line = match lines.next() {
                Some(line) => line?,
                None => break,
            };
            match self.handle_line(&line) {
                Response::Message(message) => writeln!(output, "{}", message)?,
                Response::Empty => {}
                Response::Exit(message) => {
                    writeln!(output, "{}", message)?;
                    return Ok(());
                }
            }
        }

        // EOF without an explicit exit; persist what we have
        self.repo.save(&self.book)
    }

    fn persist(&self) -> RolodexResult<()> {
        self.repo.save(&self.book)
    }

    fn add_contact(&mut self, args: &[&str]) -> RolodexResult<String> {
        let [name, phone] = take_args::<2>(args)?;

        let message = match self.book.find_mut(name) {
            Some(record) => {
                record.add_phone(phone)?;
                "Contact updated."
            }
            None => {
                let mut record = Record::new(name)?;
                record.add_phone(phone)?;
                self.book.add_record(record);
                "Contact added."
            }
        };
        self.persist()?;
        Ok(message.to_string())
    }

    fn change_contact(&mut self, args: &[&str]) -> RolodexResult<String> {
        let [name, old_phone, new_phone] = take_args::<3>(args)?;

        let record = self
            .book
            .find_mut(name)
            .ok_or_else(|| RolodexError::contact_not_found(name))?;
        record.edit_phone(old_phone, new_phone)?;
        self.persist()?;
        Ok("Phone number updated.".to_string())
    }

    fn show_phone(&self, args: &[&str]) -> RolodexResult<String> {
        let [name] = take_args::<1>(args)?;

        let record = self
            .book
            .find(name)
            .ok_or_else(|| RolodexError::contact_not_found(name))?;
        Ok(format_record(record))
    }

    fn delete_contact(&mut self, args: &[&str]) -> RolodexResult<String> {
        let [name] = take_args::<1>(args)?;

        self.book.delete(name)?;
        self.persist()?;
        Ok("Contact deleted.".to_string())
    }

    fn add_birthday(&mut self, args: &[&str], today: NaiveDate) -> RolodexResult<String> {
        let [name, birthday] = take_args::<2>(args)?;

        let record = self
            .book
            .find_mut(name)
            .ok_or_else(|| RolodexError::contact_not_found(name))?;
        record.set_birthday(birthday, today)?;
        self.persist()?;
        Ok("Birthday added.".to_string())
    }

    fn show_birthday(&self, args: &[&str]) -> RolodexResult<String> {
        let [name] = take_args::<1>(args)?;

        let record = self
            .book
            .find(name)
            .ok_or_else(|| RolodexError::contact_not_found(name))?;
        Ok(match record.birthday() {
            Some(birthday) => format!("{}'s birthday: {}", name, birthday),
            None => format!("{} has no birthday set.", name),
        })
    }

    fn birthdays(&self, args: &[&str], today: NaiveDate) -> RolodexResult<String> {
        let window = match args.first() {
            Some(raw) => raw.parse::<i64>().map_err(|_| {
                RolodexError::Validation(format!("Day count must be a number, got '{}'", raw))
            })?,
            None => i64::from(self.lookahead_days),
        };
        Ok(format_upcoming(&self.book.upcoming_birthdays(window, today)))
    }
}

/// Take exactly N leading arguments, or fail with the missing-argument error
fn take_args<'a, const N: usize>(args: &[&'a str]) -> RolodexResult<[&'a str; N]> {
    if args.len() < N {
        return Err(RolodexError::MissingArguments);
    }
    let mut taken = [""; N];
    taken.copy_from_slice(&args[..N]);
    Ok(taken)
}
