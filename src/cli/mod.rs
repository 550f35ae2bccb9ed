pub mod context;
pub mod response;
pub mod contact_commands;
pub mod birthday_commands;

use chrono::NaiveDate;
use tracing::{debug, error, warn};

use crate::config::Config;
use crate::db;
use crate::model::AddressBook;
use context::CLIContext;
use response::respond;

/// What the loop should do after a line of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Reply(String),
    Exit(String),
    Silent,
}

/// Run the interactive REPL against the configured database.
pub fn run(config: &Config) {
    let conn = match db::open(&config.db_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error opening database: {}", e);
            return;
        }
    };

    let mut ctx = match CLIContext::load(conn) {
        Ok(ctx) => ctx,
        Err(e) => {
            eprintln!("Error loading address book: {}", e);
            return;
        }
    };

    println!("Welcome to the assistant bot!");
    repl_loop(&mut ctx);

    if let Err(e) = ctx.save() {
        error!(error = %e, "failed to save address book");
        eprintln!("Error saving address book: {}", e);
    }
}

fn repl_loop(ctx: &mut CLIContext) {
    loop {
        let input = match ctx.read_line("Enter a command: ") {
            Some(s) => s,
            None => break,
        };

        let (command, args) = parse_input(&input);
        match dispatch(&command, &args, &mut ctx.book, CLIContext::today()) {
            Outcome::Reply(text) => println!("{}", text),
            Outcome::Exit(text) => {
                println!("{}", text);
                break;
            }
            Outcome::Silent => {}
        }
    }
}

/// Split a line into a lower-cased command and its arguments.
pub fn parse_input(input: &str) -> (String, Vec<&str>) {
    let mut parts = input.split_whitespace();
    match parts.next() {
        Some(command) => (command.to_lowercase(), parts.collect()),
        None => (String::new(), Vec::new()),
    }
}

/// Route one command to its handler.
pub fn dispatch(command: &str, args: &[&str], book: &mut AddressBook, today: NaiveDate) -> Outcome {
    if !command.is_empty() {
        debug!(command, args = args.len(), "dispatching");
    }

    let reply = match command {
        "" => return Outcome::Silent,
        "close" | "exit" => return Outcome::Exit("Good bye!".into()),
        "hello" => "How can I help you?".to_string(),
        "help" => HELP.trim().to_string(),

        "add" => respond(contact_commands::add_contact(args, book)),
        "change" => respond(contact_commands::change_contact(args, book)),
        "phone" => respond(contact_commands::show_phone(args, book)),
        "remove-phone" => respond(contact_commands::remove_phone(args, book)),
        "delete" => respond(contact_commands::delete_contact(args, book)),
        "all" => respond(contact_commands::show_all(book)),

        "add-birthday" => respond(birthday_commands::add_birthday(args, book)),
        "show-birthday" => respond(birthday_commands::show_birthday(args, book)),
        "birthdays" => respond(birthday_commands::birthdays(book, today)),

        other => {
            warn!(command = other, "unknown command");
            "Invalid command".to_string()
        }
    };
    Outcome::Reply(reply)
}

const HELP: &str = r#"
COMMANDS:
  hello                             Greet the bot
  add <name> <phone>                Add a contact or another phone to it
  change <name> <old> <new>         Replace one of a contact's phones
  phone <name>                      Show a contact's phones
  remove-phone <name> <phone>       Remove one of a contact's phones
  delete <name>                     Delete a contact
  all                               List all contacts
  add-birthday <name> <DD.MM.YYYY>  Set a contact's birthday
  show-birthday <name>              Show a contact's birthday
  birthdays                         Birthdays to celebrate in the next 7 days
  help                              Show this help
  close / exit                      Save and quit

Phones are exactly 10 digits."#;
