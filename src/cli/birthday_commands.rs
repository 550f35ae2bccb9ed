use chrono::NaiveDate;

use crate::cli::contact_commands::{contact, contact_mut};
use crate::cli::response::{CommandError, CommandResult};
use crate::model::AddressBook;

/// `add-birthday <name> <DD.MM.YYYY>`
pub fn add_birthday(args: &[&str], book: &mut AddressBook) -> CommandResult<String> {
    let [name, birthday] = args else {
        return Err(CommandError::MissingArgument);
    };

    contact_mut(book, name)?.add_birthday(birthday)?;
    Ok("Birthday added".into())
}

/// `show-birthday <name>`
pub fn show_birthday(args: &[&str], book: &AddressBook) -> CommandResult<String> {
    let [name] = args else {
        return Err(CommandError::MissingArgument);
    };

    match contact(book, name)?.birthday() {
        Some(birthday) => Ok(birthday.to_string()),
        None => Ok("No birthday saved for this contact".into()),
    }
}

/// `birthdays`: who to congratulate over the coming week.
pub fn birthdays(book: &AddressBook, today: NaiveDate) -> CommandResult<String> {
    let upcoming = book.upcoming_birthdays(today);
    if upcoming.is_empty() {
        return Ok("No birthdays in the next 7 days.".into());
    }

    let lines: Vec<String> = upcoming
        .iter()
        .map(|u| format!("{}: {}", u.name, u.date_text()))
        .collect();
    Ok(lines.join("\n"))
}
