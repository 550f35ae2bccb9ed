use crate::cli::response::{CommandError, CommandResult};
use crate::error::BookError;
use crate::model::{AddressBook, Record};

/// `add <name> <phone>`: creates the contact if needed, then adds the phone.
pub fn add_contact(args: &[&str], book: &mut AddressBook) -> CommandResult<String> {
    let [name, phone] = args else {
        return Err(CommandError::MissingNameAndPhone);
    };

    match book.find_mut(name) {
        Some(record) => record.add_phone(phone)?,
        None => {
            let mut record = Record::new(name)?;
            record.add_phone(phone)?;
            book.add_record(record);
        }
    }
    Ok("Contact added".into())
}

/// `change <name> <old phone> <new phone>`
pub fn change_contact(args: &[&str], book: &mut AddressBook) -> CommandResult<String> {
    let [name, old_phone, new_phone] = args else {
        return Err(CommandError::MissingArgument);
    };

    contact_mut(book, name)?.edit_phone(old_phone, new_phone)?;
    Ok("Contact updated".into())
}

/// `phone <name>`
pub fn show_phone(args: &[&str], book: &AddressBook) -> CommandResult<String> {
    let [name] = args else {
        return Err(CommandError::MissingArgument);
    };

    let record = contact(book, name)?;
    if record.phones().is_empty() {
        return Ok("No phones saved for this contact".into());
    }
    let phones: Vec<&str> = record.phones().iter().map(|p| p.as_str()).collect();
    Ok(phones.join("; "))
}

/// `remove-phone <name> <phone>`
pub fn remove_phone(args: &[&str], book: &mut AddressBook) -> CommandResult<String> {
    let [name, phone] = args else {
        return Err(CommandError::MissingArgument);
    };

    contact_mut(book, name)?.remove_phone(phone);
    Ok("Phone removed".into())
}

/// `delete <name>`: succeeds whether or not the contact exists.
pub fn delete_contact(args: &[&str], book: &mut AddressBook) -> CommandResult<String> {
    let [name] = args else {
        return Err(CommandError::MissingArgument);
    };

    book.delete(name);
    Ok("Contact deleted".into())
}

/// `all`
pub fn show_all(book: &AddressBook) -> CommandResult<String> {
    Ok(book.to_string())
}

pub(crate) fn contact<'a>(book: &'a AddressBook, name: &str) -> CommandResult<&'a Record> {
    book.find(name)
        .ok_or_else(|| BookError::not_found("Contact", name).into())
}

pub(crate) fn contact_mut<'a>(
    book: &'a mut AddressBook,
    name: &str,
) -> CommandResult<&'a mut Record> {
    book.find_mut(name)
        .ok_or_else(|| BookError::not_found("Contact", name).into())
}
