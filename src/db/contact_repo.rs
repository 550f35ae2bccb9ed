use chrono::NaiveDate;
use rusqlite::{params, Connection};
use tracing::{debug, info};

use crate::error::{BookError, BookResult};
use crate::model::{AddressBook, Birthday, Record};

/// Replaces everything stored with the contents of `book`.
///
/// Runs in a single transaction: either the whole book is written or the
/// previous contents stay untouched.
pub fn save_book(conn: &mut Connection, book: &AddressBook) -> BookResult<()> {
    let tx = conn.transaction()?;

    tx.execute("DELETE FROM phones", [])?;
    tx.execute("DELETE FROM contacts", [])?;

    {
        let mut insert_contact =
            tx.prepare("INSERT INTO contacts (position, name, birthday) VALUES (?1, ?2, ?3)")?;
        let mut insert_phone = tx.prepare(
            "INSERT INTO phones (contact_name, position, number) VALUES (?1, ?2, ?3)",
        )?;

        for (position, record) in book.records().enumerate() {
            insert_contact.execute(params![
                position as i64,
                record.name(),
                record.birthday().map(|b| b.date().to_string()),
            ])?;
            for (phone_pos, phone) in record.phones().iter().enumerate() {
                insert_phone.execute(params![record.name(), phone_pos as i64, phone.as_str()])?;
            }
        }
    }

    tx.commit()?;
    info!(contacts = book.len(), "address book saved");
    Ok(())
}

/// Rebuilds the stored book. Contacts and phones come back in the order
/// they were saved; every field is validated again on the way in.
pub fn load_book(conn: &Connection) -> BookResult<AddressBook> {
    let mut stmt = conn.prepare("SELECT name, birthday FROM contacts ORDER BY position")?;
    let rows = stmt
        .query_map([], |row| {
            let name: String = row.get(0)?;
            let birthday: Option<String> = row.get(1)?;
            Ok((name, birthday))
        })?
        .collect::<Result<Vec<_>, _>>()?;

    let mut book = AddressBook::new();
    for (name, birthday) in rows {
        let mut record = Record::new(&name)?;
        for number in find_phones(conn, &name)? {
            record.add_phone(&number)?;
        }
        if let Some(text) = birthday {
            record.set_birthday(parse_stored_birthday(&text)?);
        }
        book.add_record(record);
    }

    debug!(contacts = book.len(), "address book loaded");
    Ok(book)
}

fn find_phones(conn: &Connection, name: &str) -> BookResult<Vec<String>> {
    let mut stmt =
        conn.prepare("SELECT number FROM phones WHERE contact_name = ?1 ORDER BY position")?;
    let numbers = stmt
        .query_map(params![name], |row| row.get(0))?
        .collect::<Result<Vec<String>, _>>()?;
    Ok(numbers)
}

fn parse_stored_birthday(text: &str) -> BookResult<Birthday> {
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .map(Birthday::from_date)
        .map_err(|e| BookError::Other(format!("Invalid stored birthday '{}': {}", text, e)))
}
