use chrono::Local;
use rusqlite::Connection;
use std::io::{self, Write};

use crate::db::contact_repo;
use crate::error::BookResult;
use crate::model::AddressBook;

/// The open database and the book loaded from it.
pub struct CLIContext {
    pub conn: Connection,
    pub book: AddressBook,
}

impl CLIContext {
    /// Loads the stored book; a fresh database yields an empty one.
    pub fn load(conn: Connection) -> BookResult<Self> {
        let book = contact_repo::load_book(&conn)?;
        Ok(Self { conn, book })
    }

    /// Writes the whole book back to the database.
    pub fn save(&mut self) -> BookResult<()> {
        contact_repo::save_book(&mut self.conn, &self.book)
    }

    /// Prompt and read a line from stdin. Returns None on EOF.
    pub fn read_line(&self, prompt: &str) -> Option<String> {
        print!("{}", prompt);
        io::stdout().flush().ok();
        let mut buf = String::new();
        match io::stdin().read_line(&mut buf) {
            Ok(0) => None,
            Ok(_) => Some(buf.trim_end_matches('\n').trim_end_matches('\r').to_string()),
            Err(_) => None,
        }
    }

    pub fn today() -> chrono::NaiveDate {
        Local::now().date_naive()
    }
}
