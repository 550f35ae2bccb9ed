use std::path::Path;

use tracing::info;

use crate::db::{self, contact_repo};
use crate::error::BookResult;
use crate::model::AddressBook;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportStats {
    pub contacts: usize,
    pub phones: usize,
    pub birthdays: usize,
}

impl ImportStats {
    fn of(book: &AddressBook) -> Self {
        Self {
            contacts: book.len(),
            phones: book.records().map(|r| r.phones().len()).sum(),
            birthdays: book.records().filter(|r| r.birthday().is_some()).count(),
        }
    }
}

/// Reads a JSON address book and stores it in the database at `db_path`.
pub fn import_json(json_path: &Path, db_path: &Path) -> BookResult<ImportStats> {
    let book = read_json(json_path)?;

    let mut conn = db::open(db_path)?;
    contact_repo::save_book(&mut conn, &book)?;

    let stats = ImportStats::of(&book);
    info!(?stats, "imported {}", json_path.display());
    Ok(stats)
}

/// Writes the database at `db_path` out as a JSON address book.
pub fn export_json(db_path: &Path, json_path: &Path) -> BookResult<ImportStats> {
    let conn = db::open(db_path)?;
    let book = contact_repo::load_book(&conn)?;
    write_json(&book, json_path)?;

    let stats = ImportStats::of(&book);
    info!(?stats, "exported to {}", json_path.display());
    Ok(stats)
}

pub fn read_json(path: &Path) -> BookResult<AddressBook> {
    let json_str = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&json_str)?)
}

pub fn write_json(book: &AddressBook, path: &Path) -> BookResult<()> {
    let json_str = serde_json::to_string_pretty(book)?;
    std::fs::write(path, json_str)?;
    Ok(())
}
