use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::record::Record;
use crate::queries::birthday_queries::{self, UpcomingBirthday};

/// Number of days after `today` covered by [`AddressBook::upcoming_birthdays`].
pub const UPCOMING_WINDOW_DAYS: i64 = 7;

/// All contacts, one per unique name, kept in insertion order.
///
/// Records are only reachable through lookups by name, so a record's key
/// always equals its name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<Record>", into = "Vec<Record>")]
pub struct AddressBook {
    records: Vec<Record>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a record; an existing record with the same name is replaced
    /// in place.
    pub fn add_record(&mut self, record: Record) {
        match self.position_of(record.name()) {
            Some(pos) => self.records[pos] = record,
            None => self.records.push(record),
        }
    }

    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.iter().find(|r| r.name() == name)
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.iter_mut().find(|r| r.name() == name)
    }

    /// Removes the named record. Deleting an unknown name is a no-op.
    pub fn delete(&mut self, name: &str) {
        if let Some(pos) = self.position_of(name) {
            self.records.remove(pos);
        }
    }

    /// Contacts whose congratulation date falls within the next
    /// [`UPCOMING_WINDOW_DAYS`] days, `today` included.
    pub fn upcoming_birthdays(&self, today: NaiveDate) -> Vec<UpcomingBirthday> {
        birthday_queries::upcoming_birthdays(self, today, UPCOMING_WINDOW_DAYS)
    }

    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(Record::name)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn position_of(&self, name: &str) -> Option<usize> {
        self.records.iter().position(|r| r.name() == name)
    }
}

impl fmt::Display for AddressBook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.records.is_empty() {
            return write!(f, "No contacts saved.");
        }
        let lines: Vec<String> = self.records.iter().map(|r| r.to_string()).collect();
        write!(f, "{}", lines.join("\n"))
    }
}

impl From<Vec<Record>> for AddressBook {
    fn from(records: Vec<Record>) -> Self {
        let mut book = AddressBook::new();
        for record in records {
            book.add_record(record);
        }
        book
    }
}

impl From<AddressBook> for Vec<Record> {
    fn from(book: AddressBook) -> Self {
        book.records
    }
}
