use serde::{Deserialize, Serialize};
use std::fmt;

use super::birthday::Birthday;
use super::phone::PhoneNumber;
use crate::error::{BookError, BookResult};
use crate::validation;

/// One contact: a name, its phone numbers in entry order, and an optional
/// birthday. The name is fixed at construction; it is the contact's key
/// inside an [`AddressBook`](super::AddressBook).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawRecord")]
pub struct Record {
    name: String,
    phones: Vec<PhoneNumber>,
    birthday: Option<Birthday>,
}

impl Record {
    pub fn new(name: &str) -> BookResult<Self> {
        Ok(Self {
            name: validation::non_blank(name, "name")?,
            phones: Vec::new(),
            birthday: None,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Appends a phone number. Duplicates are kept.
    pub fn add_phone(&mut self, value: &str) -> BookResult<()> {
        let phone = PhoneNumber::new(value)?;
        self.phones.push(phone);
        Ok(())
    }

    pub fn find_phone(&self, value: &str) -> Option<&PhoneNumber> {
        self.phones.iter().find(|p| p.as_str() == value)
    }

    /// Removes the first phone equal to `value`; does nothing if absent.
    pub fn remove_phone(&mut self, value: &str) {
        if let Some(pos) = self.position_of(value) {
            self.phones.remove(pos);
        }
    }

    /// Replaces the first phone equal to `old`, keeping its position.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> BookResult<()> {
        let pos = self
            .position_of(old)
            .ok_or_else(|| BookError::not_found("Phone", old))?;
        self.phones[pos] = PhoneNumber::new(new)?;
        Ok(())
    }

    /// Parses and stores a `DD.MM.YYYY` birthday, replacing any previous one.
    pub fn add_birthday(&mut self, value: &str) -> BookResult<()> {
        self.birthday = Some(Birthday::parse(value)?);
        Ok(())
    }

    pub fn set_birthday(&mut self, birthday: Birthday) {
        self.birthday = Some(birthday);
    }

    fn position_of(&self, value: &str) -> Option<usize> {
        self.phones.iter().position(|p| p.as_str() == value)
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones = if self.phones.is_empty() {
            "-".to_string()
        } else {
            self.phones
                .iter()
                .map(PhoneNumber::as_str)
                .collect::<Vec<_>>()
                .join("; ")
        };
        let birthday = self
            .birthday
            .map(|b| b.to_string())
            .unwrap_or_else(|| "-".into());
        write!(
            f,
            "Contact name: {}, phones: {}, birthday: {}",
            self.name, phones, birthday
        )
    }
}

// Deserialized records go through `Record::new` so a stored blank name is
// rejected the same way user input is.
#[derive(Deserialize)]
struct RawRecord {
    name: String,
    #[serde(default)]
    phones: Vec<PhoneNumber>,
    #[serde(default)]
    birthday: Option<Birthday>,
}

impl TryFrom<RawRecord> for Record {
    type Error = BookError;

    fn try_from(raw: RawRecord) -> BookResult<Self> {
        let mut record = Record::new(&raw.name)?;
        record.phones = raw.phones;
        record.birthday = raw.birthday;
        Ok(record)
    }
}
