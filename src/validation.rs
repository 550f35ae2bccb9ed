use chrono::NaiveDate;

use crate::error::{BookError, BookResult};

/// Text format of a birthday, e.g. `15.03.1990`.
pub const BIRTHDAY_FORMAT: &str = "%d.%m.%Y";

const PHONE_DIGITS: usize = 10;

/// Validates that a string is not blank (empty or whitespace-only).
/// Returns the trimmed string on success.
pub fn non_blank(value: &str, field: &str) -> BookResult<String> {
    let trimmed = value.trim().to_string();
    if trimmed.is_empty() {
        Err(BookError::BlankField {
            field: field.to_string(),
        })
    } else {
        Ok(trimmed)
    }
}

/// Validates a phone number: exactly ten ASCII digits, nothing else.
pub fn ten_digits(value: &str) -> BookResult<String> {
    if value.len() == PHONE_DIGITS && value.bytes().all(|b| b.is_ascii_digit()) {
        Ok(value.to_string())
    } else {
        Err(BookError::InvalidPhone {
            value: value.to_string(),
        })
    }
}

/// Parses a `DD.MM.YYYY` birthday into a calendar date.
///
/// The shape is checked strictly (zero-padded day and month, four-digit
/// year) so that formatting the result with [`BIRTHDAY_FORMAT`] gives back
/// the input text. Impossible dates such as `30.02.2001` are rejected.
pub fn parse_birthday(value: &str) -> BookResult<NaiveDate> {
    let invalid = || BookError::InvalidBirthday {
        value: value.to_string(),
    };

    let bytes = value.as_bytes();
    let well_formed = bytes.len() == 10
        && bytes[2] == b'.'
        && bytes[5] == b'.'
        && bytes
            .iter()
            .enumerate()
            .all(|(i, b)| i == 2 || i == 5 || b.is_ascii_digit());
    if !well_formed {
        return Err(invalid());
    }

    NaiveDate::parse_from_str(value, BIRTHDAY_FORMAT).map_err(|_| invalid())
}
