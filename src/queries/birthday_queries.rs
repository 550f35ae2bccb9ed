use chrono::{Datelike, Duration, NaiveDate, Weekday};

use crate::model::{AddressBook, Birthday};
use crate::validation::BIRTHDAY_FORMAT;

/// A contact to congratulate and the day to do it on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcomingBirthday {
    pub name: String,
    pub date: NaiveDate,
}

impl UpcomingBirthday {
    /// The congratulation date as `DD.MM.YYYY`.
    pub fn date_text(&self) -> String {
        self.date.format(BIRTHDAY_FORMAT).to_string()
    }
}

/// The next congratulation date for `birthday` on or after `today`.
///
/// The birthday is moved into `today`'s year, or the following year if that
/// day has already passed, then pushed off a weekend onto Monday. Returns
/// `None` when the day does not exist in the target year (29 February in a
/// common year); no substitute date is chosen.
pub fn congratulation_date(birthday: &Birthday, today: NaiveDate) -> Option<NaiveDate> {
    let born = birthday.date();

    let mut next = born.with_year(today.year())?;
    if next < today {
        next = born.with_year(today.year() + 1)?;
    }

    Some(move_to_monday_if_weekend(next))
}

/// Saturday and Sunday roll forward to the following Monday.
pub fn move_to_monday_if_weekend(date: NaiveDate) -> NaiveDate {
    match date.weekday() {
        Weekday::Sat => date + Duration::days(2),
        Weekday::Sun => date + Duration::days(1),
        _ => date,
    }
}

/// Contacts whose congratulation date lies in `[today, today + window_days]`.
///
/// The window is checked after the weekend shift, so a weekend birthday near
/// the end of the window can land past it and be left out. Results follow
/// the book's order.
pub fn upcoming_birthdays(
    book: &AddressBook,
    today: NaiveDate,
    window_days: i64,
) -> Vec<UpcomingBirthday> {
    let end = today + Duration::days(window_days);

    book.records()
        .filter_map(|record| {
            let date = congratulation_date(record.birthday()?, today)?;
            (today <= date && date <= end).then(|| UpcomingBirthday {
                name: record.name().to_string(),
                date,
            })
        })
        .collect()
}
