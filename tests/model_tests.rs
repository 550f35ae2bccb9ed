use addressbook::model::*;

fn record_with_phones(name: &str, phones: &[&str]) -> Record {
    let mut record = Record::new(name).unwrap();
    for phone in phones {
        record.add_phone(phone).unwrap();
    }
    record
}

fn phone_strs(record: &Record) -> Vec<&str> {
    record.phones().iter().map(|p| p.as_str()).collect()
}

// ==========================================================================
// RECORD TESTS
// ==========================================================================

#[test]
fn record_new_starts_empty() {
    let record = Record::new("Alice").unwrap();
    assert_eq!(record.name(), "Alice");
    assert!(record.phones().is_empty());
    assert!(record.birthday().is_none());
}

#[test]
fn record_new_rejects_blank_name() {
    let err = Record::new("").unwrap_err();
    assert!(err.is_validation());
    assert!(Record::new("   ").unwrap_err().is_validation());
}

#[test]
fn add_phone_appends_in_order_and_keeps_duplicates() {
    let record = record_with_phones("Alice", &["1111111111", "2222222222", "1111111111"]);
    assert_eq!(
        phone_strs(&record),
        vec!["1111111111", "2222222222", "1111111111"]
    );
}

#[test]
fn add_phone_rejects_short_number_without_mutation() {
    let mut record = record_with_phones("Alice", &["1111111111"]);
    let err = record.add_phone("12345").unwrap_err();
    assert!(err.is_validation());
    assert_eq!(phone_strs(&record), vec!["1111111111"]);
}

#[test]
fn find_phone_matches_exactly() {
    let record = record_with_phones("Alice", &["1111111111", "2222222222"]);
    assert_eq!(record.find_phone("2222222222").unwrap().as_str(), "2222222222");
    assert!(record.find_phone("222222222").is_none());
    assert!(record.find_phone("3333333333").is_none());
}

#[test]
fn remove_phone_removes_first_match_only() {
    let mut record = record_with_phones("Alice", &["1111111111", "2222222222", "1111111111"]);
    record.remove_phone("1111111111");
    assert_eq!(phone_strs(&record), vec!["2222222222", "1111111111"]);
}

#[test]
fn remove_missing_phone_is_noop() {
    let mut record = record_with_phones("Alice", &["1111111111"]);
    record.remove_phone("9999999999");
    assert_eq!(phone_strs(&record), vec!["1111111111"]);
}

#[test]
fn edit_phone_keeps_position() {
    let mut record = record_with_phones("Alice", &["1111111111", "2222222222", "3333333333"]);
    record.edit_phone("2222222222", "4444444444").unwrap();
    assert_eq!(
        phone_strs(&record),
        vec!["1111111111", "4444444444", "3333333333"]
    );
}

#[test]
fn edit_missing_phone_is_not_found_and_leaves_phones() {
    let mut record = record_with_phones("Alice", &["1111111111"]);
    let err = record.edit_phone("9999999999", "4444444444").unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(phone_strs(&record), vec!["1111111111"]);
}

#[test]
fn edit_phone_to_invalid_number_fails_without_mutation() {
    let mut record = record_with_phones("Alice", &["1111111111"]);
    let err = record.edit_phone("1111111111", "abc").unwrap_err();
    assert!(err.is_validation());
    assert_eq!(phone_strs(&record), vec!["1111111111"]);
}

#[test]
fn add_birthday_overwrites() {
    let mut record = Record::new("Alice").unwrap();
    record.add_birthday("15.03.1990").unwrap();
    record.add_birthday("16.04.1991").unwrap();
    assert_eq!(record.birthday().unwrap().to_string(), "16.04.1991");
}

#[test]
fn add_invalid_birthday_keeps_previous() {
    let mut record = Record::new("Alice").unwrap();
    record.add_birthday("15.03.1990").unwrap();
    assert!(record.add_birthday("31.04.1990").unwrap_err().is_validation());
    assert!(record.add_birthday("1990-03-15").unwrap_err().is_validation());
    assert_eq!(record.birthday().unwrap().to_string(), "15.03.1990");
}

#[test]
fn record_display_with_everything() {
    let mut record = record_with_phones("Alice", &["1111111111", "2222222222"]);
    record.add_birthday("15.03.1990").unwrap();
    assert_eq!(
        record.to_string(),
        "Contact name: Alice, phones: 1111111111; 2222222222, birthday: 15.03.1990"
    );
}

#[test]
fn record_display_uses_dashes_when_empty() {
    let record = Record::new("Bob").unwrap();
    assert_eq!(record.to_string(), "Contact name: Bob, phones: -, birthday: -");
}

// ==========================================================================
// ADDRESS BOOK TESTS
// ==========================================================================

#[test]
fn add_and_find_record() {
    let mut book = AddressBook::new();
    book.add_record(record_with_phones("Alice", &["1111111111"]));

    let found = book.find("Alice").unwrap();
    assert_eq!(found.name(), "Alice");
    assert!(book.find("alice").is_none());
    assert!(book.find("Bob").is_none());
}

#[test]
fn add_record_overwrites_same_name() {
    let mut book = AddressBook::new();
    book.add_record(record_with_phones("Alice", &["1111111111"]));
    book.add_record(record_with_phones("Bob", &["2222222222"]));
    book.add_record(record_with_phones("Alice", &["3333333333"]));

    assert_eq!(book.len(), 2);
    assert_eq!(phone_strs(book.find("Alice").unwrap()), vec!["3333333333"]);
    assert_eq!(book.names().collect::<Vec<_>>(), vec!["Alice", "Bob"]);
}

#[test]
fn find_mut_edits_in_place() {
    let mut book = AddressBook::new();
    book.add_record(Record::new("Alice").unwrap());
    book.find_mut("Alice").unwrap().add_phone("1111111111").unwrap();
    assert_eq!(phone_strs(book.find("Alice").unwrap()), vec!["1111111111"]);
}

#[test]
fn delete_removes_record() {
    let mut book = AddressBook::new();
    book.add_record(Record::new("Alice").unwrap());
    book.add_record(Record::new("Bob").unwrap());
    book.delete("Alice");
    assert!(book.find("Alice").is_none());
    assert_eq!(book.len(), 1);
}

#[test]
fn delete_missing_name_leaves_book_unchanged() {
    let mut book = AddressBook::new();
    book.add_record(record_with_phones("Alice", &["1111111111"]));
    let before = book.clone();
    book.delete("Nobody");
    assert_eq!(book, before);
}

#[test]
fn book_display_empty() {
    assert_eq!(AddressBook::new().to_string(), "No contacts saved.");
}

#[test]
fn book_display_lists_in_insertion_order() {
    let mut book = AddressBook::new();
    book.add_record(record_with_phones("Zed", &["1111111111"]));
    book.add_record(Record::new("Amy").unwrap());
    assert_eq!(
        book.to_string(),
        "Contact name: Zed, phones: 1111111111, birthday: -\n\
         Contact name: Amy, phones: -, birthday: -"
    );
}

// ==========================================================================
// SERDE TESTS
// ==========================================================================

#[test]
fn book_serializes_as_record_list() {
    let mut book = AddressBook::new();
    let mut alice = record_with_phones("Alice", &["1111111111"]);
    alice.add_birthday("15.03.1990").unwrap();
    book.add_record(alice);

    let json: serde_json::Value = serde_json::to_value(&book).unwrap();
    assert_eq!(
        json,
        serde_json::json!([
            { "name": "Alice", "phones": ["1111111111"], "birthday": "15.03.1990" }
        ])
    );
}

#[test]
fn book_deserialization_rebuilds_and_validates() {
    let book: AddressBook = serde_json::from_str(
        r#"[{"name": "Alice", "phones": ["1111111111"]}, {"name": "Bob", "birthday": null}]"#,
    )
    .unwrap();
    assert_eq!(book.len(), 2);
    assert!(book.find("Bob").unwrap().phones().is_empty());

    let bad_phone: Result<AddressBook, _> =
        serde_json::from_str(r#"[{"name": "Alice", "phones": ["123"]}]"#);
    assert!(bad_phone.is_err());

    let blank_name: Result<AddressBook, _> = serde_json::from_str(r#"[{"name": "  "}]"#);
    assert!(blank_name.is_err());
}
