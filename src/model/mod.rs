pub mod phone;
pub mod birthday;
pub mod record;
pub mod book;

// Re-exports for convenience
pub use phone::PhoneNumber;
pub use birthday::Birthday;
pub use record::Record;
pub use book::{AddressBook, UPCOMING_WINDOW_DAYS};
