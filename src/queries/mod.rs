pub mod birthday_queries;

pub use birthday_queries::UpcomingBirthday;
