use thiserror::Error;

#[derive(Debug, Error)]
pub enum BookError {
    #[error("{field} cannot be blank")]
    BlankField { field: String },

    #[error("Phone number must contain exactly 10 digits.")]
    InvalidPhone { value: String },

    #[error("Invalid date format. Please use DD.MM.YYYY")]
    InvalidBirthday { value: String },

    #[error("{entity_type} not found: {id}")]
    NotFound { entity_type: String, id: String },

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

impl BookError {
    pub fn not_found(entity_type: &str, id: &str) -> Self {
        BookError::NotFound {
            entity_type: entity_type.to_string(),
            id: id.to_string(),
        }
    }

    /// True for malformed names, phones and birthdays.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            BookError::BlankField { .. }
                | BookError::InvalidPhone { .. }
                | BookError::InvalidBirthday { .. }
        )
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, BookError::NotFound { .. })
    }
}

pub type BookResult<T> = Result<T, BookError>;

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

pub type ConfigResult<T> = Result<T, ConfigError>;
