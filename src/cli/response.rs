use thiserror::Error;

use crate::error::BookError;

/// Why a command could not be carried out.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("Enter the argument for the command")]
    MissingArgument,

    #[error("Give me name and phone please.")]
    MissingNameAndPhone,

    #[error("{0}")]
    Book(#[from] BookError),
}

pub type CommandResult<T> = Result<T, CommandError>;

/// Turns a handler result into the text shown to the user.
pub fn respond(result: CommandResult<String>) -> String {
    match result {
        Ok(reply) => reply,
        Err(e) => {
            tracing::debug!(error = ?e, "command failed");
            e.to_string()
        }
    }
}
