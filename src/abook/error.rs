use thiserror::Error;

#[derive(Error, Debug)]
pub enum AbookError {
    /// Malformed phone number or any other rejected argument value.
    #[error("{0}")]
    Validation(String),

    /// Not `dd-mm-yyyy`, or not a real calendar date.
    #[error("Invalid birthday date. Please enter date format dd-mm-yyyy")]
    InvalidBirthday,

    #[error("No contact {0} in address book")]
    NotFound(String),

    #[error("{0}")]
    Argument(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),
}

pub type Result<T> = std::result::Result<T, AbookError>;
