use thiserror::Error;

#[derive(Error, Debug)]
pub enum RegistryError {
    /// A required field is missing/blank, or the contact duplicates an
    /// existing one. Re-submitting the same input will fail again.
    #[error("Invalid contact: {0}")]
    InvalidContact(String),

    /// The generator produced an identifier that is already in use. The
    /// registry never retries on its own; calling again is the caller's call.
    #[error("Identifier already in use: {0}")]
    DuplicateId(String),

    #[error("Contact not found: {0}")]
    NotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),
}

pub type Result<T> = std::result::Result<T, RegistryError>;
