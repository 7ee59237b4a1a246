use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),

    #[error("Password confirmation does not match")]
    PasswordMismatch,

    #[error("Invalid validation rule: {0}")]
    Schema(#[from] regex::Error),

    #[error("Character class added to {0} before its pattern")]
    MissingPattern(&'static str),

    #[error("Failed to read avatar file: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Request timed out")]
    Timeout,

    #[error("Unexpected status: {0}")]
    Status(u16),

    #[error("Malformed response: {0}")]
    Decode(String),

    #[error("Invalid url: {0}")]
    InvalidUrl(String),
}
