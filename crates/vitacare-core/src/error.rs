use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("invalid account type: {0}")]
    InvalidAccountType(String),

    #[error("unknown form field: {0}")]
    UnknownField(String),
}
