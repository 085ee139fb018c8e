use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PaymentsError {
    #[error("unknown dashboard tab: {0}")]
    UnknownTab(String),
}
