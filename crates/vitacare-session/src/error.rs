use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("no user is signed in")]
    NotSignedIn,
}
