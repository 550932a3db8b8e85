use thiserror::Error;

/// Error type for keep-list lookups and category parsing.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormTableError {
    #[error("unknown filing category '{0}'")]
    UnknownCategory(String),
    #[error("form code '{0}' is not on the keep list")]
    UnknownForm(String),
}
