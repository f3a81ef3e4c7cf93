use thiserror::Error;

use crate::term::Kind;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("Expected {expected}, but the term holds {found}")]
    WrongVariantAccess { expected: Kind, found: Kind },
    #[error("Cannot build a term from an empty list of names")]
    EmptyNameList,
    #[error("Gave up after {limit} reduction steps")]
    ReductionLimitExceeded { limit: usize },
}
pub type Result<T> = std::result::Result<T, Error>;
