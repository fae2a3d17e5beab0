//! Errors raised by the set implementations.

use std::result;
use thiserror::Error;

/// Contract violations detected by a set operation. None of them leave the set modified.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// An absent value was passed to `try_contains`, `try_insert` or `try_remove`.
    #[error("Error: method parameter is absent.")]
    InvalidArgument,
    /// `first` or `last` was called on an empty set.
    #[error("Error: set is empty.")]
    EmptyCollection,
}

pub type Result<T> = result::Result<T, Error>;
