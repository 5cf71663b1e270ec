// lazydata - Error types for structure operations
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Error types for partial operations on the persistent structures.
//!
//! Only two things can go wrong at the API boundary: asking an empty
//! structure for an element it does not have, and positional access out of
//! bounds. Internal invariants (heap order, the leftist rank property, the
//! banker's queue balance) are maintained by construction and are never
//! reported as runtime errors.

use std::fmt;

/// Result type for structure operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when operating on a persistent structure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The structure has no elements to give (head of an empty list,
    /// find-min of an empty heap).
    EmptyStructure {
        /// The operation that was attempted, e.g. `"head"`.
        operation: &'static str,
    },
    /// Positional access outside the structure's bounds.
    IndexOutOfRange { index: usize, length: usize },
}

impl Error {
    /// Create an empty-structure error for a named operation.
    pub fn empty(operation: &'static str) -> Self {
        Error::EmptyStructure { operation }
    }

    /// Create an index-out-of-range error.
    pub fn index(index: usize, length: usize) -> Self {
        Error::IndexOutOfRange { index, length }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::EmptyStructure { operation } => {
                write!(f, "{} on an empty structure", operation)
            }
            Error::IndexOutOfRange { index, length } => {
                write!(f, "index out of range: {} (length: {})", index, length)
            }
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_empty() {
        let err = Error::empty("head");
        assert_eq!(format!("{}", err), "head on an empty structure");
    }

    #[test]
    fn test_display_index() {
        let err = Error::index(5, 3);
        assert_eq!(format!("{}", err), "index out of range: 5 (length: 3)");
    }
}
