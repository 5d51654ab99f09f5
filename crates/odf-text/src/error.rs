/*
 * error.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Error types for turning untyped markup data into text tokens.

use thiserror::Error;

/// Errors raised where element names or attribute values become tokens.
///
/// Encoding plain text never fails; these only show up when reading
/// tokens back from a stored representation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// An element name that does not belong to the token vocabulary.
    #[error("Invalid token kind: <{tag}> is not a text token element")]
    InvalidTokenKind { tag: String },

    /// A space count attribute that is not a positive integer.
    #[error("Malformed count attribute: {value:?} is not a positive integer")]
    MalformedCountAttribute { value: String },
}

/// Result type for token operations.
pub type Result<T> = std::result::Result<T, Error>;
