//! Defines [`WktError`], representing all errors returned by this crate.

use std::fmt::Debug;

use thiserror::Error;

/// Enum with all errors in this crate.
///
/// A failed parse always yields exactly one of these; no partial geometry is ever returned.
#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum WktError {
    /// A character that is not whitespace, a parenthesis, a comma, a letter or part of a number.
    #[error("Unexpected character `{character}` at position {position}")]
    Lexical {
        /// The offending character.
        character: char,
        /// Byte offset of the character in the input.
        position: usize,
    },

    /// A run of numeric characters that does not form a valid floating point number.
    #[error("Invalid number `{literal}` at position {position}")]
    InvalidNumber {
        /// The consumed characters.
        literal: String,
        /// Byte offset of the first character.
        position: usize,
    },

    /// A token that does not fit the grammar production being parsed.
    #[error("Unexpected `{value}` at position {position} in `{wkt}`")]
    Syntax {
        /// Literal value of the offending token. Empty for the end of input.
        value: String,
        /// Byte offset of the offending token.
        position: usize,
        /// The complete input string.
        wkt: String,
    },

    /// The geometry keyword is not one of the recognized WKT geometry types.
    #[error("Invalid geometry type: {0}")]
    InvalidGeometryType(String),

    /// Geometry collections nested deeper than the configured limit.
    #[error("Nesting depth limit of {limit} exceeded at position {position}")]
    NestingDepth {
        /// The configured maximum depth.
        limit: usize,
        /// Byte offset of the collection that crossed the limit.
        position: usize,
    },
}

impl WktError {
    /// Byte offset in the input the error refers to, if any.
    pub fn position(&self) -> Option<usize> {
        match self {
            WktError::Lexical { position, .. }
            | WktError::InvalidNumber { position, .. }
            | WktError::Syntax { position, .. }
            | WktError::NestingDepth { position, .. } => Some(*position),
            WktError::InvalidGeometryType(_) => None,
        }
    }
}

/// Crate-specific result type.
pub type Result<T> = std::result::Result<T, WktError>;
