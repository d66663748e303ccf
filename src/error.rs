//! Error handling for the JSON core.
//!
//! Every failure in the crate is one variant of a single closed [`Error`]
//! enumeration. Variants carry the offending text and, where the failing
//! stage knows it, the byte offset into the original document. [`Error::kind`]
//! classifies each variant by the stage that produces it, so callers that only
//! care about the broad category (lexical, grammatical, type, range) can
//! dispatch on [`ErrorKind`] without matching every variant.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type JsonResult<T> = Result<T, Error>;

/// Broad classification of an [`Error`] by the stage that raised it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed token at the character-stream level.
    Lex,
    /// Token sequence violates the JSON grammar.
    Syntax,
    /// Typed accessor invoked against a value of a different tag.
    Type,
    /// Positional or keyed access out of bounds/absent.
    Range,
}

/// An error raised while tokenizing, parsing, or accessing a JSON value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A character that cannot start any token.
    #[error("unexpected start sequence: {found} at offset {offset}")]
    UnexpectedStartSequence {
        /// The offending character.
        found: char,
        /// Byte offset of the character.
        offset: usize,
    },

    /// A backslash escape other than `\/ \" \\ \b \f \n \r \t`.
    #[error("unrecognized escape sequence: \\{found} at offset {offset}")]
    UnrecognizedEscape {
        /// The character following the backslash.
        found: char,
        /// Byte offset of the escape character.
        offset: usize,
    },

    /// A quoted string with no closing quote before end of input.
    #[error("expected closing quote for string starting at offset {offset}")]
    UnterminatedString {
        /// Byte offset of the opening quote.
        offset: usize,
    },

    /// A keyword literal that is not exactly `true`, `false`, `null`
    /// or `undefined`.
    #[error("unexpected token: {text} at offset {offset}")]
    InvalidLiteral {
        /// The captured literal text.
        text: String,
        /// Byte offset of the literal's first character.
        offset: usize,
    },

    /// Input document larger than the configured limit.
    #[error("input is {size} bytes, limit is {limit}")]
    InputTooLarge {
        /// Actual input size in bytes.
        size: u64,
        /// Configured maximum.
        limit: u64,
    },

    /// A token of the wrong kind where the grammar requires a specific one.
    #[error("unexpected token: {text} at offset {offset}")]
    UnexpectedToken {
        /// Literal text of the offending token.
        text: String,
        /// Byte offset of the token.
        offset: usize,
    },

    /// The token list ended while a production still needed input.
    #[error("unexpected end of data")]
    UnexpectedEnd,

    /// An object member name that already exists in the same object.
    #[error("duplicate member: {key} at offset {offset}")]
    DuplicateMember {
        /// The repeated member name.
        key: String,
        /// Byte offset of the repeated key token.
        offset: usize,
    },

    /// Number token text that does not parse as a number.
    #[error("invalid number literal: {text} at offset {offset}")]
    InvalidNumber {
        /// The raw number text.
        text: String,
        /// Byte offset of the number token.
        offset: usize,
    },

    /// Tokens remaining after the top-level value was parsed.
    #[error("unexpected data after document at offset {offset}")]
    TrailingData {
        /// Byte offset of the first trailing token.
        offset: usize,
    },

    /// Containers nested deeper than the configured limit.
    #[error("nesting depth exceeds {limit} levels")]
    NestingTooDeep {
        /// Configured maximum depth.
        limit: u64,
    },

    /// A typed accessor used against a value of a different tag.
    #[error("expected {expected}, found {actual}")]
    TypeMismatch {
        /// Type name the accessor requires.
        expected: &'static str,
        /// Type name of the actual value.
        actual: &'static str,
    },

    /// Keyed object access for a member that does not exist.
    #[error("no member named {key}")]
    KeyNotFound {
        /// The requested member name.
        key: String,
    },

    /// Positional array access past the end.
    #[error("index {index} out of range for array of length {len}")]
    IndexOutOfRange {
        /// The requested index.
        index: usize,
        /// Length of the array.
        len: usize,
    },
}

impl Error {
    /// Classify this error by the stage that raised it.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::UnexpectedStartSequence { .. }
            | Error::UnrecognizedEscape { .. }
            | Error::UnterminatedString { .. }
            | Error::InvalidLiteral { .. }
            | Error::InputTooLarge { .. } => ErrorKind::Lex,
            Error::UnexpectedToken { .. }
            | Error::UnexpectedEnd
            | Error::DuplicateMember { .. }
            | Error::InvalidNumber { .. }
            | Error::TrailingData { .. }
            | Error::NestingTooDeep { .. } => ErrorKind::Syntax,
            Error::TypeMismatch { .. } => ErrorKind::Type,
            Error::KeyNotFound { .. } | Error::IndexOutOfRange { .. } => ErrorKind::Range,
        }
    }
}
