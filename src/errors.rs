//! Typed errors for tree operations, kind lookup, and the text codec.
//!
//! Every failure is recoverable and leaves the operated-on value unchanged.

use thiserror::Error;

/// Value text rejected by a kind's parser.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("cannot parse {input:?} as {kind}: {reason}")]
pub struct ParseValueError {
    /// Marker name of the kind that rejected the input.
    pub kind: &'static str,
    pub input: String,
    pub reason: String,
}

impl ParseValueError {
    pub fn new(kind: &'static str, input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            kind,
            input: input.into(),
            reason: reason.into(),
        }
    }
}

/// Result type for value parsing.
pub type ParseResult<T> = Result<T, ParseValueError>;

/// Kind name absent from the registry.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown value kind: {0:?}")]
pub struct UnknownKindError(pub String);

/// Rank outside `0..len`.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("index {index} out of bounds for length {len}")]
pub struct IndexError {
    pub index: usize,
    pub len: usize,
}

/// Result type for rank-addressed operations.
pub type IndexResult<T> = Result<T, IndexError>;

/// Serialization failures.
#[derive(Error, Debug)]
pub enum EncodeError {
    #[error("cannot serialize non-empty tree with unknown kind {kind:?}")]
    UnknownKind { kind: String },

    #[error("write failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for serialization.
pub type EncodeResult<T> = Result<T, EncodeError>;

/// Deserialization failures. Decoding is all-or-nothing; no partially
/// filled tree is ever returned.
#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("missing kind marker line")]
    MissingHeader,

    #[error(transparent)]
    UnknownKind(#[from] UnknownKindError),

    #[error("invalid value on line {line}: {source}")]
    Value {
        line: usize,
        #[source]
        source: ParseValueError,
    },

    #[error("read failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for deserialization.
pub type DecodeResult<T> = Result<T, DecodeError>;
