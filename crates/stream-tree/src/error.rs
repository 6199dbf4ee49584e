//! Error types for tree rendering and AST decoding

use thiserror::Error;

use crate::ast::Handle;

/// Errors raised while deriving labels or flattening an AST.
///
/// Every variant signals a contract violation between the decoder and the
/// engine. None of them is recoverable: the caller discards the render.
/// An unresolved back-reference is *not* an error and never shows up here.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    /// A field descriptor carried a type code outside the wire table
    #[error("invalid field type code: {code:?}")]
    InvalidFieldTypeCode {
        /// The offending code
        code: char,
    },

    /// A class descriptor started with a tag other than
    /// `TC_CLASSDESC` / `TC_PROXYCLASSDESC`
    #[error("invalid class-descriptor tag: {found}")]
    InvalidClassDescTag {
        /// What was found in the tag slot
        found: String,
    },

    /// The engine was asked to describe or name a node kind it never handles
    #[error("shouldn't be called with {kind}")]
    UnexpectedKind {
        /// Wire name of the node kind
        kind: String,
    },

    /// A node lacks a child (or payload) the engine relies on
    #[error("malformed {kind} node: {reason}")]
    MalformedNode {
        /// Wire name of the node kind
        kind: String,
        /// What was missing or mistyped
        reason: String,
    },

    /// Following back-references led back to a handle already being described
    #[error("cyclic reference through handle {handle}")]
    CyclicReference {
        /// The handle that closed the cycle
        handle: Handle,
    },

    /// A reference chain exceeded the configured depth
    #[error("reference chain deeper than {limit}")]
    ReferenceDepthExceeded {
        /// The configured limit
        limit: usize,
    },
}

impl RenderError {
    pub(crate) fn unexpected(kind: impl Into<String>) -> Self {
        RenderError::UnexpectedKind { kind: kind.into() }
    }

    pub(crate) fn malformed(kind: impl Into<String>, reason: impl Into<String>) -> Self {
        RenderError::MalformedNode {
            kind: kind.into(),
            reason: reason.into(),
        }
    }
}

/// Errors raised by an [`AstSource`](crate::source::AstSource) before the
/// engine ever runs.
///
/// A shell reports all of these to the user as a corrupted input.
#[derive(Error, Debug)]
pub enum DecodeError {
    /// Input contained a character that is not a hex digit
    #[error("invalid hex: {character:?} at position {position}")]
    InvalidHex {
        /// Byte offset of the bad character
        position: usize,
        /// The bad character
        character: char,
    },

    /// Hex input had an odd number of digits
    #[error("incomplete hex: {digits} digits")]
    IncompleteHex {
        /// Number of hex digits seen
        digits: usize,
    },

    /// The source could not make sense of the input
    #[error("file corrupted: {0}")]
    Corrupted(String),

    /// The JSON AST was not well-formed
    #[error("file corrupted: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for rendering operations
pub type Result<T> = std::result::Result<T, RenderError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = RenderError::InvalidFieldTypeCode { code: 'Q' };
        assert_eq!(err.to_string(), "invalid field type code: 'Q'");

        let err = RenderError::unexpected("object/reset");
        assert_eq!(err.to_string(), "shouldn't be called with object/reset");

        let err = RenderError::CyclicReference {
            handle: Handle::new(0, 0x7e0003),
        };
        assert_eq!(err.to_string(), "cyclic reference through handle 0x7e0003");
    }

    #[test]
    fn test_decode_error_reads_as_corruption() {
        let err = DecodeError::Corrupted("truncated block".to_string());
        assert_eq!(err.to_string(), "file corrupted: truncated block");
    }
}
