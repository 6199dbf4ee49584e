//! AST source trait
//!
//! Decoding the binary stream is somebody else's job. This module defines the
//! boundary a decoder implements to hand its finished AST to the engine:
//!
//! ```text
//! bytes → [AstSource] → Ast → [HandleIndex + Flattener] → Vec<DisplayNode>
//! ```
//!
//! A source either yields a complete AST or fails with a [`DecodeError`]; the
//! engine is never invoked on a partial result.

use crate::ast::Ast;
use crate::error::DecodeError;

/// Producer of decoded stream ASTs.
///
/// # Example Implementation
///
/// ```
/// use stream_tree::{Ast, AstSource, DecodeError, Node};
///
/// struct EmptySource;
///
/// impl AstSource for EmptySource {
///     fn decode(&self, bytes: &[u8]) -> Result<Ast, DecodeError> {
///         if bytes.is_empty() {
///             Ok(Ast::new(Node::root(vec![])))
///         } else {
///             Err(DecodeError::Corrupted("expected no input".to_string()))
///         }
///     }
///
///     fn name(&self) -> &str {
///         "empty"
///     }
/// }
///
/// assert!(EmptySource.decode(b"").is_ok());
/// assert!(EmptySource.decode(b"\xac\xed").is_err());
/// ```
pub trait AstSource: Send + Sync {
    /// Decode `bytes` into a finished AST.
    ///
    /// # Errors
    ///
    /// Returns `DecodeError` if the input is not a valid stream for this
    /// source.
    fn decode(&self, bytes: &[u8]) -> Result<Ast, DecodeError>;

    /// Human-readable name of the source, for diagnostics.
    fn name(&self) -> &str;
}
