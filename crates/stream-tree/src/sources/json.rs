//! JSON AST source
//!
//! Reads an AST that a stream decoder dumped as JSON, using the decoder's own
//! node vocabulary.

use tracing::debug;

use crate::ast::{Ast, NodeKind};
use crate::error::DecodeError;
use crate::source::AstSource;

/// Source for JSON-serialized ASTs.
///
/// Accepts either a full `{ "root": ... }` document or a bare root node.
///
/// # Example
///
/// ```
/// use stream_tree::sources::JsonAstSource;
/// use stream_tree::AstSource;
///
/// let json = br#"{ "type": "root", "children": [
///     { "type": "magic", "children": null }
/// ] }"#;
///
/// let ast = JsonAstSource::new().decode(json).unwrap();
/// assert_eq!(ast.root.children().len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct JsonAstSource;

impl JsonAstSource {
    /// Create a JSON source.
    pub fn new() -> Self {
        Self
    }
}

impl AstSource for JsonAstSource {
    fn decode(&self, bytes: &[u8]) -> Result<Ast, DecodeError> {
        let value: serde_json::Value = serde_json::from_slice(bytes)?;

        let ast = if value.get("root").is_some() {
            serde_json::from_value::<Ast>(value)?
        } else {
            Ast::new(serde_json::from_value(value)?)
        };

        if !matches!(ast.root.kind, NodeKind::Root) {
            return Err(DecodeError::Corrupted(format!(
                "top-level node is {}, not root",
                ast.root.kind_name()
            )));
        }

        debug!(source = self.name(), top_level = ast.root.children().len(), "decoded AST");
        Ok(ast)
    }

    fn name(&self) -> &str {
        "json"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_non_root_top_level() {
        let err = JsonAstSource::new()
            .decode(br#"{ "type": "magic", "children": null }"#)
            .unwrap_err();
        assert_eq!(err.to_string(), "file corrupted: top-level node is magic, not root");
    }

    #[test]
    fn test_rejects_garbage() {
        let err = JsonAstSource::new().decode(b"\xac\xed\x00\x05").unwrap_err();
        assert!(matches!(err, DecodeError::Json(_)));
    }
}
