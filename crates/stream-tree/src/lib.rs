//! # Stream Tree
//!
//! Turns a decoded Java object-serialization stream into a labelled tree for
//! interactive inspection.
//!
//! The stream decoder hands over an immutable AST. That AST is a tree, but the
//! stream it came from describes an object graph: objects refer back to
//! earlier ones by handle. This crate resolves those handles, derives a
//! one-line label for every node and flattens away the bookkeeping nodes, so
//! that a tree widget can show the result directly.
//!
//! ## Architecture
//!
//! - **Handle Index**: one pre-order walk mapping `(epoch, handle)` to the
//!   node that introduced it
//! - **Labeler**: derives the text of a node, following back-references
//! - **Flattener**: splices transparent nodes away and builds display nodes
//! - **Sources**: the seam where a decoder delivers its AST
//!
//! ```
//! use stream_tree::{render, Ast, Handle, Node, RenderConfig};
//!
//! let desc = Handle::new(0, 0x7e0000);
//! let obj = Handle::new(0, 0x7e0001);
//! let ast = Ast::new(Node::root(vec![
//!     Node::magic(),
//!     Node::version(),
//!     Node::contents(vec![
//!         Node::new_object(obj, Node::class_desc(desc, "Point", vec![]), vec![]),
//!         Node::reference(obj),
//!     ]),
//! ]));
//!
//! let tree = render(&ast, &RenderConfig::default()).unwrap();
//! let payload = tree[2].children();
//! assert_eq!(payload[0].text, "object Point (0x7e0001)");
//! assert_eq!(payload[1].text, "reference to object Point (0x7e0001)");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod ast;
pub mod config;
pub mod error;
pub mod flatten;
pub mod handles;
pub mod hex;
pub mod label;
pub mod source;
pub mod sources;

// Re-export main types
pub use ast::{Ast, Handle, Node, NodeKind, ObjectKind, Scalar, TypeCode, BASE_WIRE_HANDLE};
pub use config::RenderConfig;
pub use error::{DecodeError, RenderError, Result};
pub use flatten::{outline, render, DisplayNode, DisplayState, Flattened, Flattener};
pub use handles::HandleIndex;
pub use label::{class_name_of, describe, field_type_name, Labeler};
pub use source::AstSource;

/// Stream Tree version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_exists() {
        assert!(!VERSION.is_empty());
    }
}
