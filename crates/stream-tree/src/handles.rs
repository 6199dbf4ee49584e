//! Handle index: resolves back-references to the node that introduced them

use indexmap::IndexMap;
use tracing::debug;

use crate::ast::{Handle, Node};

/// Lookup table from [`Handle`] to the AST node that introduced it.
///
/// Built once per AST by a single pre-order walk and read-only afterwards.
/// Entries iterate in stream order.
///
/// # Example
///
/// ```
/// use stream_tree::{Ast, Handle, HandleIndex, Node};
///
/// let h = Handle::new(0, 0x7e0000);
/// let ast = Ast::new(Node::root(vec![
///     Node::new_string(h, "hello"),
///     Node::reference(h),
/// ]));
///
/// let index = HandleIndex::build(&ast.root);
/// assert_eq!(index.len(), 1);
/// assert!(index.resolve(h).is_some());
/// assert!(index.resolve(Handle::new(1, 0x7e0000)).is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct HandleIndex<'ast> {
    entries: IndexMap<Handle, &'ast Node>,
}

impl<'ast> HandleIndex<'ast> {
    /// Walk `root` depth-first, pre-order, registering every object node that
    /// carries a handle.
    ///
    /// A handle registered twice keeps the later node.
    pub fn build(root: &'ast Node) -> Self {
        let mut entries = IndexMap::new();
        let mut stack = vec![root];

        while let Some(node) = stack.pop() {
            if let Some(handle) = node.as_object().and_then(|object| object.handle()) {
                // Re-inserting keeps the original position but swaps the node.
                if entries.insert(handle, node).is_some() {
                    debug!(%handle, epoch = handle.epoch, "handle registered twice, keeping later node");
                }
            }

            // Reverse so the leftmost child is popped first.
            stack.extend(node.children().iter().rev());
        }

        debug!(handles = entries.len(), "built handle index");
        Self { entries }
    }

    /// The node that introduced `handle`, or `None` for a broken reference.
    pub fn resolve(&self, handle: Handle) -> Option<&'ast Node> {
        self.entries.get(&handle).copied()
    }

    /// Whether `handle` was introduced anywhere in the stream.
    pub fn contains(&self, handle: Handle) -> bool {
        self.entries.contains_key(&handle)
    }

    /// Number of registered handles.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no handles were registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Registered handles in stream order.
    pub fn handles(&self) -> impl Iterator<Item = Handle> + '_ {
        self.entries.keys().copied()
    }

    /// `(handle, node)` pairs in stream order.
    pub fn iter(&self) -> impl Iterator<Item = (Handle, &'ast Node)> + '_ {
        self.entries.iter().map(|(h, n)| (*h, *n))
    }
}
