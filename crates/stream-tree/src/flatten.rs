//! Tree flattening: AST in, display nodes out

use std::fmt;

use serde::Serialize;
use tracing::{debug, trace};

use crate::ast::{Ast, Node};
use crate::config::RenderConfig;
use crate::error::Result;
use crate::handles::HandleIndex;
use crate::label::Labeler;

/// One rendered tree entry.
///
/// Serializes to the tree-widget data shape:
/// `{ "text", "icon", "state": { "opened" }, "children"? }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayNode {
    /// Visible label
    pub text: String,

    /// Icon class, picked by leaf/branch status
    pub icon: String,

    /// Initial widget state
    pub state: DisplayState,

    /// Children; `None` for leaves, possibly empty for branches
    #[serde(skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<DisplayNode>>,
}

/// Initial widget state of a [`DisplayNode`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DisplayState {
    /// Expanded when first shown
    pub opened: bool,
}

impl DisplayNode {
    /// Whether this entry came from a node without a child slot.
    pub fn is_leaf(&self) -> bool {
        self.children.is_none()
    }

    /// Whether the entry starts expanded.
    pub fn is_opened(&self) -> bool {
        self.state.opened
    }

    /// Children as a slice; empty for leaves.
    pub fn children(&self) -> &[DisplayNode] {
        self.children.as_deref().unwrap_or(&[])
    }

    /// Indented text outline of this entry and its descendants.
    pub fn outline(&self) -> String {
        self.to_string()
    }

    fn write_outline(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
        let marker = match (&self.children, self.state.opened) {
            (None, _) => '-',
            (Some(_), true) => 'v',
            (Some(_), false) => '+',
        };
        writeln!(f, "{:indent$}{} {}", "", marker, self.text, indent = depth * 2)?;
        for child in self.children() {
            child.write_outline(f, depth + 1)?;
        }
        Ok(())
    }
}

impl fmt::Display for DisplayNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_outline(f, 0)
    }
}

/// Outline of a whole top-level sequence.
pub fn outline(nodes: &[DisplayNode]) -> String {
    nodes.iter().map(DisplayNode::outline).collect()
}

/// Result of flattening one AST node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Flattened {
    /// A rendered node
    Node(DisplayNode),

    /// The flattened children of a transparent node
    Spliced(Vec<DisplayNode>),
}

impl Flattened {
    /// Normalize to a sequence.
    pub fn into_vec(self) -> Vec<DisplayNode> {
        match self {
            Flattened::Node(node) => vec![node],
            Flattened::Spliced(nodes) => nodes,
        }
    }
}

/// Turns AST nodes into [`DisplayNode`]s against one handle index.
#[derive(Debug, Clone, Copy)]
pub struct Flattener<'c, 'i, 'ast> {
    labeler: Labeler<'i, 'ast>,
    config: &'c RenderConfig,
}

impl<'c, 'i, 'ast> Flattener<'c, 'i, 'ast> {
    /// Create a flattener over `index`.
    pub fn new(index: &'i HandleIndex<'ast>, config: &'c RenderConfig) -> Self {
        Self {
            labeler: Labeler::new(index, config),
            config,
        }
    }

    /// Flatten `node`, prefixing its text with `label` when given.
    ///
    /// Transparent nodes (root, block-data sequences, resets) yield their
    /// children's results spliced together; the label is dropped for them.
    pub fn flatten(&self, node: &Node, label: Option<&str>) -> Result<Flattened> {
        if node.is_transparent() {
            trace!(kind = node.kind_name(), "splicing transparent node");
            return self.flatten_children(node.children()).map(Flattened::Spliced);
        }

        let text = self.labeler.describe(node)?;
        let text = match label {
            Some(label) => format!("{}: {}", label, text),
            None => text,
        };

        let children = match &node.children {
            Some(children) => Some(self.flatten_children(children)?),
            None => None,
        };

        Ok(Flattened::Node(DisplayNode {
            text,
            icon: self.config.icon_for(node.is_leaf()).to_string(),
            state: DisplayState::default(),
            children,
        }))
    }

    fn flatten_children(&self, children: &[Node]) -> Result<Vec<DisplayNode>> {
        let mut out = Vec::with_capacity(children.len());
        for child in children {
            match self.flatten(child, None)? {
                Flattened::Node(node) => out.push(node),
                Flattened::Spliced(nodes) => out.extend(nodes),
            }
        }
        Ok(out)
    }
}

/// Render a decoded stream as its top-level display sequence.
///
/// Builds the handle index, flattens the root and, when the result is exactly
/// magic, version and one payload entry, opens the payload.
///
/// # Example
///
/// ```
/// use stream_tree::{render, Ast, Handle, Node, RenderConfig};
///
/// let ast = Ast::new(Node::root(vec![
///     Node::magic(),
///     Node::version(),
///     Node::contents(vec![Node::new_string(Handle::new(0, 0x7e0000), "hi")]),
/// ]));
///
/// let tree = render(&ast, &RenderConfig::default()).unwrap();
/// assert_eq!(tree.len(), 3);
/// assert_eq!(tree[0].text, "STREAM_MAGIC");
/// assert!(tree[2].is_opened());
/// ```
pub fn render(ast: &Ast, config: &RenderConfig) -> Result<Vec<DisplayNode>> {
    let index = HandleIndex::build(&ast.root);
    let mut nodes = Flattener::new(&index, config)
        .flatten(&ast.root, None)?
        .into_vec();

    if config.expand_payload && nodes.len() == 3 {
        nodes[2].state.opened = true;
    }

    debug!(top_level = nodes.len(), handles = index.len(), "rendered stream tree");
    Ok(nodes)
}
