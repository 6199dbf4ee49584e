//! Label derivation
//!
//! Maps any AST node to the one-line text shown for it in the tree. Labels of
//! back-references are derived from the node they point at, so derivation may
//! follow a chain of handles through the [`HandleIndex`].

use crate::ast::{Handle, Node, NodeKind, ObjectKind, TypeCode};
use crate::config::RenderConfig;
use crate::error::{RenderError, Result};
use crate::handles::HandleIndex;

/// Describe `node` with the default [`RenderConfig`].
///
/// # Example
///
/// ```
/// use stream_tree::{describe, Handle, HandleIndex, Node};
///
/// let root = Node::root(vec![]);
/// let index = HandleIndex::build(&root);
///
/// let s = Node::new_string(Handle::new(0, 0x7e0001), "hi");
/// assert_eq!(describe(&s, &index).unwrap(), r#"string "hi" (0x7e0001)"#);
/// ```
pub fn describe(node: &Node, index: &HandleIndex<'_>) -> Result<String> {
    Labeler::new(index, &RenderConfig::default()).describe(node)
}

/// Class name of an object node, with the default [`RenderConfig`].
pub fn class_name_of(node: &Node, index: &HandleIndex<'_>) -> Result<String> {
    Labeler::new(index, &RenderConfig::default()).class_name_of(node)
}

/// Java type name for a field descriptor type code.
pub fn field_type_name(code: char) -> Result<&'static str> {
    match code {
        'B' => Ok("byte"),
        'C' => Ok("char"),
        'D' => Ok("double"),
        'F' => Ok("float"),
        'I' => Ok("int"),
        'J' => Ok("long"),
        'S' => Ok("short"),
        'Z' => Ok("boolean"),
        'L' => Ok("Object"),
        '[' => Ok("Array"),
        code => Err(RenderError::InvalidFieldTypeCode { code }),
    }
}

/// Derives labels against one handle index.
#[derive(Debug, Clone, Copy)]
pub struct Labeler<'i, 'ast> {
    index: &'i HandleIndex<'ast>,
    max_depth: usize,
}

/// Handles currently being followed by one label derivation.
#[derive(Debug, Default)]
struct Trail {
    handles: Vec<Handle>,
}

impl Trail {
    fn enter(&mut self, handle: Handle, limit: usize) -> Result<()> {
        if self.handles.contains(&handle) {
            return Err(RenderError::CyclicReference { handle });
        }
        if self.handles.len() >= limit {
            return Err(RenderError::ReferenceDepthExceeded { limit });
        }
        self.handles.push(handle);
        Ok(())
    }

    fn leave(&mut self) {
        self.handles.pop();
    }
}

impl<'i, 'ast> Labeler<'i, 'ast> {
    /// Create a labeler over `index`.
    ///
    /// A depth limit below 1 is raised to 1 so a single resolved reference
    /// always renders.
    pub fn new(index: &'i HandleIndex<'ast>, config: &RenderConfig) -> Self {
        Self {
            index,
            max_depth: config.max_reference_depth.max(1),
        }
    }

    /// One-line description of `node`.
    ///
    /// Fails for `root`, `blockdata-sequence` and `reset` nodes, which are
    /// only ever flattened, and for nodes that break the decoder's layout.
    pub fn describe(&self, node: &Node) -> Result<String> {
        self.describe_in(node, &mut Trail::default())
    }

    /// Class name of an object node, following references as needed.
    pub fn class_name_of(&self, node: &Node) -> Result<String> {
        self.class_name_in(node, &mut Trail::default())
    }

    fn describe_in(&self, node: &Node, trail: &mut Trail) -> Result<String> {
        match &node.kind {
            NodeKind::Root | NodeKind::BlockdataSequence => {
                Err(RenderError::unexpected(node.kind_name()))
            }

            NodeKind::Magic => Ok("STREAM_MAGIC".to_string()),
            NodeKind::Version => Ok("STREAM_VERSION".to_string()),
            NodeKind::SerialData => Ok("classdata[]".to_string()),
            NodeKind::ClassData | NodeKind::ExternalData => Ok("classdata".to_string()),
            NodeKind::ClassDescInfo => Ok("classDescInfo".to_string()),
            NodeKind::ProxyClassDescInfo => Ok("proxyClassDescInfo".to_string()),

            NodeKind::Contents
            | NodeKind::Blockdata
            | NodeKind::Annotation
            | NodeKind::Fields
            | NodeKind::Values => Ok(node.kind_name().to_string()),

            NodeKind::Utf { value } | NodeKind::LongUtf { value } | NodeKind::UtfBody { value } => {
                Ok(format!("{} {}", node.kind_name(), quote(value)))
            }

            NodeKind::Tc { value } => Ok(value.name().to_string()),

            NodeKind::FieldDesc => describe_field_desc(node),

            NodeKind::Primitive { data_type, value } => Ok(match value {
                Some(value) => format!("{}: {}", data_type, value),
                None => data_type.clone(),
            }),

            NodeKind::Object(object) => self.describe_object(node, object, trail),
        }
    }

    fn describe_object(
        &self,
        node: &Node,
        object: &ObjectKind,
        trail: &mut Trail,
    ) -> Result<String> {
        match object {
            ObjectKind::Reset => Err(RenderError::unexpected(node.kind_name())),

            ObjectKind::Null => Ok("null".to_string()),

            ObjectKind::PrevObject { target } => match self.index.resolve(*target) {
                None => Ok(format!("broken reference ({})", target)),
                Some(referenced) => {
                    trail.enter(*target, self.max_depth)?;
                    let text = self.describe_in(referenced, trail)?;
                    trail.leave();
                    Ok(format!("reference to {}", text))
                }
            },

            ObjectKind::Exception => {
                Ok(format!("exception {}", self.class_name_in(node, trail)?))
            }

            ObjectKind::NewString { handle, value } => {
                Ok(format!("string {} ({})", quote(value), handle))
            }

            ObjectKind::NewObject { handle }
            | ObjectKind::NewClass { handle }
            | ObjectKind::NewArray { handle }
            | ObjectKind::NewEnum { handle }
            | ObjectKind::NewClassDesc { handle } => {
                let role = match object {
                    ObjectKind::NewObject { .. } => "object",
                    ObjectKind::NewClass { .. } => "class",
                    ObjectKind::NewArray { .. } => "array",
                    ObjectKind::NewEnum { .. } => "enum",
                    _ => "classDesc",
                };
                let class_name = self.class_name_in(node, trail)?;
                Ok(format!("{} {} ({})", role, class_name, handle))
            }
        }
    }

    fn class_name_in(&self, node: &Node, trail: &mut Trail) -> Result<String> {
        let object = node.as_object().ok_or_else(|| {
            RenderError::malformed(node.kind_name(), "expected an object node")
        })?;

        match object {
            ObjectKind::Reset | ObjectKind::Null | ObjectKind::NewString { .. } => {
                Err(RenderError::unexpected(object.name()))
            }

            ObjectKind::PrevObject { target } => match self.index.resolve(*target) {
                None => Ok("<broken>".to_string()),
                Some(referenced) => {
                    trail.enter(*target, self.max_depth)?;
                    let name = self.class_name_in(referenced, trail)?;
                    trail.leave();
                    Ok(name)
                }
            },

            ObjectKind::NewObject { .. }
            | ObjectKind::NewClass { .. }
            | ObjectKind::NewArray { .. }
            | ObjectKind::Exception
            | ObjectKind::NewEnum { .. } => {
                let desc = node.child(1).ok_or_else(|| {
                    RenderError::malformed(node.kind_name(), "missing class descriptor")
                })?;
                self.class_name_in(desc, trail)
            }

            ObjectKind::NewClassDesc { .. } => match node.child(0).map(|c| &c.kind) {
                Some(NodeKind::Tc {
                    value: TypeCode::ProxyClassDesc,
                }) => Ok("proxy".to_string()),
                Some(NodeKind::Tc {
                    value: TypeCode::ClassDesc,
                }) => match node.child(1).map(|c| &c.kind) {
                    Some(NodeKind::Utf { value }) => Ok(value.clone()),
                    _ => Err(RenderError::malformed(
                        node.kind_name(),
                        "class name is not a utf string",
                    )),
                },
                Some(NodeKind::Tc { value }) => Err(RenderError::InvalidClassDescTag {
                    found: value.name().to_string(),
                }),
                Some(other) => Err(RenderError::InvalidClassDescTag {
                    found: other.name().to_string(),
                }),
                None => Err(RenderError::InvalidClassDescTag {
                    found: "nothing".to_string(),
                }),
            },
        }
    }
}

/// `<type-name> <field-name>` for a field descriptor.
fn describe_field_desc(node: &Node) -> Result<String> {
    let code = match node.child(0).map(|c| &c.kind) {
        Some(NodeKind::Primitive {
            value: Some(value), ..
        }) => value.as_char(),
        _ => None,
    }
    .ok_or_else(|| RenderError::malformed(node.kind_name(), "missing type code"))?;

    let name = match node.child(1).map(|c| &c.kind) {
        Some(NodeKind::Utf { value }) => value,
        _ => {
            return Err(RenderError::malformed(
                node.kind_name(),
                "field name is not a utf string",
            ))
        }
    };

    Ok(format!("{} {}", field_type_name(code)?, name))
}

/// JSON string literal of `s`.
fn quote(s: &str) -> String {
    serde_json::Value::from(s).to_string()
}
