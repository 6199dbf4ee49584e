//! Decoded stream AST
//!
//! The AST is produced by an external stream decoder and handed to this crate
//! finished and immutable. It is a strict tree: every node owns its children.
//! The object graph the stream encodes shows up only as [`Handle`] payloads on
//! `prev-object` nodes, resolved later through a
//! [`HandleIndex`](crate::HandleIndex).
//!
//! The serde representation mirrors the decoder's vocabulary: a `type` tag with
//! kebab-case kind names, an `objectType` tag for object nodes, and
//! `children: null` for leaves.

mod build;
mod object;
mod scalar;
mod type_code;

pub use object::{Handle, ObjectKind, BASE_WIRE_HANDLE};
pub use scalar::Scalar;
pub use type_code::TypeCode;

use serde::{Deserialize, Serialize};

/// A complete decoded stream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ast {
    /// The `root` node; its children are the top-level stream items
    pub root: Node,
}

impl Ast {
    /// Wrap a root node.
    pub fn new(root: Node) -> Self {
        Self { root }
    }
}

/// One AST node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// Kind and kind-specific payload
    #[serde(flatten)]
    pub kind: NodeKind,

    /// Ordered children; `None` marks a leaf that cannot hold children,
    /// which is different from an empty branch
    #[serde(default)]
    pub children: Option<Vec<Node>>,
}

/// The closed set of node kinds the decoder emits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum NodeKind {
    /// Whole-stream container
    Root,
    /// `STREAM_MAGIC` header
    Magic,
    /// `STREAM_VERSION` header
    Version,
    /// Sequence of stream contents
    Contents,
    /// One block-data record
    Blockdata,
    /// Run of consecutive block-data records
    BlockdataSequence,
    /// Class or object annotation
    Annotation,
    /// Field descriptors of a class
    Fields,
    /// Field values of an object
    Values,
    /// Per-class data of an object
    SerialData,
    /// Data of one serializable class
    ClassData,
    /// Data of one externalizable class
    ExternalData,
    /// Body of a class descriptor
    ClassDescInfo,
    /// Body of a proxy class descriptor
    ProxyClassDescInfo,

    /// Short UTF string
    Utf {
        /// Decoded text
        value: String,
    },
    /// Long UTF string
    LongUtf {
        /// Decoded text
        value: String,
    },
    /// Bare UTF body without length prefix
    UtfBody {
        /// Decoded text
        value: String,
    },

    /// A single type tag byte
    Tc {
        /// The tag
        value: TypeCode,
    },

    /// Field descriptor: `[type code, name, (class name)]`
    FieldDesc,

    /// Primitive value
    Primitive {
        /// Java type name, e.g. `int`
        #[serde(rename = "dataType")]
        data_type: String,
        /// The value, absent for placeholders
        #[serde(default)]
        value: Option<Scalar>,
    },

    /// Object family, see [`ObjectKind`]
    Object(ObjectKind),
}

impl NodeKind {
    /// Wire name of the kind, e.g. `blockdata-sequence` or `object/reset`.
    pub fn name(&self) -> &'static str {
        match self {
            NodeKind::Root => "root",
            NodeKind::Magic => "magic",
            NodeKind::Version => "version",
            NodeKind::Contents => "contents",
            NodeKind::Blockdata => "blockdata",
            NodeKind::BlockdataSequence => "blockdata-sequence",
            NodeKind::Annotation => "annotation",
            NodeKind::Fields => "fields",
            NodeKind::Values => "values",
            NodeKind::SerialData => "serial-data",
            NodeKind::ClassData => "class-data",
            NodeKind::ExternalData => "external-data",
            NodeKind::ClassDescInfo => "class-desc-info",
            NodeKind::ProxyClassDescInfo => "proxy-class-desc-info",
            NodeKind::Utf { .. } => "utf",
            NodeKind::LongUtf { .. } => "long-utf",
            NodeKind::UtfBody { .. } => "utf-body",
            NodeKind::Tc { .. } => "tc",
            NodeKind::FieldDesc => "field-desc",
            NodeKind::Primitive { .. } => "primitive",
            NodeKind::Object(object) => match object {
                ObjectKind::Reset => "object/reset",
                ObjectKind::Null => "object/null",
                ObjectKind::PrevObject { .. } => "object/prev-object",
                ObjectKind::Exception => "object/exception",
                ObjectKind::NewString { .. } => "object/new-string",
                ObjectKind::NewObject { .. } => "object/new-object",
                ObjectKind::NewClass { .. } => "object/new-class",
                ObjectKind::NewArray { .. } => "object/new-array",
                ObjectKind::NewEnum { .. } => "object/new-enum",
                ObjectKind::NewClassDesc { .. } => "object/new-class-desc",
            },
        }
    }
}

impl Node {
    /// Whether the child slot is structurally absent.
    pub fn is_leaf(&self) -> bool {
        self.children.is_none()
    }

    /// Children as a slice; empty for leaves.
    pub fn children(&self) -> &[Node] {
        self.children.as_deref().unwrap_or(&[])
    }

    /// The `i`th child, if present.
    pub fn child(&self, i: usize) -> Option<&Node> {
        self.children().get(i)
    }

    /// The object payload, if this is an object node.
    pub fn as_object(&self) -> Option<&ObjectKind> {
        match &self.kind {
            NodeKind::Object(object) => Some(object),
            _ => None,
        }
    }

    /// Whether the flattener splices this node's children into its parent.
    pub fn is_transparent(&self) -> bool {
        matches!(
            self.kind,
            NodeKind::Root | NodeKind::BlockdataSequence | NodeKind::Object(ObjectKind::Reset)
        )
    }

    /// Wire name of the node kind.
    pub fn kind_name(&self) -> &'static str {
        self.kind.name()
    }
}
