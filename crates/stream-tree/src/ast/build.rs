//! Convenience constructors for AST nodes
//!
//! Decoders and tests assemble nodes with these instead of spelling out the
//! child layout of every object kind by hand.

use super::*;

impl Node {
    /// A node whose child slot is absent.
    pub fn leaf(kind: NodeKind) -> Self {
        Self {
            kind,
            children: None,
        }
    }

    /// A node with a (possibly empty) child sequence.
    pub fn branch(kind: NodeKind, children: Vec<Node>) -> Self {
        Self {
            kind,
            children: Some(children),
        }
    }

    /// The `root` node.
    pub fn root(children: Vec<Node>) -> Self {
        Self::branch(NodeKind::Root, children)
    }

    /// `STREAM_MAGIC` header.
    pub fn magic() -> Self {
        Self::leaf(NodeKind::Magic)
    }

    /// `STREAM_VERSION` header.
    pub fn version() -> Self {
        Self::leaf(NodeKind::Version)
    }

    /// A `contents` container.
    pub fn contents(children: Vec<Node>) -> Self {
        Self::branch(NodeKind::Contents, children)
    }

    /// Short UTF string.
    pub fn utf(value: impl Into<String>) -> Self {
        Self::leaf(NodeKind::Utf {
            value: value.into(),
        })
    }

    /// Long UTF string.
    pub fn long_utf(value: impl Into<String>) -> Self {
        Self::leaf(NodeKind::LongUtf {
            value: value.into(),
        })
    }

    /// A type tag.
    pub fn tc(value: TypeCode) -> Self {
        Self::leaf(NodeKind::Tc { value })
    }

    /// A primitive value.
    pub fn primitive(data_type: impl Into<String>, value: Option<Scalar>) -> Self {
        Self::leaf(NodeKind::Primitive {
            data_type: data_type.into(),
            value,
        })
    }

    /// Field descriptor `[code, name]`.
    pub fn field_desc(code: char, name: impl Into<String>) -> Self {
        Self::branch(
            NodeKind::FieldDesc,
            vec![
                Self::primitive("byte", Some(Scalar::from(code))),
                Self::utf(name),
            ],
        )
    }

    /// An object node with an explicit child layout.
    pub fn object(kind: ObjectKind, children: Vec<Node>) -> Self {
        Self::branch(NodeKind::Object(kind), children)
    }

    /// `TC_RESET`, owning whatever followed it in the stream.
    pub fn reset(children: Vec<Node>) -> Self {
        Self::object(ObjectKind::Reset, children)
    }

    /// `TC_NULL`.
    pub fn null() -> Self {
        Self::object(ObjectKind::Null, vec![Self::tc(TypeCode::Null)])
    }

    /// `TC_REFERENCE` to `target`.
    pub fn reference(target: Handle) -> Self {
        Self::object(
            ObjectKind::PrevObject { target },
            vec![
                Self::tc(TypeCode::Reference),
                Self::primitive("int", Some(Scalar::Int(target.id.into()))),
            ],
        )
    }

    /// `TC_STRING`.
    pub fn new_string(handle: Handle, value: impl Into<String>) -> Self {
        let value = value.into();
        Self::object(
            ObjectKind::NewString {
                handle,
                value: value.clone(),
            },
            vec![Self::tc(TypeCode::String), Self::utf(value)],
        )
    }

    /// `TC_CLASSDESC` for `name` with the given field descriptors.
    pub fn class_desc(handle: Handle, name: impl Into<String>, fields: Vec<Node>) -> Self {
        Self::object(
            ObjectKind::NewClassDesc { handle },
            vec![
                Self::tc(TypeCode::ClassDesc),
                Self::utf(name),
                Self::branch(
                    NodeKind::ClassDescInfo,
                    vec![
                        Self::branch(NodeKind::Fields, fields),
                        Self::branch(NodeKind::Annotation, vec![]),
                        Self::null(),
                    ],
                ),
            ],
        )
    }

    /// `TC_PROXYCLASSDESC` implementing `interfaces`.
    pub fn proxy_class_desc(handle: Handle, interfaces: &[&str]) -> Self {
        Self::object(
            ObjectKind::NewClassDesc { handle },
            vec![
                Self::tc(TypeCode::ProxyClassDesc),
                Self::branch(
                    NodeKind::ProxyClassDescInfo,
                    interfaces.iter().map(|i| Self::utf(*i)).collect(),
                ),
            ],
        )
    }

    /// `TC_OBJECT` described by `class_desc`, with per-class data.
    pub fn new_object(handle: Handle, class_desc: Node, class_data: Vec<Node>) -> Self {
        Self::object(
            ObjectKind::NewObject { handle },
            vec![
                Self::tc(TypeCode::Object),
                class_desc,
                Self::branch(NodeKind::SerialData, class_data),
            ],
        )
    }

    /// `TC_CLASS` described by `class_desc`.
    pub fn new_class(handle: Handle, class_desc: Node) -> Self {
        Self::object(
            ObjectKind::NewClass { handle },
            vec![Self::tc(TypeCode::Class), class_desc],
        )
    }

    /// `TC_ARRAY` described by `class_desc`.
    pub fn new_array(handle: Handle, class_desc: Node, values: Vec<Node>) -> Self {
        Self::object(
            ObjectKind::NewArray { handle },
            vec![
                Self::tc(TypeCode::Array),
                class_desc,
                Self::branch(NodeKind::Values, values),
            ],
        )
    }

    /// `TC_ENUM` described by `class_desc`, naming its constant.
    pub fn new_enum(handle: Handle, class_desc: Node, constant: Node) -> Self {
        Self::object(
            ObjectKind::NewEnum { handle },
            vec![Self::tc(TypeCode::Enum), class_desc, constant],
        )
    }

    /// `TC_EXCEPTION` carrying the thrown object.
    pub fn exception(thrown: Node) -> Self {
        Self::object(
            ObjectKind::Exception,
            vec![Self::tc(TypeCode::Exception), thrown],
        )
    }
}
