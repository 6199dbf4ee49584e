//! Object-family payloads and stream handles

use std::fmt;

use serde::{Deserialize, Serialize};

/// First handle the stream assigns after the start or a reset.
pub const BASE_WIRE_HANDLE: u32 = 0x7e0000;

/// A referenceable slot in the stream: `(epoch, id)`.
///
/// The epoch is bumped by every `TC_RESET`, since handle numbering restarts
/// at [`BASE_WIRE_HANDLE`] afterwards. Two handles name the same slot only if
/// both parts match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Handle {
    /// Reset generation
    pub epoch: u32,

    /// Numeric handle within the epoch
    #[serde(rename = "handle")]
    pub id: u32,
}

impl Handle {
    /// Create a handle.
    pub fn new(epoch: u32, id: u32) -> Self {
        Self { epoch, id }
    }
}

/// Formats as the hex id only, e.g. `0x7e0001`.
impl fmt::Display for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:x}", self.id)
    }
}

/// Sub-kind of an `object` node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "objectType", rename_all = "kebab-case")]
pub enum ObjectKind {
    /// `TC_RESET` marker; children are whatever followed it
    Reset,

    /// `TC_NULL`
    Null,

    /// `TC_REFERENCE` back to an earlier object
    PrevObject {
        /// The referenced slot
        #[serde(rename = "value")]
        target: Handle,
    },

    /// `TC_EXCEPTION`; second child is the thrown object
    Exception,

    /// `TC_STRING` / `TC_LONGSTRING`
    NewString {
        /// Handle assigned to the string
        handle: Handle,
        /// String contents
        value: String,
    },

    /// `TC_OBJECT`; second child is the class descriptor
    NewObject {
        /// Handle assigned to the object
        handle: Handle,
    },

    /// `TC_CLASS`; second child is the class descriptor
    NewClass {
        /// Handle assigned to the class
        handle: Handle,
    },

    /// `TC_ARRAY`; second child is the class descriptor
    NewArray {
        /// Handle assigned to the array
        handle: Handle,
    },

    /// `TC_ENUM`; second child is the class descriptor
    NewEnum {
        /// Handle assigned to the enum constant
        handle: Handle,
    },

    /// `TC_CLASSDESC` / `TC_PROXYCLASSDESC`; first child is the tag
    NewClassDesc {
        /// Handle assigned to the descriptor
        handle: Handle,
    },
}

impl ObjectKind {
    /// The handle this node introduces, if any.
    ///
    /// Resets, nulls, back-references and exceptions introduce none.
    pub fn handle(&self) -> Option<Handle> {
        match self {
            ObjectKind::Reset
            | ObjectKind::Null
            | ObjectKind::PrevObject { .. }
            | ObjectKind::Exception => None,
            ObjectKind::NewString { handle, .. }
            | ObjectKind::NewObject { handle }
            | ObjectKind::NewClass { handle }
            | ObjectKind::NewArray { handle }
            | ObjectKind::NewEnum { handle }
            | ObjectKind::NewClassDesc { handle } => Some(*handle),
        }
    }

    /// Wire name of the sub-kind.
    pub fn name(&self) -> &'static str {
        match self {
            ObjectKind::Reset => "reset",
            ObjectKind::Null => "null",
            ObjectKind::PrevObject { .. } => "prev-object",
            ObjectKind::Exception => "exception",
            ObjectKind::NewString { .. } => "new-string",
            ObjectKind::NewObject { .. } => "new-object",
            ObjectKind::NewClass { .. } => "new-class",
            ObjectKind::NewArray { .. } => "new-array",
            ObjectKind::NewEnum { .. } => "new-enum",
            ObjectKind::NewClassDesc { .. } => "new-class-desc",
        }
    }
}
