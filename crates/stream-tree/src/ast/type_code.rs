//! Stream type tags (`TC_*`)

use std::fmt;

use serde::{Deserialize, Serialize};

/// The single-byte control tags of the serialization stream.
///
/// Byte values are a wire contract with the decoder and must not change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawTypeCode", into = "u8")]
pub enum TypeCode {
    /// `TC_NULL` (0x70)
    Null,
    /// `TC_REFERENCE` (0x71)
    Reference,
    /// `TC_CLASSDESC` (0x72)
    ClassDesc,
    /// `TC_OBJECT` (0x73)
    Object,
    /// `TC_STRING` (0x74)
    String,
    /// `TC_ARRAY` (0x75)
    Array,
    /// `TC_CLASS` (0x76)
    Class,
    /// `TC_BLOCKDATA` (0x77)
    BlockData,
    /// `TC_ENDBLOCKDATA` (0x78)
    EndBlockData,
    /// `TC_RESET` (0x79)
    Reset,
    /// `TC_BLOCKDATALONG` (0x7A)
    BlockDataLong,
    /// `TC_EXCEPTION` (0x7B)
    Exception,
    /// `TC_LONGSTRING` (0x7C)
    LongString,
    /// `TC_PROXYCLASSDESC` (0x7D)
    ProxyClassDesc,
    /// `TC_ENUM` (0x7E)
    Enum,
}

impl TypeCode {
    /// Every tag, in wire order.
    pub const ALL: [TypeCode; 15] = [
        TypeCode::Null,
        TypeCode::Reference,
        TypeCode::ClassDesc,
        TypeCode::Object,
        TypeCode::String,
        TypeCode::Array,
        TypeCode::Class,
        TypeCode::BlockData,
        TypeCode::EndBlockData,
        TypeCode::Reset,
        TypeCode::BlockDataLong,
        TypeCode::Exception,
        TypeCode::LongString,
        TypeCode::ProxyClassDesc,
        TypeCode::Enum,
    ];

    /// The wire byte of this tag.
    pub fn as_byte(self) -> u8 {
        match self {
            TypeCode::Null => 0x70,
            TypeCode::Reference => 0x71,
            TypeCode::ClassDesc => 0x72,
            TypeCode::Object => 0x73,
            TypeCode::String => 0x74,
            TypeCode::Array => 0x75,
            TypeCode::Class => 0x76,
            TypeCode::BlockData => 0x77,
            TypeCode::EndBlockData => 0x78,
            TypeCode::Reset => 0x79,
            TypeCode::BlockDataLong => 0x7A,
            TypeCode::Exception => 0x7B,
            TypeCode::LongString => 0x7C,
            TypeCode::ProxyClassDesc => 0x7D,
            TypeCode::Enum => 0x7E,
        }
    }

    /// Look up a tag by its wire byte.
    pub fn from_byte(byte: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|tc| tc.as_byte() == byte)
    }

    /// Canonical display name, e.g. `TC_OBJECT`.
    pub fn name(self) -> &'static str {
        match self {
            TypeCode::Null => "TC_NULL",
            TypeCode::Reference => "TC_REFERENCE",
            TypeCode::ClassDesc => "TC_CLASSDESC",
            TypeCode::Object => "TC_OBJECT",
            TypeCode::String => "TC_STRING",
            TypeCode::Array => "TC_ARRAY",
            TypeCode::Class => "TC_CLASS",
            TypeCode::BlockData => "TC_BLOCKDATA",
            TypeCode::EndBlockData => "TC_ENDBLOCKDATA",
            TypeCode::Reset => "TC_RESET",
            TypeCode::BlockDataLong => "TC_BLOCKDATALONG",
            TypeCode::Exception => "TC_EXCEPTION",
            TypeCode::LongString => "TC_LONGSTRING",
            TypeCode::ProxyClassDesc => "TC_PROXYCLASSDESC",
            TypeCode::Enum => "TC_ENUM",
        }
    }

    /// Look up a tag by its canonical name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tc| tc.name() == name)
    }
}

impl fmt::Display for TypeCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<TypeCode> for u8 {
    fn from(tc: TypeCode) -> u8 {
        tc.as_byte()
    }
}

/// Decoders emit tags either as raw bytes or as their symbolic names.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawTypeCode {
    Byte(u8),
    Name(String),
}

impl TryFrom<RawTypeCode> for TypeCode {
    type Error = String;

    fn try_from(raw: RawTypeCode) -> Result<Self, Self::Error> {
        match raw {
            RawTypeCode::Byte(b) => {
                TypeCode::from_byte(b).ok_or_else(|| format!("unknown type code 0x{:02x}", b))
            }
            RawTypeCode::Name(name) => {
                TypeCode::from_name(&name).ok_or_else(|| format!("unknown type code {}", name))
            }
        }
    }
}
