//! Primitive payload values

use std::fmt;

use serde::{Deserialize, Serialize};

/// Raw value carried by a `primitive` node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    /// `boolean`
    Bool(bool),
    /// Integral types, including `char` code units
    Int(i64),
    /// `float` / `double`
    Float(f64),
    /// Anything the decoder chose to pass as text
    Text(String),
}

impl Scalar {
    /// Interpret the value as a single character.
    ///
    /// Field type codes arrive either as a code point or as a one-char string.
    pub fn as_char(&self) -> Option<char> {
        match self {
            Scalar::Int(n) => u32::try_from(*n).ok().and_then(char::from_u32),
            Scalar::Text(s) => {
                let mut chars = s.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Some(c),
                    _ => None,
                }
            }
            Scalar::Bool(_) | Scalar::Float(_) => None,
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Bool(b) => write!(f, "{}", b),
            Scalar::Int(n) => write!(f, "{}", n),
            Scalar::Float(x) => write!(f, "{}", x),
            Scalar::Text(s) => f.write_str(s),
        }
    }
}

impl From<bool> for Scalar {
    fn from(b: bool) -> Self {
        Scalar::Bool(b)
    }
}

impl From<i64> for Scalar {
    fn from(n: i64) -> Self {
        Scalar::Int(n)
    }
}

impl From<i32> for Scalar {
    fn from(n: i32) -> Self {
        Scalar::Int(n.into())
    }
}

impl From<f64> for Scalar {
    fn from(x: f64) -> Self {
        Scalar::Float(x)
    }
}

impl From<&str> for Scalar {
    fn from(s: &str) -> Self {
        Scalar::Text(s.to_string())
    }
}

impl From<char> for Scalar {
    fn from(c: char) -> Self {
        Scalar::Int(c as i64)
    }
}
