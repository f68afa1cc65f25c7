use std::fmt::{Display, Formatter};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Data type of a literal or an erased native series.
///
/// Backends bring their own (usually much richer) type lattices; this enum only
/// covers what a literal value can carry without consulting a backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DataType {
    Null,
    Boolean,
    /// A UTF8 encoded string type.
    Utf8,
    Int32,
    Int64,
    Float32,
    Float64,
    /// The native payload is none of the primitive carriers.
    Unknown,
}

impl DataType {
    pub fn is_float(&self) -> bool {
        matches!(self, DataType::Float32 | DataType::Float64)
    }

    pub fn is_integer(&self) -> bool {
        matches!(self, DataType::Int32 | DataType::Int64)
    }

    pub fn is_numeric(&self) -> bool {
        self.is_float() || self.is_integer()
    }
}

impl Display for DataType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            DataType::Null => "null",
            DataType::Boolean => "bool",
            DataType::Utf8 => "str",
            DataType::Int32 => "i32",
            DataType::Int64 => "i64",
            DataType::Float32 => "f32",
            DataType::Float64 => "f64",
            DataType::Unknown => "unknown",
        };
        f.write_str(s)
    }
}
