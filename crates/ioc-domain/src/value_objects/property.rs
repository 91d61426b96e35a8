//! Property descriptors and typed property values
//!
//! `PropertyType` is what a managed type declares for each settable
//! property; `PropertyValue` is what the injector hands to the setter
//! after converting a configuration literal to that declared type.

use std::fmt;

use crate::error::{Error, Result};
use crate::ports::Instance;

/// Declared type of a settable property
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyType {
    /// UTF-8 string
    String,
    /// Boolean
    Bool,
    /// Single Unicode scalar
    Char,
    /// Signed 8-bit integer
    I8,
    /// Signed 16-bit integer
    I16,
    /// Signed 32-bit integer
    I32,
    /// Signed 64-bit integer
    I64,
    /// Unsigned 8-bit integer
    U8,
    /// Unsigned 16-bit integer
    U16,
    /// Unsigned 32-bit integer
    U32,
    /// Unsigned 64-bit integer
    U64,
    /// 32-bit float
    F32,
    /// 64-bit float
    F64,
    /// Enumeration, described by its member names in ordinal order
    Enum(&'static [&'static str]),
    /// Another managed object, assigned from a reference
    Object,
}

impl PropertyType {
    /// Whether this is an enumeration type
    pub fn is_enum(&self) -> bool {
        matches!(self, Self::Enum(_))
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::String => "string",
            Self::Bool => "bool",
            Self::Char => "char",
            Self::I8 => "i8",
            Self::I16 => "i16",
            Self::I32 => "i32",
            Self::I64 => "i64",
            Self::U8 => "u8",
            Self::U16 => "u16",
            Self::U32 => "u32",
            Self::U64 => "u64",
            Self::F32 => "f32",
            Self::F64 => "f64",
            Self::Enum(_) => "enum",
            Self::Object => "object",
        };
        f.write_str(name)
    }
}

/// A value already converted to a property's declared type
#[derive(Debug, Clone)]
pub enum PropertyValue {
    String(String),
    Bool(bool),
    Char(char),
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    F32(f32),
    F64(f64),
    /// Enumeration member, by ordinal and canonical name
    Enum { index: usize, name: &'static str },
    /// Referenced managed object
    Object(Instance),
}

impl PropertyValue {
    /// The `PropertyType` this value satisfies
    pub fn property_type(&self) -> PropertyType {
        match self {
            Self::String(_) => PropertyType::String,
            Self::Bool(_) => PropertyType::Bool,
            Self::Char(_) => PropertyType::Char,
            Self::I8(_) => PropertyType::I8,
            Self::I16(_) => PropertyType::I16,
            Self::I32(_) => PropertyType::I32,
            Self::I64(_) => PropertyType::I64,
            Self::U8(_) => PropertyType::U8,
            Self::U16(_) => PropertyType::U16,
            Self::U32(_) => PropertyType::U32,
            Self::U64(_) => PropertyType::U64,
            Self::F32(_) => PropertyType::F32,
            Self::F64(_) => PropertyType::F64,
            Self::Enum { .. } => PropertyType::Enum(&[]),
            Self::Object(_) => PropertyType::Object,
        }
    }

    /// Ordinal of an enumeration value
    pub fn into_enum_index(self) -> Result<usize> {
        match self {
            Self::Enum { index, .. } => Ok(index),
            other => Err(Error::type_mismatch("enum", other.property_type().to_string())),
        }
    }

    /// Referenced instance of an object value
    pub fn into_instance(self) -> Result<Instance> {
        match self {
            Self::Object(instance) => Ok(instance),
            other => Err(Error::type_mismatch("object", other.property_type().to_string())),
        }
    }
}

macro_rules! impl_try_from_property_value {
    ($($variant:ident => $ty:ty),* $(,)?) => {
        $(
            impl TryFrom<PropertyValue> for $ty {
                type Error = Error;

                fn try_from(value: PropertyValue) -> Result<Self> {
                    match value {
                        PropertyValue::$variant(inner) => Ok(inner),
                        other => Err(Error::type_mismatch(
                            stringify!($ty),
                            other.property_type().to_string(),
                        )),
                    }
                }
            }
        )*
    };
}

impl_try_from_property_value! {
    String => String,
    Bool => bool,
    Char => char,
    I8 => i8,
    I16 => i16,
    I32 => i32,
    I64 => i64,
    U8 => u8,
    U16 => u16,
    U32 => u32,
    U64 => u64,
    F32 => f32,
    F64 => f64,
}
