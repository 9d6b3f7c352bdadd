use super::{ObjectRef, ValueEnum, ValueRecord};
use crate::{Error, Result};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A logical field value or a physical column value.
///
/// Physical values only use the variants a column accessor can produce:
/// `Bool`, `I32`, `I64`, `F32`, `F64`, `String`, `Timestamp`, `Bytes`,
/// `List`, `Map` and `Null`.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    /// Boolean value
    Bool(bool),

    /// Signed 8-bit integer
    I8(i8),

    /// Signed 16-bit integer
    I16(i16),

    /// Signed 32-bit integer
    I32(i32),

    /// Signed 64-bit integer
    I64(i64),

    /// 32-bit float
    F32(f32),

    /// 64-bit float
    F64(f64),

    /// Single character
    Char(char),

    /// String value
    String(String),

    /// Arbitrary precision integer
    BigInt(i128),

    /// Arbitrary precision decimal
    Decimal(Decimal),

    /// UUID value
    Uuid(uuid::Uuid),

    /// An instant in time
    Timestamp(jiff::Timestamp),

    /// An instant with a time zone
    Zoned(jiff::Zoned),

    /// A civil date
    Date(jiff::civil::Date),

    /// A civil time
    Time(jiff::civil::Time),

    /// A civil date and time
    DateTime(jiff::civil::DateTime),

    /// Binary data
    Bytes(Vec<u8>),

    /// Value of an enumerated type
    Enum(ValueEnum),

    /// Identity of another persisted object
    Ref(ObjectRef),

    /// Ordered list (or set) of values
    List(Vec<Value>),

    /// Map entries in insertion order
    Map(Vec<(Value, Value)>),

    /// Field values of a composite object
    Record(ValueRecord),

    /// Null value
    #[default]
    Null,
}

impl Value {
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Name of the variant, used in diagnostics.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Value::Bool(_) => "Bool",
            Value::I8(_) => "I8",
            Value::I16(_) => "I16",
            Value::I32(_) => "I32",
            Value::I64(_) => "I64",
            Value::F32(_) => "F32",
            Value::F64(_) => "F64",
            Value::Char(_) => "Char",
            Value::String(_) => "String",
            Value::BigInt(_) => "BigInt",
            Value::Decimal(_) => "Decimal",
            Value::Uuid(_) => "Uuid",
            Value::Timestamp(_) => "Timestamp",
            Value::Zoned(_) => "Zoned",
            Value::Date(_) => "Date",
            Value::Time(_) => "Time",
            Value::DateTime(_) => "DateTime",
            Value::Bytes(_) => "Bytes",
            Value::Enum(_) => "Enum",
            Value::Ref(_) => "Ref",
            Value::List(_) => "List",
            Value::Map(_) => "Map",
            Value::Record(_) => "Record",
            Value::Null => "Null",
        }
    }

    pub fn to_string_value(self) -> Result<String> {
        match self {
            Self::String(v) => Ok(v),
            value => Err(Error::type_conversion(value, "String")),
        }
    }
}

macro_rules! impl_from {
    ($( $ty:ty => $name:ident, )*) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Self::$name(value)
                }
            }
        )*
    };
}

impl_from! {
    bool => Bool,
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    f32 => F32,
    f64 => F64,
    char => Char,
    String => String,
    i128 => BigInt,
    Decimal => Decimal,
    uuid::Uuid => Uuid,
    Vec<u8> => Bytes,
    ObjectRef => Ref,
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl<T> From<Option<T>> for Value
where
    Value: From<T>,
{
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Value::from(value),
            None => Value::Null,
        }
    }
}
