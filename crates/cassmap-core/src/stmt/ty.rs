use super::TypeEnum;

/// The declared value type of a scalar field, collection element, or map side.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Type {
    /// Boolean value
    Bool,

    /// Signed 8-bit integer
    I8,

    /// Signed 16-bit integer
    I16,

    /// Signed 32-bit integer
    I32,

    /// Signed 64-bit integer
    I64,

    /// 32-bit float
    F32,

    /// 64-bit float
    F64,

    /// A single character
    Char,

    /// String type
    String,

    /// Arbitrary precision integer
    BigInt,

    /// Arbitrary precision decimal
    Decimal,

    /// UUID
    Uuid,

    /// An instant in time
    Timestamp,

    /// An instant with a time zone (a calendar)
    Zoned,

    /// A civil date
    Date,

    /// A civil time of day
    Time,

    /// A civil date and time
    DateTime,

    /// A time zone identifier
    TimeZone,

    /// A locale tag
    Locale,

    /// An enumeration
    Enum(TypeEnum),

    /// A user type, only storable through a converter or serialization
    Custom(TypeCustom),
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeCustom {
    pub name: String,

    /// True when values of this type can be serialized into a blob
    pub serializable: bool,
}

impl Type {
    pub fn custom(name: impl Into<String>, serializable: bool) -> Type {
        Type::Custom(TypeCustom {
            name: name.into(),
            serializable,
        })
    }

    /// Name used to key converter lookups.
    pub fn name(&self) -> &str {
        match self {
            Type::Bool => "bool",
            Type::I8 => "i8",
            Type::I16 => "i16",
            Type::I32 => "i32",
            Type::I64 => "i64",
            Type::F32 => "f32",
            Type::F64 => "f64",
            Type::Char => "char",
            Type::String => "string",
            Type::BigInt => "bigint",
            Type::Decimal => "decimal",
            Type::Uuid => "uuid",
            Type::Timestamp => "timestamp",
            Type::Zoned => "zoned",
            Type::Date => "date",
            Type::Time => "time",
            Type::DateTime => "datetime",
            Type::TimeZone => "timezone",
            Type::Locale => "locale",
            Type::Enum(ty) => &ty.name,
            Type::Custom(ty) => &ty.name,
        }
    }

    pub fn is_enum(&self) -> bool {
        matches!(self, Type::Enum(_))
    }

    pub fn as_enum(&self) -> Option<&TypeEnum> {
        match self {
            Type::Enum(ty) => Some(ty),
            _ => None,
        }
    }

    /// Date and time family.
    pub fn is_temporal(&self) -> bool {
        matches!(
            self,
            Type::Timestamp | Type::Zoned | Type::Date | Type::Time | Type::DateTime
        )
    }

    /// Every built-in type serializes; user types opt in.
    pub fn is_serializable(&self) -> bool {
        match self {
            Type::Custom(ty) => ty.serializable,
            _ => true,
        }
    }
}
