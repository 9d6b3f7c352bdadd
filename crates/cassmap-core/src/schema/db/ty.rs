use crate::{stmt, Error, Result};
use std::{collections::HashMap, fmt, str::FromStr, sync::LazyLock};

/// Physical column type of the wide-column store.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Type {
    Boolean,
    Int,
    BigInt,
    Float,
    Double,
    Varchar,
    Timestamp,
    Blob,
    List(Box<Type>),
    Set(Box<Type>),
    Map(Box<Type>, Box<Type>),
}

/// Physical type of every declared type with a fixed mapping.
static DECLARED_TYPES: LazyLock<HashMap<stmt::Type, Type>> = LazyLock::new(|| {
    use stmt::Type as T;

    HashMap::from([
        (T::Bool, Type::Boolean),
        (T::I8, Type::Int),
        (T::I16, Type::Int),
        (T::I32, Type::Int),
        (T::Char, Type::Varchar),
        (T::String, Type::Varchar),
        (T::TimeZone, Type::Varchar),
        (T::Locale, Type::Varchar),
        (T::F64, Type::Double),
        (T::Decimal, Type::Double),
        (T::F32, Type::Float),
        (T::I64, Type::BigInt),
        (T::BigInt, Type::BigInt),
        (T::Timestamp, Type::Timestamp),
        (T::Zoned, Type::Timestamp),
        (T::Date, Type::Timestamp),
        (T::Time, Type::Timestamp),
        (T::DateTime, Type::Timestamp),
    ])
});

/// Legacy `system.schema_columns` validator class names.
static VALIDATOR_TYPES: LazyLock<HashMap<&'static str, Type>> = LazyLock::new(|| {
    HashMap::from([
        ("UTF8Type", Type::Varchar),
        ("AsciiType", Type::Varchar),
        ("LongType", Type::BigInt),
        ("Int32Type", Type::Int),
        ("DoubleType", Type::Double),
        ("FloatType", Type::Float),
        ("BooleanType", Type::Boolean),
        ("TimestampType", Type::Timestamp),
        ("DateType", Type::Timestamp),
        ("BytesType", Type::Blob),
    ])
});

impl Type {
    pub fn list(ty: Type) -> Type {
        Type::List(Box::new(ty))
    }

    pub fn set(ty: Type) -> Type {
        Type::Set(Box::new(ty))
    }

    pub fn map(key: Type, value: Type) -> Type {
        Type::Map(Box::new(key), Box::new(value))
    }

    /// The fixed physical type of a declared type, if it has one.
    pub fn for_declared(ty: &stmt::Type) -> Option<Type> {
        DECLARED_TYPES.get(ty).cloned()
    }

    /// Every declared type with a fixed physical type.
    pub fn declared_types() -> impl Iterator<Item = (&'static stmt::Type, &'static Type)> {
        DECLARED_TYPES.iter()
    }

    /// Parses a storage hint as used in field metadata.
    ///
    /// Accepts the physical type names plus the JDBC style aliases
    /// `longvarchar`, `decimal` and `integer`.
    pub fn from_hint(hint: &str) -> Result<Type> {
        match &hint.trim().to_ascii_lowercase()[..] {
            "longvarchar" | "char" => Ok(Type::Varchar),
            "decimal" | "numeric" => Ok(Type::Double),
            "integer" | "smallint" | "tinyint" => Ok(Type::Int),
            other => other.parse(),
        }
    }

    /// Parses a legacy validator class name such as
    /// `org.apache.cassandra.db.marshal.LongType`.
    pub fn from_validator(validator: &str) -> Option<Type> {
        let validator = validator.trim();
        let short = |name: &str| name.rsplit('.').next().unwrap_or(name).trim().to_string();

        if let Some((outer, args)) = validator.split_once('(') {
            let args = args.strip_suffix(')')?;
            let args = split_top_level(args);
            return match (&short(outer)[..], &args[..]) {
                ("ListType", [elem]) => Some(Type::list(Type::from_validator(elem)?)),
                ("SetType", [elem]) => Some(Type::set(Type::from_validator(elem)?)),
                ("MapType", [key, value]) => Some(Type::map(
                    Type::from_validator(key)?,
                    Type::from_validator(value)?,
                )),
                ("FrozenType", [inner]) => Type::from_validator(inner),
                _ => None,
            };
        }

        VALIDATOR_TYPES.get(&short(validator)[..]).cloned()
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::Boolean => f.write_str("boolean"),
            Type::Int => f.write_str("int"),
            Type::BigInt => f.write_str("bigint"),
            Type::Float => f.write_str("float"),
            Type::Double => f.write_str("double"),
            Type::Varchar => f.write_str("varchar"),
            Type::Timestamp => f.write_str("timestamp"),
            Type::Blob => f.write_str("blob"),
            Type::List(elem) => write!(f, "list<{elem}>"),
            Type::Set(elem) => write!(f, "set<{elem}>"),
            Type::Map(key, value) => write!(f, "map<{key},{value}>"),
        }
    }
}

impl FromStr for Type {
    type Err = Error;

    /// Parses a CQL type name. `text` is the same type as `varchar`, and
    /// `frozen<..>` is transparent.
    fn from_str(s: &str) -> Result<Type> {
        let s = s.trim().to_ascii_lowercase();

        if let Some((outer, args)) = s.split_once('<') {
            let args = args
                .strip_suffix('>')
                .ok_or_else(|| err!("malformed type `{s}`"))?;
            let args = split_top_level(args);

            return match (outer.trim(), &args[..]) {
                ("list", [elem]) => Ok(Type::list(elem.parse()?)),
                ("set", [elem]) => Ok(Type::set(elem.parse()?)),
                ("map", [key, value]) => Ok(Type::map(key.parse()?, value.parse()?)),
                ("frozen", [inner]) => inner.parse(),
                _ => Err(err!("unsupported type `{s}`")),
            };
        }

        match &s[..] {
            "boolean" => Ok(Type::Boolean),
            "int" => Ok(Type::Int),
            "bigint" => Ok(Type::BigInt),
            "float" => Ok(Type::Float),
            "double" => Ok(Type::Double),
            "varchar" | "text" => Ok(Type::Varchar),
            "timestamp" => Ok(Type::Timestamp),
            "blob" => Ok(Type::Blob),
            _ => Err(err!("unsupported type `{s}`")),
        }
    }
}

/// Splits type arguments on commas that are not nested in brackets.
fn split_top_level(args: &str) -> Vec<&str> {
    let mut parts = vec![];
    let mut depth = 0usize;
    let mut start = 0;

    for (i, c) in args.char_indices() {
        match c {
            '<' | '(' => depth += 1,
            '>' | ')' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                parts.push(args[start..i].trim());
                start = i + 1;
            }
            _ => {}
        }
    }

    parts.push(args[start..].trim());
    parts
}
