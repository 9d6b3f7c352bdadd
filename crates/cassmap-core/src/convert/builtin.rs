use super::{Converter, Repr};
use crate::{stmt::Value, Error, Result};
use jiff::{civil, tz::TimeZone, Timestamp, Zoned};
use rust_decimal::{
    prelude::{FromPrimitive, ToPrimitive},
    Decimal,
};

type Convert = fn(Value) -> Result<Value>;

/// A converter built from a pair of conversion functions.
#[derive(Debug)]
pub(super) struct Builtin {
    name: String,
    member: &'static str,
    repr: Repr,
    to_datastore: Convert,
    to_member: Convert,
}

impl Builtin {
    fn new(member: &'static str, repr: Repr, to_datastore: Convert, to_member: Convert) -> Builtin {
        let repr_name = match repr {
            Repr::String => "string",
            Repr::Long => "long",
            Repr::Integer => "integer",
            Repr::Double => "double",
            Repr::Float => "float",
            Repr::Boolean => "boolean",
            Repr::Timestamp => "timestamp",
            Repr::Bytes => "bytes",
        };

        Builtin {
            name: format!("{member}_to_{repr_name}"),
            member,
            repr,
            to_datastore,
            to_member,
        }
    }
}

impl Converter for Builtin {
    fn name(&self) -> &str {
        &self.name
    }

    fn member_type(&self) -> &str {
        self.member
    }

    fn repr(&self) -> Repr {
        self.repr
    }

    fn to_datastore(&self, value: Value) -> Result<Value> {
        if value.is_null() {
            return Ok(Value::Null);
        }
        (self.to_datastore)(value)
    }

    fn to_member(&self, value: Value) -> Result<Value> {
        if value.is_null() {
            return Ok(Value::Null);
        }
        (self.to_member)(value)
    }
}

/// Every built-in converter.
///
/// Each declared type with a fixed physical type has a converter to that
/// type's representation. Temporal and numeric types, `char` and `uuid`
/// also convert to strings.
pub(super) fn converters() -> Vec<Builtin> {
    vec![
        // Fixed representations
        Builtin::new(
            "bool",
            Repr::Boolean,
            |v| expect_bool(v).map(Value::Bool),
            |v| expect_bool(v).map(Value::Bool),
        ),
        Builtin::new(
            "i8",
            Repr::Integer,
            |v| match v {
                Value::I8(v) => Ok(Value::I32(v.into())),
                v => Err(Error::type_conversion(v, "I32")),
            },
            |v| {
                let n = expect_i32(v)?;
                i8::try_from(n)
                    .map(Value::I8)
                    .map_err(|_| Error::type_conversion(Value::I32(n), "I8"))
            },
        ),
        Builtin::new(
            "i16",
            Repr::Integer,
            |v| match v {
                Value::I16(v) => Ok(Value::I32(v.into())),
                v => Err(Error::type_conversion(v, "I32")),
            },
            |v| {
                let n = expect_i32(v)?;
                i16::try_from(n)
                    .map(Value::I16)
                    .map_err(|_| Error::type_conversion(Value::I32(n), "I16"))
            },
        ),
        Builtin::new(
            "i32",
            Repr::Integer,
            |v| expect_i32(v).map(Value::I32),
            |v| expect_i32(v).map(Value::I32),
        ),
        Builtin::new(
            "i64",
            Repr::Long,
            |v| expect_i64(v).map(Value::I64),
            |v| expect_i64(v).map(Value::I64),
        ),
        Builtin::new(
            "f32",
            Repr::Float,
            |v| match v {
                Value::F32(v) => Ok(Value::F32(v)),
                v => Err(Error::type_conversion(v, "F32")),
            },
            |v| match v {
                Value::F32(v) => Ok(Value::F32(v)),
                v => Err(Error::type_conversion(v, "F32")),
            },
        ),
        Builtin::new(
            "f64",
            Repr::Double,
            |v| expect_f64(v).map(Value::F64),
            |v| expect_f64(v).map(Value::F64),
        ),
        Builtin::new(
            "char",
            Repr::String,
            |v| match v {
                Value::Char(c) => Ok(Value::String(c.to_string())),
                v => Err(Error::type_conversion(v, "String")),
            },
            |v| {
                let s = expect_string(v)?;
                let mut chars = s.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Ok(Value::Char(c)),
                    _ => Err(Error::type_conversion(Value::String(s), "Char")),
                }
            },
        ),
        Builtin::new(
            "string",
            Repr::String,
            |v| expect_string(v).map(Value::String),
            |v| expect_string(v).map(Value::String),
        ),
        Builtin::new(
            "timezone",
            Repr::String,
            |v| expect_string(v).map(Value::String),
            |v| expect_string(v).map(Value::String),
        ),
        Builtin::new(
            "locale",
            Repr::String,
            |v| expect_string(v).map(Value::String),
            |v| expect_string(v).map(Value::String),
        ),
        Builtin::new(
            "bigint",
            Repr::Long,
            |v| match v {
                Value::BigInt(n) => i64::try_from(n)
                    .map(Value::I64)
                    .map_err(|_| Error::type_conversion(Value::BigInt(n), "I64")),
                v => Err(Error::type_conversion(v, "I64")),
            },
            |v| expect_i64(v).map(|n| Value::BigInt(n.into())),
        ),
        Builtin::new(
            "decimal",
            Repr::Double,
            |v| match v {
                Value::Decimal(d) => d
                    .to_f64()
                    .map(Value::F64)
                    .ok_or_else(|| Error::type_conversion(Value::Decimal(d), "F64")),
                v => Err(Error::type_conversion(v, "F64")),
            },
            |v| {
                let f = expect_f64(v)?;
                Decimal::from_f64(f)
                    .map(Value::Decimal)
                    .ok_or_else(|| Error::type_conversion(Value::F64(f), "Decimal"))
            },
        ),
        Builtin::new(
            "timestamp",
            Repr::Timestamp,
            |v| expect_timestamp(v).map(Value::Timestamp),
            |v| expect_timestamp(v).map(Value::Timestamp),
        ),
        Builtin::new(
            "zoned",
            Repr::Timestamp,
            |v| match v {
                Value::Zoned(z) => Ok(Value::Timestamp(z.timestamp())),
                v => Err(Error::type_conversion(v, "Timestamp")),
            },
            |v| Ok(Value::Zoned(expect_timestamp(v)?.to_zoned(TimeZone::UTC))),
        ),
        Builtin::new(
            "date",
            Repr::Timestamp,
            |v| match v {
                Value::Date(d) => Ok(Value::Timestamp(d.to_zoned(TimeZone::UTC)?.timestamp())),
                v => Err(Error::type_conversion(v, "Timestamp")),
            },
            |v| Ok(Value::Date(expect_timestamp(v)?.to_zoned(TimeZone::UTC).date())),
        ),
        Builtin::new(
            "time",
            Repr::Timestamp,
            |v| match v {
                Value::Time(t) => {
                    let at = epoch_day().to_datetime(t).to_zoned(TimeZone::UTC)?;
                    Ok(Value::Timestamp(at.timestamp()))
                }
                v => Err(Error::type_conversion(v, "Timestamp")),
            },
            |v| Ok(Value::Time(expect_timestamp(v)?.to_zoned(TimeZone::UTC).time())),
        ),
        Builtin::new(
            "datetime",
            Repr::Timestamp,
            |v| match v {
                Value::DateTime(dt) => {
                    Ok(Value::Timestamp(dt.to_zoned(TimeZone::UTC)?.timestamp()))
                }
                v => Err(Error::type_conversion(v, "Timestamp")),
            },
            |v| {
                let at = expect_timestamp(v)?.to_zoned(TimeZone::UTC);
                Ok(Value::DateTime(at.datetime()))
            },
        ),
        // String representations
        Builtin::new(
            "timestamp",
            Repr::String,
            |v| Ok(Value::String(expect_timestamp(v)?.to_string())),
            |v| Ok(Value::Timestamp(expect_string(v)?.parse::<Timestamp>()?)),
        ),
        Builtin::new(
            "zoned",
            Repr::String,
            |v| match v {
                Value::Zoned(z) => Ok(Value::String(z.to_string())),
                v => Err(Error::type_conversion(v, "String")),
            },
            |v| Ok(Value::Zoned(expect_string(v)?.parse::<Zoned>()?)),
        ),
        Builtin::new(
            "date",
            Repr::String,
            |v| match v {
                Value::Date(d) => Ok(Value::String(d.to_string())),
                v => Err(Error::type_conversion(v, "String")),
            },
            |v| Ok(Value::Date(expect_string(v)?.parse::<civil::Date>()?)),
        ),
        Builtin::new(
            "time",
            Repr::String,
            |v| match v {
                Value::Time(t) => Ok(Value::String(t.to_string())),
                v => Err(Error::type_conversion(v, "String")),
            },
            |v| Ok(Value::Time(expect_string(v)?.parse::<civil::Time>()?)),
        ),
        Builtin::new(
            "datetime",
            Repr::String,
            |v| match v {
                Value::DateTime(dt) => Ok(Value::String(dt.to_string())),
                v => Err(Error::type_conversion(v, "String")),
            },
            |v| Ok(Value::DateTime(expect_string(v)?.parse::<civil::DateTime>()?)),
        ),
        Builtin::new(
            "uuid",
            Repr::String,
            |v| match v {
                Value::Uuid(id) => Ok(Value::String(id.to_string())),
                v => Err(Error::type_conversion(v, "String")),
            },
            |v| Ok(Value::Uuid(expect_string(v)?.parse::<uuid::Uuid>()?)),
        ),
        Builtin::new(
            "bigint",
            Repr::String,
            |v| match v {
                Value::BigInt(n) => Ok(Value::String(n.to_string())),
                v => Err(Error::type_conversion(v, "String")),
            },
            |v| {
                let s = expect_string(v)?;
                s.parse::<i128>()
                    .map(Value::BigInt)
                    .map_err(|_| Error::type_conversion(Value::String(s), "BigInt"))
            },
        ),
        Builtin::new(
            "decimal",
            Repr::String,
            |v| match v {
                Value::Decimal(d) => Ok(Value::String(d.to_string())),
                v => Err(Error::type_conversion(v, "String")),
            },
            |v| {
                let s = expect_string(v)?;
                s.parse::<Decimal>()
                    .map(Value::Decimal)
                    .map_err(|_| Error::type_conversion(Value::String(s), "Decimal"))
            },
        ),
        // Epoch milliseconds
        Builtin::new(
            "timestamp",
            Repr::Long,
            |v| Ok(Value::I64(expect_timestamp(v)?.as_millisecond())),
            |v| Ok(Value::Timestamp(Timestamp::from_millisecond(expect_i64(v)?)?)),
        ),
    ]
}

fn epoch_day() -> civil::Date {
    civil::date(1970, 1, 1)
}

fn expect_bool(value: Value) -> Result<bool> {
    match value {
        Value::Bool(v) => Ok(v),
        v => Err(Error::type_conversion(v, "Bool")),
    }
}

fn expect_i32(value: Value) -> Result<i32> {
    match value {
        Value::I32(v) => Ok(v),
        v => Err(Error::type_conversion(v, "I32")),
    }
}

fn expect_i64(value: Value) -> Result<i64> {
    match value {
        Value::I64(v) => Ok(v),
        v => Err(Error::type_conversion(v, "I64")),
    }
}

fn expect_f64(value: Value) -> Result<f64> {
    match value {
        Value::F64(v) => Ok(v),
        v => Err(Error::type_conversion(v, "F64")),
    }
}

fn expect_string(value: Value) -> Result<String> {
    value.to_string_value()
}

fn expect_timestamp(value: Value) -> Result<Timestamp> {
    Timestamp::try_from(value)
}
