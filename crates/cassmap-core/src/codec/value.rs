use super::Codec;
use crate::{
    convert::Repr,
    driver::Row,
    schema::{
        app::{Element, Field, FieldTy},
        db::{self, Column},
    },
    stmt::{self, ObjectRef, Value, ValueEnum},
    Error, Result,
};

/// What a single stored value is declared as.
#[derive(Debug, Clone, Copy)]
enum Declared<'a> {
    Scalar(&'a stmt::Type),
    Reference,
    Serialized,
    Other,
}

/// How a field's value is laid out in its column.
#[derive(Debug, Clone, Copy)]
enum Layout<'a> {
    Single(Declared<'a>),
    Elements(Declared<'a>),
    Entries(Declared<'a>, Declared<'a>),
}

impl<'a> Declared<'a> {
    fn of_element(element: &'a Element, serialized: bool) -> Declared<'a> {
        match element {
            _ if serialized => Declared::Serialized,
            Element::Value(ty) => Declared::Scalar(ty),
            Element::Reference(_) => Declared::Reference,
            Element::Embedded(_) => Declared::Other,
        }
    }
}

impl<'a> Layout<'a> {
    fn of(field: &'a Field) -> Layout<'a> {
        if field.serialized {
            return Layout::Single(Declared::Serialized);
        }

        match &field.ty {
            FieldTy::Primitive(primitive) => Layout::Single(Declared::Scalar(&primitive.ty)),
            FieldTy::Reference(_) => Layout::Single(Declared::Reference),
            FieldTy::Embedded(_) => Layout::Single(Declared::Other),
            FieldTy::Collection(collection) => Layout::Elements(Declared::of_element(
                &collection.element,
                collection.serialized_element,
            )),
            FieldTy::Array(array) => {
                Layout::Elements(Declared::of_element(&array.element, array.serialized_element))
            }
            FieldTy::Map(map) => Layout::Entries(
                Declared::of_element(&map.key, map.serialized_key),
                Declared::of_element(&map.value, map.serialized_value),
            ),
        }
    }
}

impl Codec<'_> {
    /// Field value to the value bound to `column`.
    pub(super) fn write_column(
        &self,
        field: &Field,
        column: &Column,
        value: Value,
    ) -> Result<Value> {
        if value.is_null() {
            return Ok(Value::Null);
        }

        if let Some(converter) = &column.converter {
            return converter.to_datastore(value);
        }

        match (Layout::of(field), value, &column.ty) {
            (
                Layout::Elements(declared),
                Value::List(items),
                db::Type::List(ty) | db::Type::Set(ty),
            ) => {
                let items = items
                    .into_iter()
                    .map(|item| self.write_value(declared, ty, item))
                    .collect::<Result<_>>()?;
                Ok(Value::List(items))
            }
            (Layout::Entries(key, val), Value::Map(entries), db::Type::Map(key_ty, val_ty)) => {
                let entries = entries
                    .into_iter()
                    .map(|(k, v)| {
                        Ok((
                            self.write_value(key, key_ty, k)?,
                            self.write_value(val, val_ty, v)?,
                        ))
                    })
                    .collect::<Result<_>>()?;
                Ok(Value::Map(entries))
            }
            (Layout::Single(declared), value, ty) => self.write_value(declared, ty, value),
            (_, value, _) => Ok(value),
        }
    }

    /// Special cases first, then a string or long converter for the
    /// declared type, else the value unchanged.
    fn write_value(
        &self,
        declared: Declared<'_>,
        physical: &db::Type,
        value: Value,
    ) -> Result<Value> {
        if value.is_null() {
            return Ok(Value::Null);
        }

        if let Declared::Serialized = declared {
            return self.converters.serialized().to_datastore(value);
        }

        let as_string = *physical == db::Type::Varchar;
        let as_long = *physical == db::Type::BigInt;

        let value = match value {
            Value::Char(c) => Value::String(c.to_string()),
            Value::I8(v) if as_long => Value::I64(v.into()),
            Value::I16(v) if as_long => Value::I64(v.into()),
            Value::I8(v) => Value::I32(v.into()),
            Value::I16(v) => Value::I32(v.into()),
            Value::I32(v) if as_long => Value::I64(v.into()),
            Value::I64(v) if *physical == db::Type::Int => i32::try_from(v)
                .map(Value::I32)
                .map_err(|_| Error::type_conversion(Value::I64(v), "I32"))?,
            Value::BigInt(n) if !as_string => i64::try_from(n)
                .map(Value::I64)
                .map_err(|_| Error::type_conversion(Value::BigInt(n), "I64"))?,
            Value::Decimal(d) if !as_string => {
                self.convert_to(&stmt::Type::Decimal, Repr::Double, Value::Decimal(d))?
            }
            Value::Enum(ValueEnum { name, .. }) if as_string => Value::String(name),
            Value::Enum(variant) if as_long => i64::try_from(variant.ordinal)
                .map(Value::I64)
                .map_err(|_| Error::type_conversion(Value::Enum(variant), "I64"))?,
            Value::Enum(variant) => i32::try_from(variant.ordinal)
                .map(Value::I32)
                .map_err(|_| Error::type_conversion(Value::Enum(variant), "I32"))?,
            Value::Ref(reference) => Value::String(reference.as_str().to_string()),
            Value::Record(_) if *physical == db::Type::Blob => {
                self.converters.serialized().to_datastore(value)?
            }
            value => match temporal_ty(&value) {
                Some(ty) => {
                    let repr = match physical {
                        db::Type::Varchar => Repr::String,
                        db::Type::BigInt => Repr::Long,
                        _ => Repr::Timestamp,
                    };
                    self.convert_to(&ty, repr, value)?
                }
                None => match (declared, Repr::for_physical(physical)) {
                    (Declared::Scalar(ty), Some(repr @ (Repr::String | Repr::Long))) => {
                        match self.converters.find(ty, repr) {
                            Some(converter) => converter.to_datastore(value)?,
                            None => value,
                        }
                    }
                    _ => value,
                },
            },
        };

        Ok(value)
    }

    /// Reads `column` from `row` and converts it to the field's value.
    pub(super) fn read_column(&self, field: &Field, column: &Column, row: &Row) -> Result<Value> {
        let raw = row.get_typed(&column.name, &column.ty)?;

        if raw.is_null() {
            return Ok(Value::Null);
        }

        if let Some(converter) = &column.converter {
            return converter.to_member(raw);
        }

        match (Layout::of(field), raw) {
            (Layout::Elements(declared), Value::List(items)) => {
                let items = items
                    .into_iter()
                    .map(|item| self.read_value(declared, item))
                    .collect::<Result<_>>()?;
                Ok(Value::List(items))
            }
            (Layout::Entries(key, val), Value::Map(entries)) => {
                let entries = entries
                    .into_iter()
                    .map(|(k, v)| Ok((self.read_value(key, k)?, self.read_value(val, v)?)))
                    .collect::<Result<_>>()?;
                Ok(Value::Map(entries))
            }
            (Layout::Single(declared), raw) => self.read_value(declared, raw),
            (_, raw) => Ok(raw),
        }
    }

    /// Falls back on the raw value's kind: a converter from the declared type
    /// to that representation, else the raw value.
    fn read_value(&self, declared: Declared<'_>, raw: Value) -> Result<Value> {
        if raw.is_null() {
            return Ok(Value::Null);
        }

        match declared {
            Declared::Serialized => self.converters.serialized().to_member(raw),
            Declared::Reference => match raw {
                Value::String(reference) => Ok(Value::Ref(ObjectRef::new(reference))),
                raw => Ok(raw),
            },
            Declared::Scalar(stmt::Type::Enum(ty)) => {
                let variant = match &raw {
                    Value::I32(ordinal) => usize::try_from(*ordinal)
                        .ok()
                        .and_then(|ordinal| ValueEnum::from_ordinal(ty, ordinal)),
                    Value::I64(ordinal) => usize::try_from(*ordinal)
                        .ok()
                        .and_then(|ordinal| ValueEnum::from_ordinal(ty, ordinal)),
                    Value::String(name) => ValueEnum::from_name(ty, name),
                    _ => None,
                };
                variant
                    .map(Value::Enum)
                    .ok_or_else(|| Error::type_conversion(raw, "Enum"))
            }
            Declared::Scalar(ty @ (stmt::Type::I8 | stmt::Type::I16 | stmt::Type::I32)) => {
                match raw {
                    // Widened into a bigint column
                    Value::I64(n) => narrow(ty, n),
                    raw => self.read_converted(ty, raw),
                }
            }
            Declared::Scalar(ty) => self.read_converted(ty, raw),
            Declared::Other => Ok(raw),
        }
    }

    fn read_converted(&self, ty: &stmt::Type, raw: Value) -> Result<Value> {
        let converter = repr_of(&raw).and_then(|repr| self.converters.find(ty, repr));
        match converter {
            Some(converter) => converter.to_member(raw),
            None => Ok(raw),
        }
    }

    fn convert_to(&self, ty: &stmt::Type, repr: Repr, value: Value) -> Result<Value> {
        match self.converters.find(ty, repr) {
            Some(converter) => converter.to_datastore(value),
            None => Ok(value),
        }
    }
}

/// Narrows a value read from a bigint column to the declared integer type.
fn narrow(ty: &stmt::Type, n: i64) -> Result<Value> {
    let (narrowed, to_type) = match ty {
        stmt::Type::I8 => (i8::try_from(n).ok().map(Value::I8), "I8"),
        stmt::Type::I16 => (i16::try_from(n).ok().map(Value::I16), "I16"),
        stmt::Type::I32 => (i32::try_from(n).ok().map(Value::I32), "I32"),
        _ => return Ok(Value::I64(n)),
    };
    narrowed.ok_or_else(|| Error::type_conversion(Value::I64(n), to_type))
}

/// Declared type of a date/time value.
fn temporal_ty(value: &Value) -> Option<stmt::Type> {
    Some(match value {
        Value::Timestamp(_) => stmt::Type::Timestamp,
        Value::Zoned(_) => stmt::Type::Zoned,
        Value::Date(_) => stmt::Type::Date,
        Value::Time(_) => stmt::Type::Time,
        Value::DateTime(_) => stmt::Type::DateTime,
        _ => return None,
    })
}

/// Representation of a value returned by a column accessor.
fn repr_of(raw: &Value) -> Option<Repr> {
    Some(match raw {
        Value::String(_) => Repr::String,
        Value::I64(_) => Repr::Long,
        Value::I32(_) => Repr::Integer,
        Value::F64(_) => Repr::Double,
        Value::F32(_) => Repr::Float,
        Value::Bool(_) => Repr::Boolean,
        Value::Timestamp(_) => Repr::Timestamp,
        _ => return None,
    })
}
