use crate::{schema::db, stmt::Value, Error, Result};
use indexmap::IndexMap;

/// One row of a result set, keyed by lower-cased column name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Row {
    columns: IndexMap<String, Value>,
}

macro_rules! accessor {
    ( $( $(#[$attr:meta])* $name:ident -> $ty:ty { $variant:ident } )* ) => {
        $(
            $(#[$attr])*
            pub fn $name(&self, column: &str) -> Result<Option<$ty>> {
                match self.raw(column)? {
                    Value::Null => Ok(None),
                    Value::$variant(v) => Ok(Some(v.clone())),
                    value => Err(Error::type_conversion(value.clone(), stringify!($variant))),
                }
            }
        )*
    };
}

impl Row {
    pub fn new() -> Row {
        Row::default()
    }

    pub fn with(mut self, column: &str, value: impl Into<Value>) -> Row {
        self.insert(column, value);
        self
    }

    pub fn insert(&mut self, column: &str, value: impl Into<Value>) {
        self.columns.insert(column.to_lowercase(), value.into());
    }

    pub fn contains(&self, column: &str) -> bool {
        self.columns.contains_key(&column.to_lowercase())
    }

    pub fn columns(&self) -> impl Iterator<Item = (&str, &Value)> + '_ {
        self.columns.iter().map(|(name, value)| (&name[..], value))
    }

    /// The value of a column, without any conversion.
    pub fn raw(&self, column: &str) -> Result<&Value> {
        self.columns
            .get(&column.to_lowercase())
            .ok_or_else(|| err!("row has no column `{column}`"))
    }

    accessor! {
        get_string -> String { String }
        get_int -> i32 { I32 }
        get_long -> i64 { I64 }
        get_float -> f32 { F32 }
        get_double -> f64 { F64 }
        get_bool -> bool { Bool }
        get_timestamp -> jiff::Timestamp { Timestamp }
        get_bytes -> Vec<u8> { Bytes }
    }

    /// Reads a column with the accessor of its physical type.
    ///
    /// Collection columns are returned as stored.
    pub fn get_typed(&self, column: &str, ty: &db::Type) -> Result<Value> {
        let value = match ty {
            db::Type::Varchar => self.get_string(column)?.into(),
            db::Type::Int => self.get_int(column)?.into(),
            db::Type::BigInt => self.get_long(column)?.into(),
            db::Type::Float => self.get_float(column)?.into(),
            db::Type::Double => self.get_double(column)?.into(),
            db::Type::Boolean => self.get_bool(column)?.into(),
            db::Type::Timestamp => self
                .get_timestamp(column)?
                .map(Value::Timestamp)
                .unwrap_or_default(),
            db::Type::Blob => self.get_bytes(column)?.into(),
            db::Type::List(_) | db::Type::Set(_) | db::Type::Map(..) => self.raw(column)?.clone(),
        };

        Ok(value)
    }
}

impl<S: Into<String>> FromIterator<(S, Value)> for Row {
    fn from_iter<T: IntoIterator<Item = (S, Value)>>(iter: T) -> Self {
        let mut row = Row::new();
        for (column, value) in iter {
            row.insert(&column.into(), value);
        }
        row
    }
}
