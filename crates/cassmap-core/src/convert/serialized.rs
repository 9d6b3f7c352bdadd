use super::{Converter, Repr};
use crate::{stmt::Value, Error, Result};

/// Stores any value as a serialized byte blob.
#[derive(Debug, Default, Clone, Copy)]
pub struct SerializedConverter;

impl Converter for SerializedConverter {
    fn name(&self) -> &str {
        "serialized"
    }

    fn member_type(&self) -> &str {
        "*"
    }

    fn repr(&self) -> Repr {
        Repr::Bytes
    }

    fn to_datastore(&self, value: Value) -> Result<Value> {
        if value.is_null() {
            return Ok(Value::Null);
        }
        Ok(Value::Bytes(serde_json::to_vec(&value)?))
    }

    fn to_member(&self, value: Value) -> Result<Value> {
        match value {
            Value::Null => Ok(Value::Null),
            Value::Bytes(bytes) => Ok(serde_json::from_slice(&bytes)?),
            value => Err(Error::type_conversion(value, "Bytes")),
        }
    }
}
