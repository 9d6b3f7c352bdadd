use super::Value;
use serde::{Deserialize, Serialize};
use std::ops;

/// Field values of a composite object, in field declaration order.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValueRecord {
    pub fields: Vec<Value>,
}

impl ValueRecord {
    pub fn from_vec(fields: Vec<Value>) -> Self {
        Self { fields }
    }

    /// True when every field is null.
    pub fn is_all_null(&self) -> bool {
        self.fields.iter().all(Value::is_null)
    }
}

impl ops::Deref for ValueRecord {
    type Target = [Value];

    fn deref(&self) -> &Self::Target {
        &self.fields[..]
    }
}

impl ops::DerefMut for ValueRecord {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.fields[..]
    }
}

impl<'a> IntoIterator for &'a ValueRecord {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl From<ValueRecord> for Value {
    fn from(value: ValueRecord) -> Self {
        Value::Record(value)
    }
}
