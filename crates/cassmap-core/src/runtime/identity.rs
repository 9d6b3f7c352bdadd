use crate::stmt::{ObjectRef, Value};
use std::fmt;

/// Identity of a persisted object.
#[derive(Debug, Clone, PartialEq)]
pub enum Identity {
    /// Values of the key fields, in key order
    Application(Vec<Value>),

    /// Surrogate key generated by the store layer
    Datastore(i64),
}

impl Identity {
    /// Handle of the object of class `class` with this identity.
    pub fn object_ref(&self, class: &str) -> ObjectRef {
        ObjectRef::new(format!("{class}:{self}"))
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Identity::Datastore(id) => write!(f, "{id}"),
            Identity::Application(values) => {
                for (i, value) in values.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    match value {
                        Value::String(v) => f.write_str(v)?,
                        Value::I32(v) => write!(f, "{v}")?,
                        Value::I64(v) => write!(f, "{v}")?,
                        Value::Uuid(v) => write!(f, "{v}")?,
                        Value::Ref(v) => write!(f, "{v}")?,
                        value => write!(f, "{value:?}")?,
                    }
                }
                Ok(())
            }
        }
    }
}
