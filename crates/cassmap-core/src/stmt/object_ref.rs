use serde::{Deserialize, Serialize};
use std::fmt;

/// Identity handle of an object managed by the object runtime.
///
/// The handle holds the string form of the object's identity. Two handles are
/// the same object if and only if they compare equal. A single-valued
/// reference column stores exactly this string.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ObjectRef(String);

impl ObjectRef {
    pub fn new(identity: impl Into<String>) -> ObjectRef {
        ObjectRef(identity.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ObjectRef {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "ObjectRef({})", self.0)
    }
}

impl fmt::Display for ObjectRef {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt.write_str(&self.0)
    }
}

impl From<&str> for ObjectRef {
    fn from(value: &str) -> Self {
        ObjectRef::new(value)
    }
}
