use super::{TypeEnum, Value};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ValueEnum {
    /// Position of the variant in its declaration
    pub ordinal: usize,

    /// Variant name
    pub name: String,
}

impl ValueEnum {
    pub fn from_ordinal(ty: &TypeEnum, ordinal: usize) -> Option<ValueEnum> {
        let name = ty.variant_name(ordinal)?;
        Some(ValueEnum {
            ordinal,
            name: name.to_string(),
        })
    }

    pub fn from_name(ty: &TypeEnum, name: &str) -> Option<ValueEnum> {
        let ordinal = ty.ordinal_of(name)?;
        Some(ValueEnum {
            ordinal,
            name: name.to_string(),
        })
    }
}

impl From<ValueEnum> for Value {
    fn from(value: ValueEnum) -> Self {
        Value::Enum(value)
    }
}
