use super::Type;

/// A declared enumeration: its name and variant names in ordinal order.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeEnum {
    pub name: String,
    pub variants: Vec<String>,
}

impl TypeEnum {
    pub fn new(
        name: impl Into<String>,
        variants: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            name: name.into(),
            variants: variants.into_iter().map(Into::into).collect(),
        }
    }

    /// Ordinal of the variant with the given name.
    pub fn ordinal_of(&self, name: &str) -> Option<usize> {
        self.variants.iter().position(|variant| variant == name)
    }

    pub fn variant_name(&self, ordinal: usize) -> Option<&str> {
        self.variants.get(ordinal).map(String::as_str)
    }
}

impl From<TypeEnum> for Type {
    fn from(value: TypeEnum) -> Self {
        Self::Enum(value)
    }
}
