use super::{ClassId, Schema};

/// A composite object whose fields are flattened into the enclosing row.
#[derive(Debug, Clone)]
pub struct Embedded {
    /// The embeddable class
    pub target: ClassId,

    /// Field of the embedded object pointing back at its owner. Falls back to
    /// the target's field marked `owner_link`.
    pub owner_field: Option<String>,
}

impl Embedded {
    pub fn new(target: ClassId) -> Embedded {
        Embedded {
            target,
            owner_field: None,
        }
    }

    /// Name of the owner back-reference field, if the embedding declares one.
    pub fn owner_field_name<'a>(&'a self, schema: &'a Schema) -> Option<&'a str> {
        if let Some(owner_field) = &self.owner_field {
            return Some(owner_field);
        }

        schema
            .class(self.target)
            .fields
            .iter()
            .find(|field| field.owner_link)
            .map(|field| &field.name.app_name[..])
    }
}
