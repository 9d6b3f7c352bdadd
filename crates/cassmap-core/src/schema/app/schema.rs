use super::{Class, ClassId, Field, FieldId};
use crate::{Error, Result};
use indexmap::IndexMap;

#[derive(Debug, Default, Clone)]
pub struct Schema {
    pub classes: IndexMap<ClassId, Class>,
}

impl Schema {
    pub fn from_classes(classes: impl IntoIterator<Item = Class>) -> Result<Schema> {
        let mut schema = Schema::default();

        for class in classes {
            if schema.classes.contains_key(&class.id) {
                return Err(Error::invalid_schema(format!(
                    "duplicate class id {:?} ({})",
                    class.id,
                    class.name.upper_camel_case()
                )));
            }
            schema.classes.insert(class.id, class);
        }

        schema.verify()?;
        Ok(schema)
    }

    /// Get a field by ID
    pub fn field(&self, id: FieldId) -> &Field {
        self.class(id.class)
            .fields
            .get(id.index)
            .expect("invalid field ID")
    }

    pub fn classes(&self) -> impl Iterator<Item = &Class> {
        self.classes.values()
    }

    /// Classes with their own table.
    pub fn root_classes(&self) -> impl Iterator<Item = &Class> {
        self.classes().filter(|class| class.is_root())
    }

    /// Get a class by ID
    pub fn class(&self, id: impl Into<ClassId>) -> &Class {
        self.classes.get(&id.into()).expect("invalid class ID")
    }
}
