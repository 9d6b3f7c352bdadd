use super::{Class, ClassId, Element, Field, FieldTy, Schema};
use crate::{Error, Result};

struct Verify<'a> {
    schema: &'a Schema,
}

impl Schema {
    /// Checks that every id the class model refers to resolves.
    pub(super) fn verify(&self) -> Result<()> {
        Verify { schema: self }.verify()
    }
}

impl Verify<'_> {
    fn verify(&self) -> Result<()> {
        for class in self.schema.classes() {
            for (position, field) in class.fields.iter().enumerate() {
                self.verify_field_id(class, position, field)?;
                self.verify_targets(class, field)?;
            }

            self.verify_version_field(class)?;
        }

        Ok(())
    }

    fn verify_field_id(&self, class: &Class, position: usize, field: &Field) -> Result<()> {
        if field.id.class != class.id || field.id.index != position {
            return Err(Error::invalid_schema(format!(
                "field `{}` of class `{}` has id {:?} but is declared at position {position}",
                field.name.app_name,
                class.name.upper_camel_case(),
                field.id,
            )));
        }

        Ok(())
    }

    fn verify_targets(&self, class: &Class, field: &Field) -> Result<()> {
        let targets: Vec<ClassId> = match &field.ty {
            FieldTy::Primitive(_) => vec![],
            FieldTy::Embedded(embedded) => vec![embedded.target],
            FieldTy::Reference(reference) => vec![reference.target],
            FieldTy::Collection(collection) => element_target(&collection.element)
                .into_iter()
                .collect(),
            FieldTy::Array(array) => element_target(&array.element).into_iter().collect(),
            FieldTy::Map(map) => element_target(&map.key)
                .into_iter()
                .chain(element_target(&map.value))
                .collect(),
        };

        for target in targets {
            if !self.schema.classes.contains_key(&target) {
                return Err(Error::invalid_schema(format!(
                    "field `{}.{}` refers to unknown class {target:?}",
                    class.name.upper_camel_case(),
                    field.name.app_name,
                )));
            }
        }

        Ok(())
    }

    fn verify_version_field(&self, class: &Class) -> Result<()> {
        let Some(field) = class
            .as_root()
            .and_then(|root| root.version.as_ref())
            .and_then(|version| version.field)
        else {
            return Ok(());
        };

        if field.class != class.id || field.index >= class.fields.len() {
            return Err(Error::invalid_schema(format!(
                "version field {field:?} of class `{}` is not one of its fields",
                class.name.upper_camel_case(),
            )));
        }

        Ok(())
    }
}

fn element_target(element: &Element) -> Option<ClassId> {
    match element {
        Element::Value(_) => None,
        Element::Reference(target) | Element::Embedded(target) => Some(*target),
    }
}
