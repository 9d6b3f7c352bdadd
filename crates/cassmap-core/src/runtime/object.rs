use super::{ExecutionContext, Identity, ObjectState};
use crate::{
    schema::app::{self, ClassId},
    stmt::{ObjectRef, Value},
    Result,
};
use indexmap::{map::Entry, IndexMap};
use std::collections::HashMap;

/// An in-memory object: field values plus the composites it embeds.
#[derive(Debug, Clone)]
pub struct Object {
    class: ClassId,
    reference: ObjectRef,
    fields: Vec<Value>,
    embedded: HashMap<usize, Object>,
    owners: Vec<ObjectRef>,
    version: Option<Value>,
    identity: Option<Identity>,
}

/// An identity map of [`Object`]s.
#[derive(Debug)]
pub struct Objects<'a> {
    schema: &'a app::Schema,
    objects: IndexMap<ObjectRef, Object>,
}

impl Object {
    /// An object of `class` with every field null.
    pub fn new(schema: &app::Schema, class: ClassId, reference: impl Into<ObjectRef>) -> Object {
        Object {
            class,
            reference: reference.into(),
            fields: vec![Value::Null; schema.class(class).fields.len()],
            embedded: HashMap::new(),
            owners: vec![],
            version: None,
            identity: None,
        }
    }

    pub fn with_field(mut self, field: usize, value: impl Into<Value>) -> Object {
        self.fields[field] = value.into();
        self
    }

    /// Sets the composite held by an embedded field. The composite records
    /// this object as its owner.
    pub fn with_embedded(mut self, field: usize, mut object: Object) -> Object {
        object.owners = vec![self.reference.clone()];
        self.embedded.insert(field, object);
        self
    }

    pub fn with_identity(mut self, identity: Identity) -> Object {
        self.identity = Some(identity);
        self
    }

    pub fn with_version(mut self, version: impl Into<Value>) -> Object {
        self.version = Some(version.into());
        self
    }

    pub fn field(&self, field: usize) -> &Value {
        &self.fields[field]
    }

    pub fn embedded_object(&self, field: usize) -> Option<&Object> {
        self.embedded.get(&field)
    }
}

impl ObjectState for Object {
    fn class(&self) -> ClassId {
        self.class
    }

    fn object_ref(&self) -> ObjectRef {
        self.reference.clone()
    }

    fn provide_field(&self, field: usize) -> Value {
        self.fields[field].clone()
    }

    fn replace_field(&mut self, field: usize, value: Value) {
        self.fields[field] = value;
    }

    fn embedded(&mut self, field: usize) -> Option<&mut dyn ObjectState> {
        self.embedded
            .get_mut(&field)
            .map(|object| object as &mut dyn ObjectState)
    }

    fn embedded_owners(&self) -> Vec<ObjectRef> {
        self.owners.clone()
    }

    fn version(&self) -> Option<Value> {
        self.version.clone()
    }

    fn set_version(&mut self, version: Value) {
        self.version = Some(version);
    }

    fn identity(&self) -> Option<Identity> {
        self.identity.clone()
    }
}

impl<'a> Objects<'a> {
    pub fn new(schema: &'a app::Schema) -> Objects<'a> {
        Objects {
            schema,
            objects: IndexMap::new(),
        }
    }

    pub fn insert(&mut self, object: Object) {
        self.objects.insert(object.reference.clone(), object);
    }

    pub fn get(&self, reference: &ObjectRef) -> Option<&Object> {
        self.objects.get(reference)
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

impl ExecutionContext for Objects<'_> {
    fn find_object(
        &mut self,
        class: ClassId,
        identity: Identity,
        load: &mut dyn FnMut(&mut dyn ObjectState) -> Result<()>,
    ) -> Result<&mut dyn ObjectState> {
        let class_name = self.schema.class(class).name.upper_camel_case();
        let reference = identity.object_ref(&class_name);

        let object = match self.objects.entry(reference) {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => {
                let mut object = Object::new(self.schema, class, entry.key().clone())
                    .with_identity(identity);
                load(&mut object)?;
                entry.insert(object)
            }
        };

        Ok(object as &mut dyn ObjectState)
    }
}
