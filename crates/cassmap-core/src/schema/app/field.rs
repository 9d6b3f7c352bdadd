mod collection;
pub use collection::{CollectionKind, Element, FieldArray, FieldCollection, FieldMap};

mod primitive;
pub use primitive::FieldPrimitive;

use super::{ClassId, Embedded, Reference, RelationKind, Schema, StorageShape};
use std::fmt;

#[derive(Debug, Clone)]
pub struct Field {
    /// Uniquely identifies the field within the containing class.
    pub id: FieldId,

    /// The field name
    pub name: FieldName,

    /// Scalar, container, composite or reference
    pub ty: FieldTy,

    /// Name of an explicit converter registered with the converter registry
    pub converter: Option<String>,

    /// Index on the field's column
    pub index: Option<FieldIndex>,

    /// True if the field is part of the primary key
    pub primary_key: bool,

    /// Store the whole value serialized into a blob
    pub serialized: bool,

    /// Marks a composite's field that points back at the object embedding it
    pub owner_link: bool,
}

#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FieldId {
    pub class: ClassId,
    pub index: usize,
}

#[derive(Debug, Clone)]
pub struct FieldName {
    pub app_name: String,

    /// Column name, if it differs from the field name
    pub storage_name: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct FieldIndex {
    pub name: Option<String>,
}

#[derive(Debug, Clone)]
pub enum FieldTy {
    Primitive(FieldPrimitive),
    Collection(FieldCollection),
    Map(FieldMap),
    Array(FieldArray),
    Embedded(Embedded),
    Reference(Reference),
}

impl FieldName {
    pub fn new(app_name: impl Into<String>) -> FieldName {
        FieldName {
            app_name: app_name.into(),
            storage_name: None,
        }
    }

    pub fn storage_name(&self) -> &str {
        self.storage_name.as_ref().unwrap_or(&self.app_name)
    }
}

impl Field {
    /// A field with no converter, index, key or serialization options.
    pub fn new(id: FieldId, name: &str, ty: impl Into<FieldTy>) -> Field {
        Field {
            id,
            name: FieldName::new(name),
            ty: ty.into(),
            converter: None,
            index: None,
            primary_key: false,
            serialized: false,
            owner_link: false,
        }
    }

    pub fn id(&self) -> FieldId {
        self.id
    }

    pub fn name(&self) -> &FieldName {
        &self.name
    }

    pub fn ty(&self) -> &FieldTy {
        &self.ty
    }

    /// Returns a fully qualified name for the field.
    pub fn full_name(&self, schema: &Schema) -> String {
        let class = schema.class(self.id.class);
        format!("{}.{}", class.name.upper_camel_case(), self.name.app_name)
    }

    pub fn relation_kind(&self) -> RelationKind {
        RelationKind::of(&self.ty)
    }

    pub fn shape(&self) -> StorageShape {
        StorageShape::of(&self.ty)
    }

    /// A composite flattened into the enclosing row.
    ///
    /// A serialized composite is stored whole in a single blob column instead.
    pub fn is_embedded(&self) -> bool {
        matches!(self.ty, FieldTy::Embedded(_)) && !self.serialized
    }

    /// A collection, map or array of composites. Never column mapped.
    pub fn is_embedded_container(&self) -> bool {
        self.relation_kind() == RelationKind::EmbeddedMulti
    }

    pub fn as_embedded(&self) -> Option<&Embedded> {
        match &self.ty {
            FieldTy::Embedded(embedded) => Some(embedded),
            _ => None,
        }
    }

    pub fn as_primitive(&self) -> Option<&FieldPrimitive> {
        match &self.ty {
            FieldTy::Primitive(primitive) => Some(primitive),
            _ => None,
        }
    }
}

impl FieldTy {
    #[track_caller]
    pub fn expect_embedded(&self) -> &Embedded {
        match self {
            FieldTy::Embedded(embedded) => embedded,
            _ => panic!("expected embedded field; actual={self:#?}"),
        }
    }
}

impl fmt::Debug for FieldId {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "FieldId({}/{})", self.class.0, self.index)
    }
}

impl From<&Field> for FieldId {
    fn from(value: &Field) -> Self {
        value.id
    }
}

impl From<&FieldId> for FieldId {
    fn from(value: &FieldId) -> Self {
        *value
    }
}

impl From<FieldPrimitive> for FieldTy {
    fn from(value: FieldPrimitive) -> Self {
        FieldTy::Primitive(value)
    }
}

impl From<FieldCollection> for FieldTy {
    fn from(value: FieldCollection) -> Self {
        FieldTy::Collection(value)
    }
}

impl From<FieldMap> for FieldTy {
    fn from(value: FieldMap) -> Self {
        FieldTy::Map(value)
    }
}

impl From<FieldArray> for FieldTy {
    fn from(value: FieldArray) -> Self {
        FieldTy::Array(value)
    }
}

impl From<Embedded> for FieldTy {
    fn from(value: Embedded) -> Self {
        FieldTy::Embedded(value)
    }
}

impl From<Reference> for FieldTy {
    fn from(value: Reference) -> Self {
        FieldTy::Reference(value)
    }
}
