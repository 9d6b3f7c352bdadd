use super::{Element, FieldTy};

/// How a field relates to other objects. Classified once from the field type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelationKind {
    /// Plain values: scalars and containers of scalars
    None,

    /// Single-valued composite
    Embedded,

    /// Container of composites
    EmbeddedMulti,

    /// Single-valued reference
    Reference,

    /// Container with reference keys, values or elements
    ReferenceMulti,
}

/// Physical layout family of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageShape {
    Scalar,
    Collection,
    Map,
    Array,
    Composite,
}

impl RelationKind {
    pub fn of(ty: &FieldTy) -> RelationKind {
        let (first, second) = match ty {
            FieldTy::Primitive(_) => return RelationKind::None,
            FieldTy::Embedded(_) => return RelationKind::Embedded,
            FieldTy::Reference(_) => return RelationKind::Reference,
            FieldTy::Collection(collection) => (&collection.element, None),
            FieldTy::Array(array) => (&array.element, None),
            FieldTy::Map(map) => (&map.key, Some(&map.value)),
        };

        let any = |pred: fn(&Element) -> bool| pred(first) || second.is_some_and(pred);

        if any(Element::is_embedded) {
            RelationKind::EmbeddedMulti
        } else if any(Element::is_reference) {
            RelationKind::ReferenceMulti
        } else {
            RelationKind::None
        }
    }

    pub fn is_none(self) -> bool {
        self == RelationKind::None
    }
}

impl StorageShape {
    pub fn of(ty: &FieldTy) -> StorageShape {
        match ty {
            FieldTy::Primitive(_) | FieldTy::Reference(_) => StorageShape::Scalar,
            FieldTy::Collection(_) => StorageShape::Collection,
            FieldTy::Map(_) => StorageShape::Map,
            FieldTy::Array(_) => StorageShape::Array,
            FieldTy::Embedded(_) => StorageShape::Composite,
        }
    }
}
