use crate::{schema::app::ClassId, stmt};

/// Declared collection interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectionKind {
    /// Ordered, duplicates allowed
    List,

    /// Unique elements
    Set,

    /// Unspecified collection. Unique unless ordering is requested.
    Collection,
}

/// What a container holds.
#[derive(Debug, Clone)]
pub enum Element {
    /// Non-persistable values
    Value(stmt::Type),

    /// References to persisted objects
    Reference(ClassId),

    /// Composite objects. Never column mapped.
    Embedded(ClassId),
}

#[derive(Debug, Clone)]
pub struct FieldCollection {
    pub kind: CollectionKind,
    pub element: Element,

    /// Store each element serialized into a blob
    pub serialized_element: bool,

    /// Ordering was requested for the collection
    pub ordered: bool,

    /// Reference collection on either side of a bidirectional many-to-many relation
    pub many_to_many: bool,
}

#[derive(Debug, Clone)]
pub struct FieldMap {
    pub key: Element,
    pub value: Element,
    pub serialized_key: bool,
    pub serialized_value: bool,
}

#[derive(Debug, Clone)]
pub struct FieldArray {
    pub element: Element,
    pub serialized_element: bool,
}

impl Element {
    pub fn is_reference(&self) -> bool {
        matches!(self, Element::Reference(_))
    }

    pub fn is_embedded(&self) -> bool {
        matches!(self, Element::Embedded(_))
    }
}

impl FieldCollection {
    pub fn new(kind: CollectionKind, element: Element) -> FieldCollection {
        FieldCollection {
            kind,
            element,
            serialized_element: false,
            ordered: false,
            many_to_many: false,
        }
    }
}

impl FieldMap {
    pub fn new(key: Element, value: Element) -> FieldMap {
        FieldMap {
            key,
            value,
            serialized_key: false,
            serialized_value: false,
        }
    }
}

impl FieldArray {
    pub fn new(element: Element) -> FieldArray {
        FieldArray {
            element,
            serialized_element: false,
        }
    }
}
