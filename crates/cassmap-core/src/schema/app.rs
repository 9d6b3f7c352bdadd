//! Logical class model, as produced by the metadata loader.

mod chain;
pub use chain::EmbedChain;

mod class;
pub use class::{
    Class, ClassId, ClassIndex, ClassKind, ClassRoot, Discriminator, IdentityKind, Version,
    VersionStrategy,
};

mod embedded;
pub use embedded::Embedded;

mod field;
pub use field::{
    CollectionKind, Element, Field, FieldArray, FieldCollection, FieldId, FieldIndex, FieldMap,
    FieldName, FieldPrimitive, FieldTy,
};

mod reference;
pub use reference::Reference;

mod relation;
pub use relation::{RelationKind, StorageShape};

mod schema;
pub use schema::Schema;

mod verify;

use super::Name;
