use super::{Field, FieldId, Name};
use std::fmt;

/// A persistable class: an ordered set of fields plus table level options.
#[derive(Debug, Clone)]
pub struct Class {
    /// Uniquely identifies the class within the schema
    pub id: ClassId,

    /// Name of the class
    pub name: Name,

    /// Fields in declaration order. Names are unique.
    pub fields: Vec<Field>,

    /// Distinguishes classes with their own table from embeddable ones
    pub kind: ClassKind,
}

#[derive(Debug, Clone)]
pub enum ClassKind {
    /// Class stored in its own table
    Root(ClassRoot),

    /// Class only stored flattened into the row of an embedding object
    Embeddable,
}

#[derive(Debug, Clone)]
pub struct ClassRoot {
    /// How objects of the class are identified
    pub identity: IdentityKind,

    /// Explicit table name. Defaults to the snake-cased class name.
    pub table_name: Option<String>,

    /// Keyspace holding the table. Defaults to the configured keyspace.
    pub keyspace: Option<String>,

    /// Optimistic concurrency versioning
    pub version: Option<Version>,

    /// Single-table inheritance discriminator
    pub discriminator: Option<Discriminator>,

    /// Class level index declarations
    pub indices: Vec<ClassIndex>,

    /// Opts the class out of the tenant column when multitenancy is active
    pub multitenancy_disabled: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentityKind {
    /// Key fields marked `primary_key`
    Application,

    /// A surrogate key column generated by the store layer
    Datastore,

    /// Objects have no persistent identity
    None,
}

#[derive(Debug, Clone)]
pub struct Version {
    pub strategy: VersionStrategy,

    /// Field holding the version. `None` uses a surrogate column.
    pub field: Option<FieldId>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionStrategy {
    /// Incrementing number
    Number,

    /// Timestamp of the last update
    DateTime,
}

#[derive(Debug, Clone)]
pub struct Discriminator {
    /// Column name. Defaults to `dtype`.
    pub column: Option<String>,

    /// Value stored for objects of this class
    pub value: String,
}

#[derive(Debug, Clone)]
pub struct ClassIndex {
    pub name: Option<String>,

    /// Field names or column names covered by the index
    pub columns: Vec<String>,
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct ClassId(pub usize);

impl Class {
    pub fn is_root(&self) -> bool {
        matches!(self.kind, ClassKind::Root(_))
    }

    pub fn as_root(&self) -> Option<&ClassRoot> {
        match &self.kind {
            ClassKind::Root(root) => Some(root),
            ClassKind::Embeddable => None,
        }
    }

    #[track_caller]
    pub fn expect_root(&self) -> &ClassRoot {
        match &self.kind {
            ClassKind::Root(root) => root,
            ClassKind::Embeddable => {
                panic!("expected root class; class={}", self.name.upper_camel_case())
            }
        }
    }

    pub fn field(&self, field: impl Into<FieldId>) -> &Field {
        let field_id = field.into();
        assert_eq!(self.id, field_id.class);
        &self.fields[field_id.index]
    }

    pub fn field_by_name(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|field| field.name.app_name == name)
    }

    /// Key fields, in declaration order.
    pub fn primary_key_fields(&self) -> impl Iterator<Item = &Field> + '_ {
        self.fields.iter().filter(|field| field.primary_key)
    }
}

impl ClassId {
    /// Create a `FieldId` representing the current class's field at index
    /// `index`.
    pub const fn field(self, index: usize) -> FieldId {
        FieldId { class: self, index }
    }
}

impl From<&Class> for ClassId {
    fn from(value: &Class) -> Self {
        value.id
    }
}

impl From<&ClassId> for ClassId {
    fn from(src: &ClassId) -> ClassId {
        *src
    }
}

impl fmt::Debug for ClassId {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "ClassId({})", self.0)
    }
}
