use super::TableId;
use crate::{convert::Converter, schema::app::EmbedChain};
use std::{fmt, sync::Arc};

#[derive(Debug, Clone)]
pub struct Column {
    /// Uniquely identifies the column in the schema.
    pub id: ColumnId,

    /// Lower-cased name of the column in the table.
    pub name: String,

    /// The physical column type.
    pub ty: super::Type,

    /// Converter between field values and the column's representation.
    pub converter: Option<Arc<dyn Converter>>,

    /// Name of the index on this column, if any.
    pub index: Option<String>,

    /// True if the column is part of the table's primary key
    pub primary_key: bool,

    /// What the column stores
    pub role: ColumnRole,
}

/// What a column holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnRole {
    /// A field value, reached through the chain of embedded fields
    Field(EmbedChain),

    /// Stands in for a container of composites. Receives only nulls and is
    /// never created as a physical column.
    Placeholder(EmbedChain),

    /// Surrogate identity
    DatastoreId,

    /// Surrogate version
    Version,

    /// Inheritance discriminator
    Discriminator,

    /// Multitenancy discriminator
    Tenant,
}

#[derive(PartialEq, Eq, Clone, Copy, Hash)]
pub struct ColumnId {
    pub table: TableId,
    pub index: usize,
}

impl Column {
    /// True when the column exists in the physical table.
    pub fn is_physical(&self) -> bool {
        !matches!(self.role, ColumnRole::Placeholder(_))
    }

    pub fn chain(&self) -> Option<&EmbedChain> {
        match &self.role {
            ColumnRole::Field(chain) | ColumnRole::Placeholder(chain) => Some(chain),
            _ => None,
        }
    }
}

impl From<&Column> for ColumnId {
    fn from(value: &Column) -> Self {
        value.id
    }
}

impl fmt::Debug for ColumnId {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "ColumnId({}/{})", self.table.0, self.index)
    }
}
