use super::{Name, Statement};

use cassmap_core::schema::db::{Index, Table};

/// A statement to drop a secondary index.
#[derive(Debug, Clone)]
pub struct DropIndex {
    /// Name of the index, qualified by the table's keyspace.
    pub name: Name,

    /// Whether or not to add an `IF EXISTS` clause.
    pub if_exists: bool,
}

impl Statement {
    /// Drops an index of `table` if it exists.
    pub fn drop_index_if_exists(table: &Table, index: &Index) -> Self {
        DropIndex {
            name: Name::qualified(table.keyspace.as_deref(), &index.name),
            if_exists: true,
        }
        .into()
    }
}

impl From<DropIndex> for Statement {
    fn from(value: DropIndex) -> Self {
        Self::DropIndex(value)
    }
}
