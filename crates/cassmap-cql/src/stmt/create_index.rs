use super::{Name, Statement};

use cassmap_core::schema::db::{Index, Table};

/// A single-column secondary index.
#[derive(Debug, Clone)]
pub struct CreateIndex {
    /// Name of the index
    pub name: String,

    /// Which table to index
    pub on: Name,

    /// The indexed column
    pub column: String,
}

impl Statement {
    pub fn create_index(table: &Table, index: &Index) -> Self {
        CreateIndex {
            name: index.name.clone(),
            on: Name::qualified(table.keyspace.as_deref(), &table.name),
            column: table.column(index.column).name.clone(),
        }
        .into()
    }
}

impl From<CreateIndex> for Statement {
    fn from(value: CreateIndex) -> Self {
        Self::CreateIndex(value)
    }
}
