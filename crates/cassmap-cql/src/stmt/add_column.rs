use super::{ColumnDef, Name, Statement};

use cassmap_core::schema::db::{Column, Table};

/// A statement to add a column to a table.
#[derive(Debug, Clone)]
pub struct AddColumn {
    /// Table to add the column to.
    pub table: Name,

    /// Column definition.
    pub column: ColumnDef,
}

impl Statement {
    /// Adds a column to a table.
    pub fn add_column(table: &Table, column: &Column) -> Self {
        AddColumn {
            table: Name::qualified(table.keyspace.as_deref(), &table.name),
            column: ColumnDef::from_schema(column),
        }
        .into()
    }
}

impl From<AddColumn> for Statement {
    fn from(value: AddColumn) -> Self {
        Self::AddColumn(value)
    }
}
