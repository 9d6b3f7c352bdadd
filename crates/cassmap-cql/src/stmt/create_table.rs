use super::{ColumnDef, Name, Statement};

use cassmap_core::schema::db::Table;

#[derive(Debug, Clone)]
pub struct CreateTable {
    /// Name of the table
    pub name: Name,

    /// Column definitions
    pub columns: Vec<ColumnDef>,

    /// Primary key column names, in key order
    pub primary_key: Vec<String>,
}

impl Statement {
    /// Creates a table with every physical column of `table`.
    pub fn create_table(table: &Table) -> Self {
        CreateTable {
            name: Name::qualified(table.keyspace.as_deref(), &table.name),
            columns: table.physical_columns().map(ColumnDef::from_schema).collect(),
            primary_key: table
                .primary_key_columns()
                .map(|column| column.name.clone())
                .collect(),
        }
        .into()
    }
}

impl From<CreateTable> for Statement {
    fn from(value: CreateTable) -> Self {
        Self::CreateTable(value)
    }
}
