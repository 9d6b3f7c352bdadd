use super::{Column, ColumnId, Index, IndexOrigin};
use crate::schema::app::EmbedChain;
use std::fmt;

#[derive(Debug)]
pub struct Table {
    /// Uniquely identifies a table
    pub id: TableId,

    /// Lower-cased table name
    pub name: String,

    /// Keyspace holding the table
    pub keyspace: Option<String>,

    /// The table's columns, in creation order
    pub columns: Vec<Column>,

    /// Primary key columns, in key order
    pub primary_key: Vec<ColumnId>,

    /// Secondary indexes, field-level first
    pub indices: Vec<Index>,
}

/// Uniquely identifies a table
#[derive(PartialEq, Eq, Clone, Copy, Hash)]
pub struct TableId(pub usize);

impl Table {
    pub fn new(id: TableId, name: String, keyspace: Option<String>) -> Self {
        Self {
            id,
            name,
            keyspace,
            columns: vec![],
            primary_key: vec![],
            indices: vec![],
        }
    }

    pub fn column(&self, id: impl Into<ColumnId>) -> &Column {
        &self.columns[id.into().index]
    }

    /// Case-insensitive lookup by column name.
    pub fn column_by_name(&self, name: &str) -> Option<&Column> {
        self.columns
            .iter()
            .find(|column| column.name.eq_ignore_ascii_case(name))
    }

    pub fn column_for_chain(&self, chain: &EmbedChain) -> Option<&Column> {
        self.columns
            .iter()
            .find(|column| column.chain() == Some(chain))
    }

    /// Columns that exist in the physical table.
    pub fn physical_columns(&self) -> impl Iterator<Item = &Column> + '_ {
        self.columns.iter().filter(|column| column.is_physical())
    }

    pub fn primary_key_columns(&self) -> impl ExactSizeIterator<Item = &Column> + '_ {
        self.primary_key.iter().map(|column_id| self.column(*column_id))
    }

    pub fn indices_from(&self, origin: IndexOrigin) -> impl Iterator<Item = &Index> + '_ {
        self.indices.iter().filter(move |index| index.origin == origin)
    }

    /// `keyspace.table`, or the bare table name.
    pub fn qualified_name(&self) -> String {
        match &self.keyspace {
            Some(keyspace) => format!("{keyspace}.{}", self.name),
            None => self.name.clone(),
        }
    }
}

impl fmt::Debug for TableId {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "TableId({})", self.0)
    }
}
