use super::{Name, Statement};

use cassmap_core::schema::db::Table;

/// A statement to drop a table.
#[derive(Debug, Clone)]
pub struct DropTable {
    /// Name of the table.
    pub name: Name,

    /// Whether or not to add an `IF EXISTS` clause.
    pub if_exists: bool,
}

impl Statement {
    /// Drops a table.
    ///
    /// This function _does not_ add an `IF EXISTS` clause.
    pub fn drop_table(table: &Table) -> Self {
        DropTable {
            name: Name::qualified(table.keyspace.as_deref(), &table.name),
            if_exists: false,
        }
        .into()
    }
}

impl From<DropTable> for Statement {
    fn from(value: DropTable) -> Self {
        Self::DropTable(value)
    }
}
