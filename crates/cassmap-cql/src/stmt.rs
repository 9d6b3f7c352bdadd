mod add_column;
pub use add_column::AddColumn;

mod column_def;
pub use column_def::ColumnDef;

mod create_index;
pub use create_index::CreateIndex;

mod create_keyspace;
pub use create_keyspace::CreateKeyspace;

mod create_table;
pub use create_table::CreateTable;

mod drop_index;
pub use drop_index::DropIndex;

mod drop_keyspace;
pub use drop_keyspace::DropKeyspace;

mod drop_table;
pub use drop_table::DropTable;

mod name;
pub use name::Name;

mod select;
pub use select::Select;

pub use cassmap_core::stmt::Value;

#[derive(Debug, Clone)]
pub enum Statement {
    AddColumn(AddColumn),
    CreateIndex(CreateIndex),
    CreateKeyspace(CreateKeyspace),
    CreateTable(CreateTable),
    DropIndex(DropIndex),
    DropKeyspace(DropKeyspace),
    DropTable(DropTable),
    Select(Select),
}

impl Statement {
    /// True for statements that change the physical schema.
    pub fn is_ddl(&self) -> bool {
        !matches!(self, Statement::Select(_))
    }
}
