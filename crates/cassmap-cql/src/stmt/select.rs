use super::{Name, Statement, Value};

const SYSTEM_SCHEMA: &str = "system_schema";

/// A query against the store's schema catalog.
///
/// The filter is a conjunction of equality tests, each bound as a parameter.
#[derive(Debug, Clone)]
pub struct Select {
    pub columns: Vec<String>,

    pub from: Name,

    pub filter: Vec<(String, Value)>,
}

impl Select {
    fn catalog(catalog: &str, columns: &[&str], keyspace: &str, table: &str) -> Select {
        Select {
            columns: columns.iter().map(|column| column.to_string()).collect(),
            from: Name::qualified(Some(SYSTEM_SCHEMA), catalog),
            filter: vec![
                ("keyspace_name".into(), keyspace.to_lowercase().into()),
                ("table_name".into(), table.to_lowercase().into()),
            ],
        }
    }
}

impl Statement {
    /// Looks up a table by name.
    pub fn select_table(keyspace: &str, table: &str) -> Self {
        Select::catalog("tables", &["table_name"], keyspace, table).into()
    }

    /// Lists the columns of a table with their types.
    pub fn select_columns(keyspace: &str, table: &str) -> Self {
        Select::catalog("columns", &["column_name", "type"], keyspace, table).into()
    }

    /// Lists the secondary indexes of a table with their options.
    pub fn select_indexes(keyspace: &str, table: &str) -> Self {
        Select::catalog("indexes", &["index_name", "options"], keyspace, table).into()
    }
}

impl From<Select> for Statement {
    fn from(value: Select) -> Self {
        Self::Select(value)
    }
}
