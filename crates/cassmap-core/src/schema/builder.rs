mod table;

use super::{app, db, Mapping, Schema};
use crate::{convert::ConverterRegistry, Result};

/// Builds the tables and mapping of a class model.
///
/// Building is cheap and deterministic; the synchronizer rebuilds on every
/// call so configuration errors surface at synchronization time.
#[derive(Debug, Clone)]
pub struct Builder {
    /// Joins the field names of an embed chain into a column name
    column_separator: String,

    /// Keyspace of classes that do not name one
    keyspace: Option<String>,

    /// Add a tenant column to classes that do not opt out
    multitenancy: bool,
}

impl Builder {
    pub fn new() -> Self {
        Self {
            column_separator: "_".to_string(),
            keyspace: None,
            multitenancy: false,
        }
    }

    pub fn column_separator(&mut self, separator: &str) -> &mut Self {
        self.column_separator = separator.to_string();
        self
    }

    pub fn keyspace(&mut self, keyspace: &str) -> &mut Self {
        self.keyspace = Some(keyspace.to_string());
        self
    }

    pub fn multitenancy(&mut self, enabled: bool) -> &mut Self {
        self.multitenancy = enabled;
        self
    }

    pub fn build(&self, app: app::Schema, converters: &ConverterRegistry) -> Result<Schema> {
        let mut tables = vec![];
        let mut mapping = Mapping::default();

        for class in app.root_classes() {
            let id = db::TableId(tables.len());
            let (table, class_mapping) =
                table::BuildTable::new(self, &app, converters, class, id).build()?;

            tables.push(table);
            mapping.classes.insert(class.id, class_mapping);
        }

        Ok(Schema {
            app,
            db: db::Schema { tables },
            mapping,
        })
    }

    /// Columns produced by flattening the composite reached through `chain`.
    ///
    /// The last field of `chain` must be an embedded field. Columns are
    /// returned in field declaration order, depth first.
    pub fn columns_for(
        &self,
        app: &app::Schema,
        converters: &ConverterRegistry,
        table: db::TableId,
        chain: &app::EmbedChain,
    ) -> Result<Vec<db::Column>> {
        table::columns_for(self, app, converters, table, chain)
    }
}

impl Default for Builder {
    fn default() -> Self {
        Self::new()
    }
}
