use super::{Failures, Operation, SchemaHandler, Session};
use cassmap_core::{
    schema::{app::ClassId, db::Table},
    Result, Schema,
};
use cassmap_cql::Statement;
use tracing::{debug, warn};

impl SchemaHandler {
    pub(super) async fn create(
        &self,
        session: &mut Session,
        schema: &Schema,
        classes: &[ClassId],
    ) -> Result<()> {
        let mut failures = Failures::default();

        for (class, table) in self.tables(schema, classes) {
            if let Err(cause) = self.create_table(session, table).await {
                failures.record(Operation::Create, class, cause);
            }
        }

        failures.finish()
    }

    async fn create_table(&self, session: &mut Session, table: &Table) -> Result<()> {
        let keyspace = self.keyspace_of(table);

        let Some(snapshot) = session.snapshot(keyspace, &table.name).await? else {
            if !self.config.auto_create_tables {
                debug!(
                    table = %table.qualified_name(),
                    "table does not exist; auto-create disabled"
                );
                return Ok(());
            }

            session.ddl(&Statement::create_table(table)).await?;

            if self.config.auto_create_constraints {
                for index in &table.indices {
                    session.ddl(&Statement::create_index(table, index)).await?;
                }
            }

            return Ok(());
        };

        debug!(table = %table.qualified_name(), "table already exists");

        if !self.config.auto_create_columns {
            return Ok(());
        }

        for column in table.physical_columns() {
            if snapshot.contains_column(&column.name) {
                continue;
            }

            if column.primary_key {
                warn!(
                    table = %table.qualified_name(),
                    column = %column.name,
                    "cannot add a primary key column to an existing table"
                );
                continue;
            }

            session.ddl(&Statement::add_column(table, column)).await?;
        }

        if self.config.auto_create_constraints {
            for index in &table.indices {
                let column = table.column(index.column);

                if snapshot.is_indexed(&column.name) {
                    debug!(index = %index.name, column = %column.name, "column already indexed");
                    continue;
                }

                session.ddl(&Statement::create_index(table, index)).await?;
            }
        }

        Ok(())
    }
}
