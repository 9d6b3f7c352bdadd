use super::{Failures, Operation, SchemaHandler, Session};
use cassmap_core::{
    schema::{
        app::ClassId,
        db::{IndexOrigin, Table},
    },
    Result, Schema,
};
use cassmap_cql::Statement;
use tracing::debug;

impl SchemaHandler {
    pub(super) async fn delete(
        &self,
        session: &mut Session,
        schema: &Schema,
        classes: &[ClassId],
    ) -> Result<()> {
        let mut failures = Failures::default();

        for (class, table) in self.tables(schema, classes) {
            if let Err(cause) = self.drop_table(session, table).await {
                failures.record(Operation::Delete, class, cause);
            }
        }

        failures.finish()
    }

    async fn drop_table(&self, session: &mut Session, table: &Table) -> Result<()> {
        if !session
            .table_exists(self.keyspace_of(table), &table.name)
            .await?
        {
            debug!(table = %table.qualified_name(), "table does not exist; nothing to delete");
            return Ok(());
        }

        for origin in [IndexOrigin::Field, IndexOrigin::Class] {
            for index in table.indices_from(origin) {
                session
                    .ddl(&Statement::drop_index_if_exists(table, index))
                    .await?;
            }
        }

        session.ddl(&Statement::drop_table(table)).await
    }
}
