use super::{SchemaHandler, Session};
use cassmap_core::{
    schema::{app::ClassId, validate::validate_table},
    Error, Result, Schema,
};

impl SchemaHandler {
    /// Checks every class before failing, so the error lists all issues of
    /// the batch.
    pub(super) async fn validate(
        &self,
        session: &mut Session,
        schema: &Schema,
        classes: &[ClassId],
    ) -> Result<()> {
        let mut issues = vec![];

        for (class, table) in self.tables(schema, classes) {
            let snapshot = session
                .snapshot(self.keyspace_of(table), &table.name)
                .await?;

            issues.extend(validate_table(
                &class.name.upper_camel_case(),
                table,
                snapshot.as_ref(),
            ));
        }

        if issues.is_empty() {
            Ok(())
        } else {
            Err(Error::schema_validation(issues))
        }
    }
}
