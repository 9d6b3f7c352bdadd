use crate::{script::Script, Config};
use cassmap_core::{
    driver::{Response, Row},
    err,
    schema::db::TableSnapshot,
    stmt::Value,
    Connection, Driver, Result,
};
use cassmap_cql::{with_params, Serializer, Statement};
use tracing::{debug, warn};

/// One schema operation's hold on the store.
///
/// Dropping the session releases the connection.
pub(super) struct Session {
    connection: Box<dyn Connection>,

    /// Set in script mode
    script: Option<Script>,

    serializer: Serializer,
}

impl Session {
    pub(super) async fn open(driver: &dyn Driver, config: &Config) -> Result<Session> {
        let connection = driver.connect().await?;
        let script = config.ddl_file.as_deref().map(Script::create).transpose()?;

        Ok(Session {
            connection,
            script,
            serializer: Serializer::new(),
        })
    }

    /// Executes a DDL statement, or appends it to the script in script mode.
    pub(super) async fn ddl(&mut self, stmt: &Statement) -> Result<()> {
        let mut params = Vec::<Value>::new();
        let cql = self.serializer.serialize(stmt, &mut params);

        if let Some(script) = &mut self.script {
            script.write(&cql);
            return Ok(());
        }

        self.execute(&cql, &params).await?;
        Ok(())
    }

    /// Runs a query against the store, also in script mode.
    pub(super) async fn query(&mut self, stmt: &Statement) -> Result<Vec<Row>> {
        let mut params = Vec::<Value>::new();
        let cql = self.serializer.serialize(stmt, &mut params);
        Ok(self.execute(&cql, &params).await?.into_rows())
    }

    async fn execute(&mut self, cql: &str, params: &[Value]) -> Result<Response> {
        debug!(cql = %with_params(cql, params), "executing statement");

        self.connection
            .execute(cql, params)
            .await
            .map_err(|cause| cause.context(err!("failed to execute `{cql}`")))
    }

    pub(super) async fn table_exists(&mut self, keyspace: &str, table: &str) -> Result<bool> {
        let rows = self.query(&Statement::select_table(keyspace, table)).await?;
        Ok(!rows.is_empty())
    }

    /// Columns and indexes of a table, or `None` if it does not exist.
    pub(super) async fn snapshot(
        &mut self,
        keyspace: &str,
        table: &str,
    ) -> Result<Option<TableSnapshot>> {
        if !self.table_exists(keyspace, table).await? {
            return Ok(None);
        }

        let mut snapshot = TableSnapshot::new();

        for row in self.query(&Statement::select_columns(keyspace, table)).await? {
            let (Some(name), Some(ty)) = (row.get_string("column_name")?, row.get_string("type")?)
            else {
                continue;
            };
            snapshot.insert_column(&name, &ty);
        }

        for row in self.query(&Statement::select_indexes(keyspace, table)).await? {
            let Some(index) = row.get_string("index_name")? else {
                continue;
            };

            match index_target(row.raw("options")?) {
                Some(column) => snapshot.insert_index(column, &index),
                None => warn!(%index, table, "index has no target column; ignoring"),
            }
        }

        Ok(Some(snapshot))
    }

    /// Flushes the script, if any.
    pub(super) fn close(self) {
        if let Some(script) = self.script {
            script.finish();
        }
    }
}

/// Column named by an index's `target` option.
///
/// Collection indexes wrap the column, as in `values(tags)`.
fn index_target(options: &Value) -> Option<&str> {
    let Value::Map(entries) = options else {
        return None;
    };

    let target = entries.iter().find_map(|entry| match entry {
        (Value::String(key), Value::String(target)) if key == "target" => Some(target.as_str()),
        _ => None,
    })?;

    let column = match target.find('(') {
        Some(open) if target.ends_with(')') => &target[open + 1..target.len() - 1],
        _ => target,
    };

    Some(column.trim_matches('"'))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(target: &str) -> Value {
        Value::Map(vec![
            (Value::from("class_name"), Value::from("")),
            (Value::from("target"), Value::from(target)),
        ])
    }

    #[test]
    fn plain_target() {
        assert_eq!(index_target(&options("age")), Some("age"));
    }

    #[test]
    fn wrapped_target() {
        assert_eq!(index_target(&options("values(tags)")), Some("tags"));
        assert_eq!(index_target(&options("keys(scores)")), Some("scores"));
        assert_eq!(index_target(&options("\"Name\"")), Some("Name"));
    }

    #[test]
    fn missing_target() {
        assert_eq!(index_target(&Value::Map(vec![])), None);
        assert_eq!(index_target(&Value::Null), None);
    }
}
