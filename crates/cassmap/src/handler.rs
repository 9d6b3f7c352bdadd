mod create;
mod delete;
mod session;
mod validate;

use session::Session;

use crate::Config;
use cassmap_core::{
    codec::Codec,
    err,
    schema::{
        self,
        app::{self, ClassId},
        db::Table,
    },
    ConverterRegistry, Driver, Error, Result, Schema,
};
use cassmap_cql::Statement;
use std::{fmt, str::FromStr};
use tracing::{debug, error};

/// Schema operation applied to a batch of classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Create,
    Validate,
    Delete,
}

/// Creates, validates and deletes the tables backing persistable classes.
///
/// Every operation acquires its own connection from the driver and releases
/// it before returning, so a handler can be shared between tasks.
#[derive(Debug)]
pub struct SchemaHandler {
    driver: Box<dyn Driver>,
    config: Config,
    converters: ConverterRegistry,
}

impl SchemaHandler {
    /// A handler using the built-in converters.
    pub fn new(driver: impl Driver, config: Config) -> SchemaHandler {
        SchemaHandler {
            driver: Box::new(driver),
            config,
            converters: ConverterRegistry::default(),
        }
    }

    pub fn with_converters(mut self, converters: ConverterRegistry) -> SchemaHandler {
        self.converters = converters;
        self
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn converters(&self) -> &ConverterRegistry {
        &self.converters
    }

    /// Maps a class model onto tables using this handler's settings.
    pub fn build_schema(&self, app: app::Schema) -> Result<Schema> {
        schema::Builder::new()
            .column_separator(&self.config.column_separator)
            .keyspace(&self.config.keyspace)
            .multitenancy(self.config.tenant_id.is_some())
            .build(app, &self.converters)
    }

    /// Row codec for a schema built by this handler.
    pub fn codec<'a>(&'a self, schema: &'a Schema) -> Codec<'a> {
        Codec::new(schema, &self.converters)
    }

    pub async fn create_schema(&self, schema: &Schema, classes: &[ClassId]) -> Result<()> {
        self.run(Operation::Create, schema, classes).await
    }

    pub async fn validate_schema(&self, schema: &Schema, classes: &[ClassId]) -> Result<()> {
        self.run(Operation::Validate, schema, classes).await
    }

    pub async fn delete_schema(&self, schema: &Schema, classes: &[ClassId]) -> Result<()> {
        self.run(Operation::Delete, schema, classes).await
    }

    /// Applies `operation` to each class in `classes`.
    ///
    /// Embeddable classes have no table and are skipped.
    pub async fn run(
        &self,
        operation: Operation,
        schema: &Schema,
        classes: &[ClassId],
    ) -> Result<()> {
        let mut session = Session::open(&*self.driver, &self.config).await?;

        let ret = match operation {
            Operation::Create => self.create(&mut session, schema, classes).await,
            Operation::Validate => self.validate(&mut session, schema, classes).await,
            Operation::Delete => self.delete(&mut session, schema, classes).await,
        };

        session.close();
        ret
    }

    /// Creates the configured keyspace if it does not exist.
    pub async fn create_keyspace(&self) -> Result<()> {
        let stmt = Statement::create_keyspace(
            &self.config.keyspace,
            self.config.replication_or_default(),
            self.config.durable_writes,
        );
        self.run_ddl(&stmt).await
    }

    /// Drops the configured keyspace and everything in it.
    pub async fn delete_keyspace(&self) -> Result<()> {
        self.run_ddl(&Statement::drop_keyspace_if_exists(&self.config.keyspace))
            .await
    }

    async fn run_ddl(&self, stmt: &Statement) -> Result<()> {
        let mut session = Session::open(&*self.driver, &self.config).await?;
        let ret = session.ddl(stmt).await;
        session.close();
        ret
    }

    fn keyspace_of<'a>(&'a self, table: &'a Table) -> &'a str {
        table.keyspace.as_deref().unwrap_or(&self.config.keyspace)
    }

    /// Root classes among `classes`, in the order given.
    fn tables<'a>(
        &'a self,
        schema: &'a Schema,
        classes: &'a [ClassId],
    ) -> impl Iterator<Item = (&'a app::Class, &'a Table)> + 'a {
        classes.iter().filter_map(move |id| {
            let class = schema.app.class(id);
            if !class.is_root() {
                debug!(
                    class = %class.name.upper_camel_case(),
                    "embeddable class has no table; skipping"
                );
                return None;
            }
            Some((class, schema.table_for(id)))
        })
    }
}

/// Remembers the first failure of a batch and logs every one.
///
/// A failing class stops its own statements but not those of the classes
/// after it.
#[derive(Debug, Default)]
struct Failures {
    first: Option<Error>,
}

impl Failures {
    fn record(&mut self, operation: Operation, class: &app::Class, cause: Error) {
        let class = class.name.upper_camel_case();
        error!(%operation, %class, error = %cause, "schema operation failed");

        if self.first.is_none() {
            self.first = Some(cause.context(err!("{operation} schema for class `{class}`")));
        }
    }

    fn finish(self) -> Result<()> {
        match self.first {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Operation::Create => "create",
            Operation::Validate => "validate",
            Operation::Delete => "delete",
        })
    }
}

impl FromStr for Operation {
    type Err = Error;

    fn from_str(s: &str) -> Result<Operation> {
        match &s.to_ascii_lowercase()[..] {
            "create" => Ok(Operation::Create),
            "validate" => Ok(Operation::Validate),
            "delete" => Ok(Operation::Delete),
            _ => Err(err!("unknown schema operation `{s}`")),
        }
    }
}
