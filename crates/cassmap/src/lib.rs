mod config;
pub use config::{Config, DEFAULT_REPLICATION};

mod handler;
pub use handler::{Operation, SchemaHandler};

mod script;

pub use cassmap_core::{
    async_trait, bail, codec, convert, driver, err, runtime, schema, stmt, Connection, Converter,
    ConverterRegistry, Driver, Error, Result, Schema, ValidationIssue,
};

pub use cassmap_cql as cql;
