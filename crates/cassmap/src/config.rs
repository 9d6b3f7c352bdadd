use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Replication used when creating a keyspace without explicit properties.
pub const DEFAULT_REPLICATION: &str = "{'class': 'SimpleStrategy', 'replication_factor' : 3}";

/// Settings of the schema synchronizer.
///
/// Can be deserialized from any serde format; only `keyspace` is required.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// Keyspace of classes that do not name one
    pub keyspace: String,

    /// Create tables that do not exist
    #[serde(default = "enabled")]
    pub auto_create_tables: bool,

    /// Add missing columns and indexes to tables that already exist
    #[serde(default)]
    pub auto_create_columns: bool,

    /// Create declared indexes
    #[serde(default = "enabled")]
    pub auto_create_constraints: bool,

    /// Replication properties, passed through verbatim
    #[serde(default)]
    pub replication: Option<String>,

    #[serde(default = "enabled")]
    pub durable_writes: bool,

    /// Write DDL to this file instead of executing it
    #[serde(default)]
    pub ddl_file: Option<PathBuf>,

    /// Joins the field names of an embedded column
    #[serde(default = "default_separator")]
    pub column_separator: String,

    /// Tenant of this process. Turns on the tenant column.
    #[serde(default)]
    pub tenant_id: Option<String>,
}

impl Config {
    pub fn new(keyspace: impl Into<String>) -> Config {
        Config {
            keyspace: keyspace.into(),
            auto_create_tables: true,
            auto_create_columns: false,
            auto_create_constraints: true,
            replication: None,
            durable_writes: true,
            ddl_file: None,
            column_separator: default_separator(),
            tenant_id: None,
        }
    }

    pub fn auto_create_tables(&mut self, enabled: bool) -> &mut Self {
        self.auto_create_tables = enabled;
        self
    }

    pub fn auto_create_columns(&mut self, enabled: bool) -> &mut Self {
        self.auto_create_columns = enabled;
        self
    }

    pub fn auto_create_constraints(&mut self, enabled: bool) -> &mut Self {
        self.auto_create_constraints = enabled;
        self
    }

    pub fn replication(&mut self, replication: &str) -> &mut Self {
        self.replication = Some(replication.to_string());
        self
    }

    pub fn durable_writes(&mut self, enabled: bool) -> &mut Self {
        self.durable_writes = enabled;
        self
    }

    pub fn ddl_file(&mut self, path: impl AsRef<Path>) -> &mut Self {
        self.ddl_file = Some(path.as_ref().to_path_buf());
        self
    }

    pub fn column_separator(&mut self, separator: &str) -> &mut Self {
        self.column_separator = separator.to_string();
        self
    }

    pub fn tenant_id(&mut self, tenant_id: &str) -> &mut Self {
        self.tenant_id = Some(tenant_id.to_string());
        self
    }

    /// Replication properties, or [`DEFAULT_REPLICATION`].
    pub fn replication_or_default(&self) -> &str {
        self.replication.as_deref().unwrap_or(DEFAULT_REPLICATION)
    }
}

fn enabled() -> bool {
    true
}

fn default_separator() -> String {
    "_".to_string()
}
