use super::{Name, Statement};

#[derive(Debug, Clone)]
pub struct CreateKeyspace {
    pub name: Name,

    /// Replication map, passed through as written
    pub replication: String,

    pub durable_writes: bool,
}

impl Statement {
    /// Creates a keyspace if it does not exist.
    pub fn create_keyspace(name: &str, replication: &str, durable_writes: bool) -> Self {
        CreateKeyspace {
            name: Name::from(name),
            replication: replication.to_string(),
            durable_writes,
        }
        .into()
    }
}

impl From<CreateKeyspace> for Statement {
    fn from(value: CreateKeyspace) -> Self {
        Self::CreateKeyspace(value)
    }
}
