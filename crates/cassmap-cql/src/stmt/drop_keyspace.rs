use super::{Name, Statement};

#[derive(Debug, Clone)]
pub struct DropKeyspace {
    pub name: Name,

    /// Whether or not to add an `IF EXISTS` clause.
    pub if_exists: bool,
}

impl Statement {
    /// Drops a keyspace if it exists.
    pub fn drop_keyspace_if_exists(name: &str) -> Self {
        DropKeyspace {
            name: Name::from(name),
            if_exists: true,
        }
        .into()
    }
}

impl From<DropKeyspace> for Statement {
    fn from(value: DropKeyspace) -> Self {
        Self::DropKeyspace(value)
    }
}
