use std::fmt;

/// A possibly keyspace-qualified identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Name(pub Vec<String>);

impl Name {
    /// `keyspace.name`, or the bare name when there is no keyspace.
    pub fn qualified(keyspace: Option<&str>, name: &str) -> Name {
        match keyspace {
            Some(keyspace) => Name(vec![keyspace.into(), name.into()]),
            None => Name::from(name),
        }
    }
}

impl From<&str> for Name {
    fn from(value: &str) -> Self {
        Self(vec![value.into()])
    }
}

impl From<&String> for Name {
    fn from(value: &String) -> Self {
        Self::from(&value[..])
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = "";
        for ident in &self.0 {
            write!(f, "{s}{ident}")?;
            s = ".";
        }

        Ok(())
    }
}
