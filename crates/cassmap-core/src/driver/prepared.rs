/// Handle of a statement prepared by a connection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prepared {
    /// Driver specific statement id
    pub id: u64,

    /// The statement text
    pub cql: String,
}

impl Prepared {
    pub fn new(id: u64, cql: impl Into<String>) -> Prepared {
        Prepared {
            id,
            cql: cql.into(),
        }
    }
}
