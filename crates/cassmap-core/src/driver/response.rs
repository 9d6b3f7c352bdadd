use super::Row;

#[derive(Debug)]
pub enum Response {
    /// Result set of a query
    Rows(Vec<Row>),

    /// The statement was applied and returned nothing
    Applied,
}

impl Response {
    pub fn rows(rows: impl Into<Vec<Row>>) -> Self {
        Self::Rows(rows.into())
    }

    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied)
    }

    /// The rows of a query result. Non-queries have none.
    pub fn into_rows(self) -> Vec<Row> {
        match self {
            Self::Rows(rows) => rows,
            Self::Applied => vec![],
        }
    }
}
